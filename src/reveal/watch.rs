use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::config::RevealConfig;
use crate::error::PortfolioError;
use crate::reveal::state::{RevealState, RevealTracker, Transition, Visibility};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
}

impl From<&RevealConfig> for WatchOptions {
    fn from(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold(),
        }
    }
}

/// A registered visibility watch. Dropping it releases every resource the
/// watch holds.
pub trait Watch {
    /// Stops delivering reports. Safe to call from inside a report.
    fn disengage(&self);
}

/// Something that can report how much of a target is inside the viewport.
pub trait VisibilitySource {
    type Target;

    fn watch(
        &self,
        target: &Self::Target,
        options: &WatchOptions,
        on_change: Box<dyn FnMut(Visibility)>,
    ) -> Result<Box<dyn Watch>, PortfolioError>;
}

type WatchSlot = RefCell<Option<Box<dyn Watch>>>;

/// Drives one reveal section: owns its tracker and its watch.
#[derive(Clone)]
pub struct RevealController {
    tracker: Rc<RefCell<RevealTracker>>,
    watch: Rc<WatchSlot>,
    on_transition: Rc<dyn Fn(Transition)>,
}

impl RevealController {
    pub fn mount<S, F>(source: &S, target: &S::Target, config: &RevealConfig, on_transition: F) -> Self
    where
        S: VisibilitySource,
        F: Fn(Transition) + 'static,
    {
        let controller = Self {
            tracker: Rc::new(RefCell::new(RevealTracker::new(config))),
            watch: Rc::new(RefCell::new(None)),
            on_transition: Rc::new(on_transition),
        };

        let on_change = report_handler(
            Rc::downgrade(&controller.tracker),
            Rc::downgrade(&controller.watch),
            controller.on_transition.clone(),
        );

        match source.watch(target, &WatchOptions::from(config), on_change) {
            Ok(watch) => {
                *controller.watch.borrow_mut() = Some(watch);
            }
            Err(err) => {
                warn!("{}; showing section without animation", err);
                controller.reveal_now(false);
            }
        }

        controller
    }

    /// Reveals the section and stops watching, but only when the observer
    /// has not reported anything yet. Once a report arrived the observer is
    /// known to work and keeps deciding.
    pub fn fail_open(&self) {
        if self.tracker.borrow().has_reported() {
            return;
        }
        if self.reveal_now(true) {
            debug!("no visibility report arrived in time; revealing");
        }
        self.disengage();
    }

    pub fn unmount(&self) {
        self.tracker.borrow_mut().release();
        let watch = self.watch.borrow_mut().take();
        drop(watch);
    }

    pub fn state(&self) -> RevealState {
        self.tracker.borrow().state()
    }

    pub fn is_watching(&self) -> bool {
        self.watch.borrow().is_some()
    }

    fn reveal_now(&self, animate: bool) -> bool {
        let transition = self.tracker.borrow_mut().force_reveal(animate);
        match transition {
            Some(transition) => {
                (self.on_transition)(transition);
                true
            }
            None => false,
        }
    }

    fn disengage(&self) {
        if let Some(watch) = self.watch.borrow().as_ref() {
            watch.disengage();
        }
    }
}

// Weak handles: the source owns this closure, and the controller owns the
// source's watch.
fn report_handler(
    tracker: Weak<RefCell<RevealTracker>>,
    watch: Weak<WatchSlot>,
    on_transition: Rc<dyn Fn(Transition)>,
) -> Box<dyn FnMut(Visibility)> {
    Box::new(move |visibility: Visibility| {
        let tracker = match tracker.upgrade() {
            Some(tracker) => tracker,
            None => return,
        };

        let (transition, disengage) = match tracker.try_borrow_mut() {
            Ok(mut tracker) => {
                let transition = tracker.observe(visibility);
                (transition, tracker.should_disengage())
            }
            Err(_) => return,
        };

        if let Some(transition) = transition {
            on_transition(transition);
        }

        if disengage {
            if let Some(watch) = watch.upgrade() {
                if let Ok(watch) = watch.try_borrow() {
                    if let Some(watch) = watch.as_ref() {
                        watch.disengage();
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct NoopSource;

    struct NoopWatch;

    impl Watch for NoopWatch {
        fn disengage(&self) {}
    }

    impl VisibilitySource for NoopSource {
        type Target = ();

        fn watch(
            &self,
            _target: &(),
            _options: &WatchOptions,
            _on_change: Box<dyn FnMut(Visibility)>,
        ) -> Result<Box<dyn Watch>, PortfolioError> {
            Ok(Box::new(NoopWatch))
        }
    }

    struct MissingSource;

    impl VisibilitySource for MissingSource {
        type Target = ();

        fn watch(
            &self,
            _target: &(),
            _options: &WatchOptions,
            _on_change: Box<dyn FnMut(Visibility)>,
        ) -> Result<Box<dyn Watch>, PortfolioError> {
            Err(PortfolioError::ObserverUnavailable("IntersectionObserver is not defined".into()))
        }
    }

    /// Keeps the report callback even after the watch is dropped, like a
    /// host that delivers one last queued event.
    #[derive(Default)]
    struct LeakySource {
        callback: RefCell<Option<Box<dyn FnMut(Visibility)>>>,
        disengaged: Rc<Cell<u32>>,
    }

    struct CountingWatch(Rc<Cell<u32>>);

    impl Watch for CountingWatch {
        fn disengage(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl VisibilitySource for LeakySource {
        type Target = ();

        fn watch(
            &self,
            _target: &(),
            _options: &WatchOptions,
            on_change: Box<dyn FnMut(Visibility)>,
        ) -> Result<Box<dyn Watch>, PortfolioError> {
            *self.callback.borrow_mut() = Some(on_change);
            Ok(Box::new(CountingWatch(self.disengaged.clone())))
        }
    }

    impl LeakySource {
        fn report(&self, visibility: Visibility) {
            if let Some(callback) = self.callback.borrow_mut().as_mut() {
                callback(visibility);
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<Transition>>>, impl Fn(Transition) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |t: Transition| sink.borrow_mut().push(t))
    }

    #[test]
    fn silent_source_does_not_crash_or_reveal() {
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&NoopSource, &(), &RevealConfig::default(), on_transition);

        assert!(controller.is_watching());
        assert!(!controller.state().has_been_visible());
        assert!(seen.borrow().is_empty());

        controller.unmount();
        assert!(!controller.is_watching());
    }

    #[test]
    fn missing_observer_fails_open_without_animation() {
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&MissingSource, &(), &RevealConfig::default(), on_transition);

        assert!(controller.state().has_been_visible());
        assert!(!controller.is_watching());
        assert_eq!(*seen.borrow(), vec![Transition::Reveal { animate: false }]);
    }

    #[test]
    fn reveal_disengages_watch() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&source, &(), &RevealConfig::default(), on_transition);

        source.report(Visibility::new(0.05, true));
        assert!(seen.borrow().is_empty());
        assert_eq!(source.disengaged.get(), 0);

        source.report(Visibility::new(0.4, true));
        source.report(Visibility::new(0.0, false));

        assert_eq!(*seen.borrow(), vec![Transition::Reveal { animate: true }]);
        assert!(controller.state().has_been_visible());
        assert!(source.disengaged.get() >= 1);
    }

    #[test]
    fn report_after_unmount_is_ignored() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&source, &(), &RevealConfig::default(), on_transition);

        controller.unmount();
        source.report(Visibility::new(1.0, true));

        assert!(seen.borrow().is_empty());
        assert!(!controller.state().has_been_visible());
    }

    #[test]
    fn report_after_controller_dropped_is_ignored() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&source, &(), &RevealConfig::default(), on_transition);

        drop(controller);
        source.report(Visibility::new(1.0, true));

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn fail_open_reveals_once_and_disengages() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&source, &(), &RevealConfig::default().with_fallback(3000), on_transition);

        controller.fail_open();
        controller.fail_open();
        source.report(Visibility::new(1.0, true));

        assert_eq!(*seen.borrow(), vec![Transition::Reveal { animate: true }]);
        assert!(source.disengaged.get() >= 1);
    }

    #[test]
    fn fail_open_after_below_threshold_report_keeps_section_hidden() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&source, &(), &RevealConfig::default().with_fallback(3000), on_transition);

        source.report(Visibility::new(0.0, false));
        controller.fail_open();

        assert!(seen.borrow().is_empty());
        assert!(!controller.state().has_been_visible());
        assert_eq!(source.disengaged.get(), 0);
        assert!(controller.is_watching());

        source.report(Visibility::new(0.5, true));
        assert_eq!(*seen.borrow(), vec![Transition::Reveal { animate: true }]);
    }

    #[test]
    fn fail_open_after_unmount_does_nothing() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let controller = RevealController::mount(&source, &(), &RevealConfig::default(), on_transition);

        controller.unmount();
        controller.fail_open();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn every_time_mode_keeps_watching() {
        let source = LeakySource::default();
        let (seen, on_transition) = recorder();
        let _controller = RevealController::mount(&source, &(), &RevealConfig::default().every_time(), on_transition);

        source.report(Visibility::new(0.5, true));
        source.report(Visibility::hidden());
        source.report(Visibility::new(0.5, true));

        assert_eq!(
            *seen.borrow(),
            vec![
                Transition::Reveal { animate: true },
                Transition::Hide,
                Transition::Reveal { animate: true },
            ]
        );
        assert_eq!(source.disengaged.get(), 0);
    }
}
