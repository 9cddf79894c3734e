//! A scrollable page model that reports visibility the way
//! `IntersectionObserver` does: once when observation starts, then on every
//! threshold crossing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::PortfolioError;
use crate::reveal::state::Visibility;
use crate::reveal::watch::{VisibilitySource, Watch, WatchOptions};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn visibility(&self, scroll_y: f64, viewport_height: f64) -> Visibility {
        let visible_top = self.top.max(scroll_y);
        let visible_bottom = (self.top + self.height).min(scroll_y + viewport_height);
        let visible = (visible_bottom - visible_top).max(0.0);
        let is_intersecting = visible_bottom >= visible_top;
        let ratio = if self.height > 0.0 { visible / self.height } else { 0.0 };
        Visibility::new(ratio, is_intersecting)
    }
}

type Callback = Rc<RefCell<Box<dyn FnMut(Visibility)>>>;

struct Watcher {
    id: u64,
    region: Region,
    threshold: f64,
    last_above: Option<bool>,
    callback: Callback,
}

struct Viewport {
    height: f64,
    scroll_y: f64,
    next_id: u64,
    watchers: Vec<Watcher>,
}

#[derive(Clone)]
pub struct SimulatedViewport {
    inner: Rc<RefCell<Viewport>>,
}

impl SimulatedViewport {
    pub fn new(height: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Viewport {
                height,
                scroll_y: 0.0,
                next_id: 0,
                watchers: Vec::new(),
            })),
        }
    }

    pub fn active_watchers(&self) -> usize {
        self.inner.borrow().watchers.len()
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        self.inner.borrow_mut().scroll_y = scroll_y;
        self.flush();
    }

    /// Delivers pending reports for the current scroll position.
    pub fn flush(&self) {
        let pending: Vec<(u64, Visibility, Callback)> = {
            let mut viewport = self.inner.borrow_mut();
            let (scroll_y, height) = (viewport.scroll_y, viewport.height);
            viewport
                .watchers
                .iter_mut()
                .filter_map(|watcher| {
                    let visibility = watcher.region.visibility(scroll_y, height);
                    let above = visibility.meets(watcher.threshold);
                    if watcher.last_above == Some(above) {
                        return None;
                    }
                    watcher.last_above = Some(above);
                    Some((watcher.id, visibility, watcher.callback.clone()))
                })
                .collect()
        };

        for (id, visibility, callback) in pending {
            // An earlier report in this batch may have released the watcher.
            if self.is_registered(id) {
                (callback.borrow_mut())(visibility);
            }
        }
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner.borrow().watchers.iter().any(|w| w.id == id)
    }
}

struct SimulatedWatch {
    id: u64,
    viewport: Weak<RefCell<Viewport>>,
}

impl Watch for SimulatedWatch {
    fn disengage(&self) {
        if let Some(viewport) = self.viewport.upgrade() {
            viewport.borrow_mut().watchers.retain(|w| w.id != self.id);
        }
    }
}

impl Drop for SimulatedWatch {
    fn drop(&mut self) {
        self.disengage();
    }
}

impl VisibilitySource for SimulatedViewport {
    type Target = Region;

    fn watch(
        &self,
        target: &Region,
        options: &WatchOptions,
        on_change: Box<dyn FnMut(Visibility)>,
    ) -> Result<Box<dyn Watch>, PortfolioError> {
        let mut viewport = self.inner.borrow_mut();
        let id = viewport.next_id;
        viewport.next_id += 1;
        viewport.watchers.push(Watcher {
            id,
            region: *target,
            threshold: options.threshold,
            last_above: None,
            callback: Rc::new(RefCell::new(on_change)),
        });
        Ok(Box::new(SimulatedWatch {
            id,
            viewport: Rc::downgrade(&self.inner),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::RevealConfig;
    use crate::reveal::state::Transition;
    use crate::reveal::visual::VisualState;
    use crate::reveal::watch::RevealController;

    const VIEWPORT: f64 = 800.0;

    fn mount_section(
        viewport: &SimulatedViewport,
        region: Region,
        index: usize,
        log: &Rc<RefCell<Vec<(usize, f64)>>>,
    ) -> RevealController {
        let log = log.clone();
        let page = viewport.clone();
        RevealController::mount(viewport, &region, &RevealConfig::default(), move |t: Transition| {
            if let Transition::Reveal { .. } = t {
                log.borrow_mut().push((index, page.inner.borrow().scroll_y));
            }
        })
    }

    #[test]
    fn region_visibility_fraction() {
        let region = Region::new(1000.0, 400.0);

        assert_eq!(region.visibility(0.0, VIEWPORT), Visibility::new(0.0, false));
        assert_eq!(region.visibility(300.0, VIEWPORT), Visibility::new(0.25, true));
        assert_eq!(region.visibility(1000.0, VIEWPORT), Visibility::new(1.0, true));
        assert_eq!(region.visibility(1400.0, VIEWPORT), Visibility::new(0.0, true));
    }

    #[test]
    fn section_in_initial_viewport_reveals_on_first_flush() {
        let viewport = SimulatedViewport::new(VIEWPORT);
        let log = Rc::new(RefCell::new(Vec::new()));
        let controller = mount_section(&viewport, Region::new(0.0, 900.0), 0, &log);

        assert!(!controller.state().has_been_visible());
        viewport.flush();

        assert!(controller.state().has_been_visible());
        assert_eq!(viewport.active_watchers(), 0);
    }

    #[test]
    fn below_threshold_report_keeps_section_hidden() {
        let viewport = SimulatedViewport::new(VIEWPORT);
        let config = RevealConfig::default();
        let visual = Rc::new(RefCell::new(VisualState::hidden(&config)));
        let sink = visual.clone();
        let cfg = config.clone();
        let controller = RevealController::mount(&viewport, &Region::new(1000.0, 1000.0), &config, move |t| {
            *sink.borrow_mut() = VisualState::after(t, &cfg);
        });

        viewport.scroll_to(250.0);

        assert!(!controller.state().has_been_visible());
        assert_eq!(visual.borrow().opacity, 0.0);
        assert!(visual.borrow().offset_px > 0.0);

        viewport.scroll_to(400.0);
        assert!(visual.borrow().is_revealed());

        viewport.scroll_to(0.0);
        assert!(visual.borrow().is_revealed());
    }

    #[test]
    fn fallback_timer_leaves_reported_offscreen_section_to_the_observer() {
        let viewport = SimulatedViewport::new(VIEWPORT);
        let log = Rc::new(RefCell::new(Vec::new()));
        let controller = mount_section(&viewport, Region::new(5000.0, 500.0), 0, &log);

        viewport.flush();
        controller.fail_open();

        assert!(log.borrow().is_empty());
        assert_eq!(viewport.active_watchers(), 1);

        viewport.scroll_to(5000.0);
        assert_eq!(*log.borrow(), vec![(0, 5000.0)]);
        assert_eq!(viewport.active_watchers(), 0);
    }

    #[test]
    fn fallback_timer_reveals_when_observer_stays_silent() {
        let viewport = SimulatedViewport::new(VIEWPORT);
        let log = Rc::new(RefCell::new(Vec::new()));
        let controller = mount_section(&viewport, Region::new(5000.0, 500.0), 0, &log);

        controller.fail_open();

        assert!(controller.state().has_been_visible());
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(viewport.active_watchers(), 0);
    }

    #[test]
    fn unmount_before_any_report_releases_watcher() {
        let viewport = SimulatedViewport::new(VIEWPORT);
        let log = Rc::new(RefCell::new(Vec::new()));
        let controller = mount_section(&viewport, Region::new(2000.0, 500.0), 0, &log);
        assert_eq!(viewport.active_watchers(), 1);

        controller.unmount();
        assert_eq!(viewport.active_watchers(), 0);

        viewport.scroll_to(2000.0);
        assert!(log.borrow().is_empty());
        assert!(!controller.state().has_been_visible());
    }

    #[test]
    fn scrolling_the_page_reveals_each_section_once_top_to_bottom() {
        let viewport = SimulatedViewport::new(VIEWPORT);
        let log = Rc::new(RefCell::new(Vec::new()));
        let regions = [
            Region::new(0.0, 800.0),
            Region::new(800.0, 700.0),
            Region::new(1500.0, 900.0),
            Region::new(2400.0, 500.0),
        ];
        let page_height = 2900.0;

        let controllers: Vec<RevealController> = regions
            .iter()
            .enumerate()
            .map(|(index, region)| mount_section(&viewport, *region, index, &log))
            .collect();

        let mut scroll_y = 0.0;
        viewport.flush();
        while scroll_y < page_height - VIEWPORT {
            scroll_y = (scroll_y + 37.0).min(page_height - VIEWPORT);
            viewport.scroll_to(scroll_y);
        }
        // And back up again: nothing may re-trigger.
        viewport.scroll_to(0.0);

        let log = log.borrow();
        assert_eq!(log.len(), regions.len());

        let mut order: Vec<usize> = log.iter().map(|(index, _)| *index).collect();
        let reveal_order = order.clone();
        order.sort_unstable();
        order.dedup();
        assert_eq!(order, vec![0, 1, 2, 3]);

        for pair in log.windows(2) {
            let (upper, upper_at) = pair[0];
            let (lower, lower_at) = pair[1];
            assert!(regions[upper].top <= regions[lower].top, "{:?}", reveal_order);
            assert!(upper_at <= lower_at);
        }

        assert!(controllers.iter().all(|c| c.state().has_been_visible()));
        assert_eq!(viewport.active_watchers(), 0);
    }
}
