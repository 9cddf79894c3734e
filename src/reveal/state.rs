use crate::config::RevealConfig;

/// Whether a section has ever been seen. Only moves from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    has_been_visible: bool,
}

impl RevealState {
    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }
}

/// One report from the observation primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Visibility {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self { ratio, is_intersecting }
    }

    pub fn hidden() -> Self {
        Self::new(0.0, false)
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Reveal { animate: bool },
    Hide,
}

/// Turns visibility reports into reveal transitions for a single section.
#[derive(Debug)]
pub struct RevealTracker {
    state: RevealState,
    threshold: f64,
    trigger_once: bool,
    shown: bool,
    reported: bool,
    released: bool,
}

impl RevealTracker {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            state: RevealState::default(),
            threshold: config.threshold(),
            trigger_once: config.trigger_once,
            shown: false,
            reported: false,
            released: false,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Whether the observer has delivered at least one report.
    pub fn has_reported(&self) -> bool {
        self.reported
    }

    pub fn observe(&mut self, visibility: Visibility) -> Option<Transition> {
        if self.released {
            return None;
        }
        self.reported = true;

        let above = visibility.meets(self.threshold);
        if self.trigger_once && self.state.has_been_visible {
            return None;
        }

        match (above, self.shown) {
            (true, false) => {
                self.shown = true;
                self.state.has_been_visible = true;
                Some(Transition::Reveal { animate: true })
            }
            (false, true) => {
                self.shown = false;
                Some(Transition::Hide)
            }
            _ => None,
        }
    }

    /// Shows the section regardless of what was observed.
    pub fn force_reveal(&mut self, animate: bool) -> Option<Transition> {
        if self.released || self.shown {
            return None;
        }
        self.shown = true;
        self.state.has_been_visible = true;
        Some(Transition::Reveal { animate })
    }

    /// True once there is nothing left to observe for.
    pub fn should_disengage(&self) -> bool {
        self.released || (self.trigger_once && self.state.has_been_visible)
    }

    pub fn release(&mut self) {
        self.released = true;
    }
}
