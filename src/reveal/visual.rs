use crate::config::RevealConfig;
use crate::reveal::state::Transition;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

/// Resting appearance of a reveal container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub offset_px: f64,
    pub animated: bool,
}

impl VisualState {
    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            opacity: 0.0,
            offset_px: config.offset_px,
            animated: true,
        }
    }

    pub fn revealed(animated: bool) -> Self {
        Self {
            opacity: 1.0,
            offset_px: 0.0,
            animated,
        }
    }

    pub fn after(transition: Transition, config: &RevealConfig) -> Self {
        match transition {
            Transition::Reveal { animate } => Self::revealed(animate),
            Transition::Hide => Self::hidden(config),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.opacity >= 1.0 && self.offset_px == 0.0
    }

    pub fn css(&self, motion: &Motion) -> String {
        let mut style = format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.offset_px
        );
        if self.animated {
            let easing = motion.easing.css();
            style.push_str(&format!(
                " transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
                d = motion.duration_ms,
                e = easing,
                delay = motion.delay_ms,
            ));
        }
        style
    }
}
