//! Single-page portfolio rendered with Yew. Each block of the page fades and
//! slides into view the first time it is scrolled to.

pub mod config;
pub mod content;
pub mod error;
pub mod reveal {
    pub mod browser;
    pub mod state;
    pub mod visual;
    pub mod watch;
    #[cfg(test)]
    pub mod simulated;
}
pub mod components {
    pub mod icon;
    pub mod reveal_section;
}
pub mod pages {
    pub mod portfolio;
}
