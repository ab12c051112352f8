use crate::a11y::InputModality;
use crate::animation::RevealTracker;
use crate::config::SiteConfig;
use crate::navigation::{navbar_is_scrolled, NavigationController};
use crate::timing::{Debounce, Throttle};

/// Page-lifetime UI state, built once at mount and shared with every
/// handler. Reveal keys are indices into the fade-in snapshot taken at
/// mount.
#[derive(Debug)]
pub struct UiState {
    pub navigation: NavigationController,
    pub is_scrolled: bool,
    pub reveals: RevealTracker<usize>,
    pub modality: InputModality,
    pub reveal_throttle: Throttle,
    pub progress_throttle: Throttle,
    pub resize_debounce: Debounce,
    navbar_scrolled_px: u64,
}

impl UiState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            navigation: NavigationController::new(),
            is_scrolled: false,
            reveals: RevealTracker::new(config.reveal_threshold_ratio()),
            modality: InputModality::default(),
            reveal_throttle: Throttle::new(config.scroll_throttle_ms),
            progress_throttle: Throttle::new(config.scroll_throttle_ms),
            resize_debounce: Debounce::new(config.resize_debounce_ms),
            navbar_scrolled_px: config.navbar_scrolled_px,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigation.is_open()
    }

    /// Records the scroll position and returns the new flag when it changed.
    pub fn update_scrolled(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = navbar_is_scrolled(scroll_y, self.navbar_scrolled_px);
        if scrolled == self.is_scrolled {
            return None;
        }

        self.is_scrolled = scrolled;
        Some(scrolled)
    }
}
