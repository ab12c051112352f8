use super::dom::{self, DomMenu};
use portfolio_interactions::a11y::{InputModality, KEYBOARD_NAVIGATION_CLASS};
use portfolio_interactions::analytics::Analytics;
use portfolio_interactions::config::SiteConfig;
use portfolio_interactions::logging::Logger;
use portfolio_interactions::state::UiState;
use std::cell::RefCell;

/// Everything the page's handlers share. Built once when the app mounts.
pub struct Site {
    pub config: SiteConfig,
    pub logger: Logger,
    pub analytics: Analytics,
    pub state: RefCell<UiState>,
}

impl Site {
    pub fn from_document() -> Self {
        let root = dom::root_element();
        let config = SiteConfig::from_attributes(|name| {
            root.as_ref().and_then(|element| element.get_attribute(name))
        });
        let logger = Logger::new(config.log_level);
        let state = RefCell::new(UiState::new(&config));

        Self {
            analytics: Analytics::new(logger),
            logger,
            state,
            config,
        }
    }

    pub fn toggle_menu(&self) {
        let open = {
            let mut state = self.state.borrow_mut();
            state.navigation.toggle(&mut DomMenu::locate());
            state.is_menu_open()
        };

        let action = if open { "menu_open" } else { "menu_close" };
        self.analytics.track_event("navigation", action, None);
    }

    pub fn close_menu(&self) {
        let closed = self
            .state
            .borrow_mut()
            .navigation
            .close(&mut DomMenu::locate());

        if closed {
            self.analytics.track_event("navigation", "menu_close", None);
        }
    }

    pub fn set_modality(&self, next: InputModality) {
        {
            let mut state = self.state.borrow_mut();
            if state.modality == next {
                return;
            }
            state.modality = next;
        }

        if let Some(body) = dom::body() {
            let _ = body
                .class_list()
                .toggle_with_force(KEYBOARD_NAVIGATION_CLASS, next.is_keyboard());
        }
    }
}
