pub const MENU_OPEN_CLASS: &str = "active";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
const SCROLL_LOCK_OVERFLOW: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Close,
}

impl MenuIcon {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Close => "fa-times",
        }
    }

    pub fn for_open(open: bool) -> Self {
        if open {
            Self::Close
        } else {
            Self::Bars
        }
    }
}

/// The DOM pieces the mobile menu drives.
pub trait MenuSurface {
    fn set_panel_open(&mut self, open: bool);
    fn set_icon(&mut self, icon: MenuIcon);
    fn body_overflow(&self) -> String;
    fn set_body_overflow(&mut self, value: &str);
}

/// Mobile menu state. The body overflow seen when the menu opens is restored
/// verbatim when it closes.
#[derive(Clone, Debug, Default)]
pub struct NavigationController {
    open: bool,
    saved_overflow: Option<String>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, surface: &mut impl MenuSurface) {
        if self.open {
            self.close(surface);
        } else {
            self.open(surface);
        }
    }

    /// Returns `false` and leaves the surface untouched if already open.
    pub fn open(&mut self, surface: &mut impl MenuSurface) -> bool {
        if self.open {
            return false;
        }

        self.open = true;
        self.saved_overflow = Some(surface.body_overflow());
        surface.set_panel_open(true);
        surface.set_icon(MenuIcon::Close);
        surface.set_body_overflow(SCROLL_LOCK_OVERFLOW);
        true
    }

    /// Returns `false` and leaves the surface untouched if already closed.
    pub fn close(&mut self, surface: &mut impl MenuSurface) -> bool {
        if !self.open {
            return false;
        }

        self.open = false;
        let restored = self.saved_overflow.take().unwrap_or_default();
        surface.set_panel_open(false);
        surface.set_icon(MenuIcon::Bars);
        surface.set_body_overflow(&restored);
        true
    }
}

/// Selector for an in-page link, or `None` when the href is not a usable
/// fragment (`#` alone included).
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

pub fn navbar_is_scrolled(scroll_y: f64, threshold_px: u64) -> bool {
    scroll_y > threshold_px as f64
}
