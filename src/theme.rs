use std::cell::RefCell;
use std::rc::Rc;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme that follows whatever class the root currently carries. Only an
    /// exact `light` flips to dark; anything else lands on light.
    pub fn after(current_class: &str) -> Self {
        if current_class == Self::Light.as_str() {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Button label for a toggle that will land on `self`.
    pub fn switch_label(self) -> String {
        format!("Switch to {} theme", self.as_str())
    }

    /// Glyph hinting at the theme a toggle will land on.
    pub fn switch_icon(self) -> &'static str {
        match self {
            Self::Dark => "fa-moon",
            Self::Light => "fa-sun",
        }
    }
}

pub fn is_dark_class(class_name: &str) -> bool {
    class_name == Theme::Dark.as_str()
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub trait ThemeRoot {
    fn class_name(&self) -> String;
    fn set_class_name(&mut self, value: &str);
}

/// Root class that has been written but is not visible yet, e.g. while a
/// view transition is still running. Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct StagedClass(Rc<RefCell<Option<String>>>);

impl StagedClass {
    pub fn stage(&self, value: &str) {
        self.0.borrow_mut().replace(value.to_string());
    }

    /// The staged class if there is one, otherwise what the root shows.
    pub fn current_or(&self, applied: String) -> String {
        self.0.borrow().clone().unwrap_or(applied)
    }

    /// Marks `value` as visible. A later staging is left in place.
    pub fn settle(&self, value: &str) {
        let mut slot = self.0.borrow_mut();
        if slot.as_deref() == Some(value) {
            slot.take();
        }
    }

    pub fn is_staged(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Reads the stored preference, or `light`, and applies it verbatim.
/// Returns the value that was applied.
pub fn apply_stored_theme(store: &impl PreferenceStore, root: &mut impl ThemeRoot) -> String {
    let stored = store
        .get(THEME_KEY)
        .unwrap_or_else(|| Theme::Light.as_str().to_string());
    root.set_class_name(&stored);
    stored
}

pub fn toggle_theme(store: &mut impl PreferenceStore, root: &mut impl ThemeRoot) -> Theme {
    let next = Theme::after(&root.class_name());
    store.set(THEME_KEY, next.as_str());
    root.set_class_name(next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct Root(String);

    impl ThemeRoot for Root {
        fn class_name(&self) -> String {
            self.0.clone()
        }

        fn set_class_name(&mut self, value: &str) {
            self.0 = value.to_string();
        }
    }

    #[test]
    fn startup_defaults_to_light() {
        let store = MemoryStore::default();
        let mut root = Root::default();

        assert_eq!(apply_stored_theme(&store, &mut root), "light");
        assert_eq!(root.0, "light");
    }

    #[test]
    fn startup_applies_stored_dark() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "dark");
        let mut root = Root::default();

        apply_stored_theme(&store, &mut root);
        assert_eq!(root.0, "dark");
    }

    #[test]
    fn toggle_round_trips_and_persists() {
        let mut store = MemoryStore::default();
        let mut root = Root::default();
        apply_stored_theme(&store, &mut root);

        assert_eq!(toggle_theme(&mut store, &mut root), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(root.0, "dark");

        assert_eq!(toggle_theme(&mut store, &mut root), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(root.0, "light");
    }

    #[test]
    fn unknown_stored_value_is_applied_then_coerced_to_light() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "sepia");
        let mut root = Root::default();

        assert_eq!(apply_stored_theme(&store, &mut root), "sepia");
        assert_eq!(toggle_theme(&mut store, &mut root), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    /// Applies writes only when flushed, like a root that swaps its class
    /// inside a view transition callback.
    #[derive(Default)]
    struct DeferredRoot {
        shown: String,
        staged: StagedClass,
        queue: Vec<String>,
    }

    impl DeferredRoot {
        fn flush(&mut self) {
            for value in self.queue.drain(..) {
                self.shown = value.clone();
                self.staged.settle(&value);
            }
        }
    }

    impl ThemeRoot for DeferredRoot {
        fn class_name(&self) -> String {
            self.staged.current_or(self.shown.clone())
        }

        fn set_class_name(&mut self, value: &str) {
            self.staged.stage(value);
            self.queue.push(value.to_string());
        }
    }

    #[test]
    fn toggles_before_a_deferred_apply_still_alternate() {
        let mut store = MemoryStore::default();
        let mut root = DeferredRoot {
            shown: "light".to_string(),
            ..DeferredRoot::default()
        };

        assert_eq!(toggle_theme(&mut store, &mut root), Theme::Dark);
        assert_eq!(toggle_theme(&mut store, &mut root), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(root.shown, "light", "nothing applied yet");

        root.flush();
        assert_eq!(root.shown, "light");
        assert!(!root.staged.is_staged());
    }

    #[test]
    fn earlier_settle_keeps_the_latest_staging() {
        let staged = StagedClass::default();
        staged.stage("dark");
        staged.stage("light");

        staged.settle("dark");
        assert_eq!(staged.current_or("dark".to_string()), "light");

        staged.settle("light");
        assert_eq!(staged.current_or("light".to_string()), "light");
        assert!(!staged.is_staged());
    }

    #[test]
    fn button_describes_the_theme_the_next_toggle_lands_on() {
        assert_eq!(Theme::after("light").switch_label(), "Switch to dark theme");
        assert_eq!(Theme::after("dark").switch_label(), "Switch to light theme");
        assert_eq!(Theme::after("sepia").switch_label(), "Switch to light theme");
        assert_eq!(Theme::after("sepia").switch_icon(), "fa-sun");
        assert!(is_dark_class("dark"));
        assert!(!is_dark_class("sepia"));
    }
}
