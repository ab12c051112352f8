pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const ANIMATION_DURATION_VARIABLE: &str = "--animation-duration";
pub const REDUCED_ANIMATION_DURATION: &str = "0.01ms";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputModality {
    #[default]
    Pointer,
    Keyboard,
}

impl InputModality {
    pub fn on_key_down(self) -> Self {
        Self::Keyboard
    }

    pub fn on_pointer_down(self) -> Self {
        Self::Pointer
    }

    pub fn is_keyboard(self) -> bool {
        matches!(self, Self::Keyboard)
    }
}

pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_pointer_flip_modality() {
        let modality = InputModality::default();
        assert!(!modality.is_keyboard());

        let modality = modality.on_key_down();
        assert!(modality.is_keyboard());
        assert!(modality.on_key_down().is_keyboard());

        assert_eq!(modality.on_pointer_down(), InputModality::Pointer);
    }

    #[test]
    fn escape_accepts_legacy_key_name() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
    }
}
