/// Bounding box in viewport coordinates, as returned by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// True when the whole box sits inside a `width` x `height` viewport.
pub fn is_in_viewport(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}

/// Document-space scroll position that puts `element_top` (viewport
/// coordinates) `offset` pixels below the top edge.
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (element_top + scroll_y - offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_box_is_in_viewport() {
        let rect = Rect { top: 10.0, left: 0.0, bottom: 200.0, right: 300.0 };
        assert!(is_in_viewport(rect, 1280.0, 720.0));
    }

    #[test]
    fn partially_clipped_box_is_not_in_viewport() {
        let below = Rect { top: 700.0, left: 0.0, bottom: 760.0, right: 300.0 };
        let above = Rect { top: -5.0, left: 0.0, bottom: 40.0, right: 300.0 };

        assert!(!is_in_viewport(below, 1280.0, 720.0));
        assert!(!is_in_viewport(above, 1280.0, 720.0));
    }

    #[test]
    fn scroll_target_applies_offset_and_never_goes_negative() {
        assert_eq!(scroll_target(500.0, 1_000.0, 80.0), 1_420.0);
        assert_eq!(scroll_target(20.0, 0.0, 80.0), 0.0);
    }
}
