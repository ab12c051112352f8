use std::collections::HashSet;
use std::hash::Hash;

pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const PROGRESS_BAR_SELECTOR: &str = ".scroll-progress";
pub const REVEALED_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// One-way scroll reveal bookkeeping. Keys only ever enter the set.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    threshold_ratio: f64,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(threshold_ratio: f64) -> Self {
        Self {
            threshold_ratio,
            revealed: HashSet::new(),
        }
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Takes `(key, top)` pairs, where `top` is the element's bounding-box
    /// top in viewport pixels, and returns the keys revealed by this tick.
    pub fn scan(&mut self, items: impl IntoIterator<Item = (K, f64)>, viewport_height: f64) -> Vec<K> {
        let cutoff = viewport_height * self.threshold_ratio;
        let mut newly_revealed = Vec::new();

        for (key, top) in items {
            if top < cutoff && !self.revealed.contains(&key) {
                self.revealed.insert(key.clone());
                newly_revealed.push(key);
            }
        }

        newly_revealed
    }
}

/// Scroll progress in percent. A document no taller than the viewport has
/// nothing to scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_above_threshold_reveals_exactly_once() {
        let mut tracker = RevealTracker::new(0.8);

        assert_eq!(tracker.scan([(1, 200.0)], 1_000.0), vec![1]);
        assert!(tracker.scan([(1, 200.0)], 1_000.0).is_empty());
        assert!(tracker.scan([(1, 150.0)], 1_000.0).is_empty());
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn element_below_threshold_waits_for_scroll() {
        let mut tracker = RevealTracker::new(0.8);

        assert!(tracker.scan([("about", 900.0)], 1_000.0).is_empty());
        assert!(!tracker.is_revealed(&"about"));
        assert_eq!(tracker.scan([("about", 799.0)], 1_000.0), vec!["about"]);
    }

    #[test]
    fn scrolling_back_never_hides_a_revealed_element() {
        let mut tracker = RevealTracker::new(0.8);

        tracker.scan([(7, 10.0)], 1_000.0);
        tracker.scan([(7, 5_000.0)], 1_000.0);

        assert!(tracker.is_revealed(&7));
    }

    #[test]
    fn progress_is_a_percentage_of_scrollable_range() {
        assert_eq!(scroll_progress(0.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(1_000.0, 3_000.0, 1_000.0), 50.0);
        assert_eq!(scroll_progress(2_000.0, 3_000.0, 1_000.0), 100.0);
    }

    #[test]
    fn progress_guards_short_documents() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_clamps_overscroll() {
        assert_eq!(scroll_progress(2_100.0, 3_000.0, 1_000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn progress_width_is_css_percentage() {
        assert_eq!(progress_width(50.0), "50%");
        assert_eq!(progress_width(12.5), "12.5%");
    }
}
