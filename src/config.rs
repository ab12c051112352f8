use crate::logging::LogLevel;

pub const DEFAULT_SCROLL_THROTTLE_MS: u64 = 10;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_REVEAL_THRESHOLD_PERCENT: u64 = 80;
pub const DEFAULT_ANCHOR_OFFSET_PX: u64 = 80;
pub const DEFAULT_NAVBAR_SCROLLED_PX: u64 = 100;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;
pub const DEFAULT_MESSAGE_DISMISS_MS: u64 = 5_000;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_PRELOAD_RESOURCES: &[&str] = &["/styles.css", "/images/profile.jpg"];

const SCROLL_THROTTLE_MS_BOUNDS: (u64, u64) = (0, 1_000);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u64, u64) = (0, 5_000);
const REVEAL_THRESHOLD_PERCENT_BOUNDS: (u64, u64) = (1, 100);
const ANCHOR_OFFSET_PX_BOUNDS: (u64, u64) = (0, 1_000);
const NAVBAR_SCROLLED_PX_BOUNDS: (u64, u64) = (0, 10_000);
const SUBMIT_DELAY_MS_BOUNDS: (u64, u64) = (0, 60_000);
const MESSAGE_DISMISS_MS_BOUNDS: (u64, u64) = (500, 120_000);

/// Tunables for every controller. Overrides are read from `data-*`
/// attributes on the root element; bad values keep the default.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    pub reveal_threshold_percent: u64,
    pub anchor_offset_px: u64,
    pub navbar_scrolled_px: u64,
    pub submit_delay_ms: u64,
    pub message_dismiss_ms: u64,
    pub log_level: LogLevel,
    pub preload_resources: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            reveal_threshold_percent: DEFAULT_REVEAL_THRESHOLD_PERCENT,
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET_PX,
            navbar_scrolled_px: DEFAULT_NAVBAR_SCROLLED_PX,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            message_dismiss_ms: DEFAULT_MESSAGE_DISMISS_MS,
            log_level: DEFAULT_LOG_LEVEL,
            preload_resources: DEFAULT_PRELOAD_RESOURCES
                .iter()
                .map(|value| value.to_string())
                .collect(),
        }
    }
}

impl SiteConfig {
    /// `lookup` receives attribute names such as `data-anchor-offset`.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let scroll_throttle_ms = parse_u64_with_bounds(
            lookup("data-scroll-throttle-ms"),
            DEFAULT_SCROLL_THROTTLE_MS,
            SCROLL_THROTTLE_MS_BOUNDS,
        );
        let resize_debounce_ms = parse_u64_with_bounds(
            lookup("data-resize-debounce-ms"),
            DEFAULT_RESIZE_DEBOUNCE_MS,
            RESIZE_DEBOUNCE_MS_BOUNDS,
        );
        let reveal_threshold_percent = parse_u64_with_bounds(
            lookup("data-reveal-threshold-percent"),
            DEFAULT_REVEAL_THRESHOLD_PERCENT,
            REVEAL_THRESHOLD_PERCENT_BOUNDS,
        );
        let anchor_offset_px = parse_u64_with_bounds(
            lookup("data-anchor-offset"),
            DEFAULT_ANCHOR_OFFSET_PX,
            ANCHOR_OFFSET_PX_BOUNDS,
        );
        let navbar_scrolled_px = parse_u64_with_bounds(
            lookup("data-navbar-scrolled-px"),
            DEFAULT_NAVBAR_SCROLLED_PX,
            NAVBAR_SCROLLED_PX_BOUNDS,
        );
        let submit_delay_ms = parse_u64_with_bounds(
            lookup("data-submit-delay-ms"),
            DEFAULT_SUBMIT_DELAY_MS,
            SUBMIT_DELAY_MS_BOUNDS,
        );
        let message_dismiss_ms = parse_u64_with_bounds(
            lookup("data-message-dismiss-ms"),
            DEFAULT_MESSAGE_DISMISS_MS,
            MESSAGE_DISMISS_MS_BOUNDS,
        );
        let log_level = parse_non_empty_string(lookup("data-log-level"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let preload_resources = parse_non_empty_string(lookup("data-preload"))
            .map(|value| parse_resource_list(&value))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| Self::default().preload_resources);

        Self {
            scroll_throttle_ms,
            resize_debounce_ms,
            reveal_threshold_percent,
            anchor_offset_px,
            navbar_scrolled_px,
            submit_delay_ms,
            message_dismiss_ms,
            log_level,
            preload_resources,
        }
    }

    pub fn reveal_threshold_ratio(&self) -> f64 {
        self.reveal_threshold_percent as f64 / 100.0
    }
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_resource_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .collect()
}
