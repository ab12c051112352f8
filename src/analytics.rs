use crate::logging::{LogLevel, Logger};
use serde::Serialize;
use serde_json::json;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent<'a> {
    pub category: &'a str,
    pub action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

/// Log-only analytics. Nothing leaves the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Analytics {
    logger: Logger,
}

impl Analytics {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn page_view(&self, path: &str) {
        self.logger
            .event(LogLevel::Info, "page_view", json!({ "path": path }));
    }

    pub fn track_event(&self, category: &str, action: &str, label: Option<&str>) {
        let event = AnalyticsEvent {
            category,
            action,
            label,
        };
        self.logger.event(
            LogLevel::Info,
            "analytics_event",
            serde_json::to_value(&event).unwrap_or_else(|_| json!({})),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_without_missing_label() {
        let event = AnalyticsEvent {
            category: "theme",
            action: "toggle",
            label: None,
        };

        assert_eq!(
            serde_json::to_value(&event).expect("event serializes"),
            json!({ "category": "theme", "action": "toggle" })
        );
    }

    #[test]
    fn event_fields_merge_into_log_payload() {
        let logger = Logger::new(LogLevel::Info);
        let event = AnalyticsEvent {
            category: "contact",
            action: "submit",
            label: Some("sent"),
        };
        let fields = serde_json::to_value(&event).expect("event serializes");

        let payload = logger
            .payload(LogLevel::Info, "analytics_event", fields, 0)
            .expect("info is enabled");

        assert_eq!(payload["category"], json!("contact"));
        assert_eq!(payload["label"], json!("sent"));
    }
}
