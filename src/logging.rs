use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Emits one JSON object per event, dropping anything below `min_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(payload) = self.payload(level, event, fields, now_unix_millis()) {
            emit(level, &payload);
        }
    }

    pub fn payload(&self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<Value> {
        if !self.enabled(level) {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, payload: &Value) {
    let line = wasm_bindgen::JsValue::from_str(&payload.to_string());
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, payload: &Value) {
    if level >= LogLevel::Warn {
        eprintln!("{payload}");
    } else {
        println!("{payload}");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_merges_fields_after_envelope() {
        let logger = Logger::new(LogLevel::Info);
        let payload = logger
            .payload(LogLevel::Info, "page_view", json!({ "path": "/" }), 42)
            .expect("info passes an info threshold");

        assert_eq!(payload["ts"], json!(42));
        assert_eq!(payload["level"], json!("info"));
        assert_eq!(payload["event"], json!("page_view"));
        assert_eq!(payload["path"], json!("/"));
    }

    #[test]
    fn events_below_threshold_are_dropped() {
        let logger = Logger::new(LogLevel::Warn);

        assert!(logger.payload(LogLevel::Info, "noise", json!({}), 1).is_none());
        assert!(logger.payload(LogLevel::Error, "boom", json!({}), 1).is_some());
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = Logger::new(LogLevel::Debug)
            .payload(LogLevel::Debug, "tick", json!("stray"), 7)
            .expect("debug passes a debug threshold");

        assert_eq!(payload.as_object().map(|map| map.len()), Some(3));
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }
}
