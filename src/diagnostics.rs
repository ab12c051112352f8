use crate::logging::{LogLevel, Logger};
use serde::Serialize;

/// An uncaught script error as reported by the window `error` event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScriptErrorReport {
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    pub line: u32,
    pub column: u32,
}

pub fn report_script_error(logger: &Logger, report: &ScriptErrorReport) {
    logger.event(
        LogLevel::Error,
        "uncaught_error",
        serde_json::to_value(report).unwrap_or_default(),
    );
}

pub fn report_unhandled_rejection(logger: &Logger, reason: &str) {
    logger.event(
        LogLevel::Error,
        "unhandled_rejection",
        serde_json::json!({ "reason": reason }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_omits_unknown_source() {
        let report = ScriptErrorReport {
            message: "x is undefined".to_string(),
            source: String::new(),
            line: 3,
            column: 9,
        };

        assert_eq!(
            serde_json::to_value(&report).expect("report serializes"),
            json!({ "message": "x is undefined", "line": 3, "column": 9 })
        );
    }
}
