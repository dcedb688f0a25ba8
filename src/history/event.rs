//! Session event records.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event tag written when a session ends.
pub const SESSION_END: &str = "session_end";

/// A single timestamped entry in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Event tag, e.g. `session_end`.
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO-8601 UTC timestamp.
    pub timestamp: String,
    /// Keys written by other tools, preserved across rewrites.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionEvent {
    /// Create an event stamped with the current UTC time.
    pub fn now(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_is_utc_iso8601() {
        let event = SessionEvent::now(SESSION_END);
        assert_eq!(event.kind, "session_end");
        assert!(event.timestamp.ends_with("+00:00"));

        let parsed = DateTime::parse_from_rfc3339(&event.timestamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_serializes_type_field() {
        let event = SessionEvent {
            kind: SESSION_END.to_string(),
            timestamp: "2026-10-19T08:15:02.123456+00:00".to_string(),
            extra: Map::new(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "session_end");
        assert_eq!(json["timestamp"], "2026-10-19T08:15:02.123456+00:00");
        assert!(json.get("kind").is_none());
    }
}
