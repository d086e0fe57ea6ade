use serde::{Deserialize, Serialize};

/// One tracked progress event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// ISO-8601 timestamp supplied by the owning log's time source.
    pub timestamp: String,
    /// Tier the event refers to.
    pub level: u8,
    /// What happened, e.g. "selected".
    pub action: String,
    /// Always true: an entry exists only because the event happened.
    pub verified: bool,
}

impl ProgressEntry {
    /// JSON form handed to external sinks.
    pub fn to_json(&self) -> String {
        // Serialization of this struct cannot fail: no maps, no non-string keys.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let entry = ProgressEntry {
            timestamp: "2026-08-29T12:00:00.000Z".into(),
            level: 4,
            action: "selected".into(),
            verified: true,
        };
        let json = entry.to_json();
        assert!(json.contains(r#""timestamp":"2026-08-29T12:00:00.000Z""#));
        assert!(json.contains(r#""level":4"#));
        assert!(json.contains(r#""action":"selected""#));
        assert!(json.contains(r#""verified":true"#));

        let back: ProgressEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
