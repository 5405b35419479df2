//! Compliment record - the one entity this service stores
//!
//! Rows are created by the submit endpoint and never updated or deleted.
//! The timestamp is assigned server-side at insert time.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A stored compliment: who sent it, the message, and when it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliment {
    /// Row id assigned by the store; monotonically increasing, never reused
    pub id: i64,
    /// Who sent the compliment
    pub name: String,
    /// The message itself
    pub compliment: String,
    /// UTC insertion time, RFC 3339 with microseconds (e.g.
    /// `2026-08-22T12:34:56.789012Z`)
    pub timestamp: String,
}

/// Current UTC time in the fixed-width format stored in the `timestamp`
/// column. String order equals chronological order.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_fixed_width_utc() {
        let ts = current_timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2026-08-22T12:34:56.789012Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_timestamps_sort_chronologically() {
        let earlier = current_timestamp();
        let later = current_timestamp();
        assert!(earlier <= later);
    }
}
