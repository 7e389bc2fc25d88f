//! UTC instants for session bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When something happened. Serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn orders_chronologically() {
        let before = Timestamp::from(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
        let after = Timestamp::now();
        assert!(before < after);
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let ts = Timestamp::from(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap());
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"2026-03-01T09:30:00Z\""
        );
        assert_eq!(ts.as_datetime().to_rfc3339(), "2026-03-01T09:30:00+00:00");
    }
}
