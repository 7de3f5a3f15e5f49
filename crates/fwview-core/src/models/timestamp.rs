use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Modification time of a watched file, in UTC.
///
/// Listings carry either epoch milliseconds or an ISO-8601 string; both
/// decode to the same value. Serializes back as epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawTimestamp", into = "i64")]
pub struct Timestamp(DateTime<Utc>);

/// Wire form of a timestamp before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Build from milliseconds since the Unix epoch.
    pub fn from_millis(ms: i64) -> Result<Self, PayloadError> {
        DateTime::from_timestamp_millis(ms)
            .map(Self)
            .ok_or_else(|| PayloadError::InvalidTimestamp(ms.to_string()))
    }

    /// Build from whole seconds since the Unix epoch.
    pub fn from_secs(secs: i64) -> Result<Self, PayloadError> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or_else(|| PayloadError::InvalidTimestamp(secs.to_string()))
    }

    /// Parse an ISO-8601 string.
    ///
    /// Accepted forms are the extended calendar ones:
    ///
    /// - `2024-01-01T12:30:45.5+02:00` / `...Z` (RFC 3339)
    /// - `2024-01-01T12:30+02:00` / `2024-01-01T12:30Z`
    /// - `2024-01-01T12:30:45` and `2024-01-01T12:30` (read as UTC)
    /// - `2024-01-01` (midnight UTC)
    ///
    /// Week dates, ordinal dates and the basic (separator-free) format are
    /// rejected.
    pub fn parse_iso(text: &str) -> Result<Self, PayloadError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z") {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        let local = text.strip_suffix('Z').unwrap_or(text);
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(local, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(local, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| PayloadError::InvalidTimestamp(text.to_string()))
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl TryFrom<RawTimestamp> for Timestamp {
    type Error = PayloadError;

    fn try_from(raw: RawTimestamp) -> Result<Self, Self::Error> {
        match raw {
            RawTimestamp::Millis(ms) => Self::from_millis(ms),
            RawTimestamp::Text(text) => Self::parse_iso(&text),
        }
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.as_millis()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_and_iso_agree() {
        let from_ms: Timestamp = serde_json::from_str("1704067200000").unwrap();
        let from_iso: Timestamp = serde_json::from_str("\"2024-01-01T00:00:00Z\"").unwrap();
        assert_eq!(from_ms, from_iso);
    }

    #[test]
    fn test_iso_without_offset_is_utc() {
        let ts = Timestamp::parse_iso("2024-01-01T00:00:00").unwrap();
        assert_eq!(ts.as_millis(), 1_704_067_200_000);
    }

    #[test]
    fn test_iso_with_offset() {
        let ts = Timestamp::parse_iso("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(ts.as_millis(), 1_704_067_200_000);
    }

    #[test]
    fn test_iso_reduced_precision() {
        let midnight = 1_704_067_200_000;
        for text in [
            "2024-01-01",
            "2024-01-01T00:00",
            "2024-01-01T00:00Z",
            "2024-01-01T02:00+02:00",
            "2024-01-01T00:00:00Z",
        ] {
            assert_eq!(Timestamp::parse_iso(text).unwrap().as_millis(), midnight, "{text}");
        }
    }

    #[test]
    fn test_iso_unsupported_forms() {
        for text in ["2024-W01-1", "2024-001", "20240101T000000Z", "2024-13-01"] {
            assert!(Timestamp::parse_iso(text).is_err(), "{text}");
        }
    }

    #[test]
    fn test_serializes_as_millis() {
        let ts = Timestamp::from_secs(1).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1000");
    }

    #[test]
    fn test_rejects_garbage() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"yesterday\"");
        assert!(result.is_err());
        assert!(Timestamp::parse_iso("yesterday").is_err());
    }
}
