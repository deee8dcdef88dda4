//! Card handler request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Create card request
///
/// The owner is never read from the body; it is always the caller.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Article timestamp: RFC 3339, a `YYYY-MM-DD` date (midnight UTC) or
    /// epoch milliseconds
    #[serde(default, deserialize_with = "published_at::deserialize")]
    pub published_at: Option<DateTime<Utc>>,
}

mod published_at {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Millis(millis)) => DateTime::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| D::Error::custom("publishedAt out of range")),
            Some(Raw::Text(text)) => parse(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom("publishedAt is not a date")),
        }
    }

    pub(super) fn parse(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
            return Some(timestamp.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }
}
