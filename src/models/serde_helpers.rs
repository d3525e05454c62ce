//! Custom serde deserializers for record fields.
//!
//! This module provides specialized deserializers that transform data during
//! JSON parsing into the crate's record types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserializes a `YYYY-MM-DD` date string into a [`NaiveDate`].
///
/// Record files store publication dates as plain calendar-date strings
/// (e.g. "2024-01-15"); this parses them during deserialization so the rest
/// of the crate works with typed dates.
///
/// # Examples
/// ```text
/// Input:  "2024-01-15"
/// Output: NaiveDate 2024-01-15
/// ```
pub fn parse_published_date<'a, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'a>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Dated {
        #[serde(deserialize_with = "super::parse_published_date")]
        published: NaiveDate,
    }

    #[test]
    fn parses_calendar_dates() {
        let dated: Dated = serde_json::from_str(r#"{"published": "2024-03-05"}"#).unwrap();
        assert_eq!(dated.published, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(serde_json::from_str::<Dated>(r#"{"published": "03/05/2024"}"#).is_err());
    }
}
