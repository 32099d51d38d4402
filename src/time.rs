//! Event timestamps and the time formats accepted for them.

use crate::errors::FlareRankErr;
use chrono::{
    format::{DelayedFormat, StrftimeItems},
    NaiveDate, NaiveDateTime,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A timestamp read from an event export.
///
/// The text is kept exactly as it was read and written back out unchanged. The parsed time is
/// used for comparisons only.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTime {
    raw: String,
    time: NaiveDateTime,
}

impl EventTime {
    /// Parse a timestamp, keeping the original text.
    pub fn parse(text: &str) -> Result<Self, FlareRankErr> {
        Ok(EventTime {
            raw: text.to_owned(),
            time: parse_time(text)?,
        })
    }

    /// The parsed time, UTC.
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// The text as it was read.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Format the parsed time.
    pub fn format<'a>(&self, fmt: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.time.format(fmt)
    }
}

impl From<NaiveDateTime> for EventTime {
    fn from(time: NaiveDateTime) -> Self {
        EventTime {
            raw: time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            time,
        }
    }
}

impl PartialEq<NaiveDateTime> for EventTime {
    fn eq(&self, other: &NaiveDateTime) -> bool {
        self.time == *other
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let time = parse_time(&text).map_err(de::Error::custom)?;
        Ok(EventTime { raw: text, time })
    }
}

/// Parse a time from an export or the command line.
///
/// Dates alone (`2024/05/07` or `2024-05-07`) mean midnight at the start of that day. A
/// trailing `Z` is accepted; all times are UTC.
pub fn parse_time(text: &str) -> Result<NaiveDateTime, FlareRankErr> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    const DATE_TIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d"];

    DATE_TIME_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .chain(
            DATE_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .filter_map(|date| date.and_hms_opt(0, 0, 0)),
        )
        .next()
        .ok_or_else(|| FlareRankErr::InvalidTime(text.trim().to_owned()))
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
