//! Flare event records as returned by the Heliophysics Event Knowledgebase.

use crate::time::EventTime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One detected solar flare.
///
/// Field names on the wire are the HEK column names. Columns this crate does not use are kept
/// in `extra` and written back out unchanged, as are the timestamps. A missing or `null` class
/// reads as an empty string so the ranking policy decides what to do with the record.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlareEvent {
    #[serde(rename = "event_starttime")]
    pub start_time: EventTime,
    #[serde(rename = "event_peaktime")]
    pub peak_time: EventTime,
    #[serde(rename = "event_endtime")]
    pub end_time: EventTime,
    #[serde(rename = "fl_goescls", default, deserialize_with = "null_as_empty")]
    pub goes_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_radius: Option<f64>,
    #[serde(
        rename = "ar_noaanum",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ar_noaa_num: Option<u32>,
    #[serde(
        rename = "obs_observatory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub observatory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything that carries a GOES class string and so can be ranked.
pub trait GoesClassified {
    /// The raw classification, e.g. `"M3.2"`.
    fn goes_class(&self) -> &str;
}

impl GoesClassified for FlareEvent {
    fn goes_class(&self) -> &str {
        &self.goes_class
    }
}

impl GoesClassified for String {
    fn goes_class(&self) -> &str {
        self
    }
}

impl GoesClassified for &str {
    fn goes_class(&self) -> &str {
        self
    }
}

impl FlareEvent {
    /// Create an event with only the fields the ranker and query care about.
    pub fn new(
        start_time: NaiveDateTime,
        peak_time: NaiveDateTime,
        end_time: NaiveDateTime,
        goes_class: &str,
    ) -> Self {
        FlareEvent {
            start_time: start_time.into(),
            peak_time: peak_time.into(),
            end_time: end_time.into(),
            goes_class: goes_class.to_owned(),
            hpc_radius: None,
            ar_noaa_num: None,
            observatory: None,
            event_type: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the observatory.
    pub fn with_observatory(self, observatory: &str) -> Self {
        FlareEvent {
            observatory: Some(observatory.to_owned()),
            ..self
        }
    }

    /// Set the NOAA active region number.
    pub fn with_active_region(self, ar_noaa_num: u32) -> Self {
        FlareEvent {
            ar_noaa_num: Some(ar_noaa_num),
            ..self
        }
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use chrono::NaiveDate;

    const HEK_EVENT: &str = r#"{
        "event_starttime": "2024-05-08T01:41:00",
        "event_peaktime": "2024-05-08T02:27:00",
        "event_endtime": "2024-05-08T02:56:00",
        "fl_goescls": "X1.0",
        "hpc_radius": 712.4,
        "ar_noaanum": 13664,
        "obs_observatory": "GOES",
        "event_type": "FL",
        "frm_name": "SWPC",
        "hpc_bbox": "POLYGON((0 0,1 0,1 1,0 1,0 0))"
    }"#;

    #[test]
    fn test_deserialize_hek_columns() {
        let event: FlareEvent = serde_json::from_str(HEK_EVENT).expect("valid event");

        let day = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
        assert_eq!(event.start_time, day.and_hms_opt(1, 41, 0).unwrap());
        assert_eq!(event.peak_time, day.and_hms_opt(2, 27, 0).unwrap());
        assert_eq!(event.end_time, day.and_hms_opt(2, 56, 0).unwrap());
        assert_eq!(event.goes_class(), "X1.0");
        assert_eq!(event.hpc_radius, Some(712.4));
        assert_eq!(event.ar_noaa_num, Some(13664));
        assert_eq!(event.observatory.as_deref(), Some("GOES"));
        assert_eq!(event.event_type.as_deref(), Some("FL"));
        assert_eq!(event.extra.len(), 2);
        assert_eq!(event.extra["frm_name"], serde_json::json!("SWPC"));
    }

    #[test]
    fn test_passthrough_fields_survive_serialization() {
        let event: FlareEvent = serde_json::from_str(HEK_EVENT).expect("valid event");
        let value = serde_json::to_value(&event).expect("serializable");

        assert_eq!(value["fl_goescls"], serde_json::json!("X1.0"));
        assert_eq!(value["frm_name"], serde_json::json!("SWPC"));
        assert_eq!(value["event_starttime"], serde_json::json!("2024-05-08T01:41:00"));
    }

    #[test]
    fn test_optional_columns_may_be_missing() {
        let event: FlareEvent = serde_json::from_str(
            r#"{
                "event_starttime": "2024-05-09T08:45:00",
                "event_peaktime": "2024-05-09T09:13:00",
                "event_endtime": "2024-05-09T09:36:00",
                "fl_goescls": "X2.2"
            }"#,
        )
        .expect("valid event");

        assert_eq!(event.hpc_radius, None);
        assert_eq!(event.ar_noaa_num, None);
        assert!(event.extra.is_empty());
    }

    #[test]
    fn test_null_or_missing_class_reads_empty() {
        let null_class: FlareEvent = serde_json::from_str(
            r#"{
                "event_starttime": "2024-05-09T08:45:00",
                "event_peaktime": "2024-05-09T09:13:00",
                "event_endtime": "2024-05-09T09:36:00",
                "fl_goescls": null
            }"#,
        )
        .expect("null class is kept");
        assert_eq!(null_class.goes_class(), "");

        let no_class: FlareEvent = serde_json::from_str(
            r#"{
                "event_starttime": "2024-05-09T08:45:00",
                "event_peaktime": "2024-05-09T09:13:00",
                "event_endtime": "2024-05-09T09:36:00"
            }"#,
        )
        .expect("missing class is kept");
        assert_eq!(no_class.goes_class(), "");
        assert!(no_class.extra.is_empty());
    }

    #[test]
    fn test_timestamps_pass_through() {
        let event: FlareEvent = serde_json::from_str(
            r#"{
                "event_starttime": "2024-05-10 06:27:00",
                "event_peaktime": "2024-05-10T06:54:00Z",
                "event_endtime": "2024-05-10T07:06:00.000",
                "fl_goescls": "X3.9"
            }"#,
        )
        .expect("sunpy and iso forms");

        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert_eq!(event.start_time, day.and_hms_opt(6, 27, 0).unwrap());
        assert_eq!(event.peak_time, day.and_hms_opt(6, 54, 0).unwrap());
        assert_eq!(event.end_time, day.and_hms_opt(7, 6, 0).unwrap());

        let value = serde_json::to_value(&event).expect("serializable");
        assert_eq!(value["event_starttime"], serde_json::json!("2024-05-10 06:27:00"));
        assert_eq!(value["event_peaktime"], serde_json::json!("2024-05-10T06:54:00Z"));
        assert_eq!(value["event_endtime"], serde_json::json!("2024-05-10T07:06:00.000"));
    }
}
