//! Load flare events exported from the HEK.

use crate::{errors::FlareRankErr, event::FlareEvent};
use log::debug;
use serde_json::Value;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Read events from JSON, either a list of events or a HEK response with a `result` list.
///
/// Events are read one at a time so an error names the event that caused it.
pub fn load_events<R: Read>(reader: R) -> Result<Vec<FlareEvent>, FlareRankErr> {
    // The HEK API wraps events in a response object, but saved tables are often bare arrays.
    let records = match serde_json::from_reader(reader)? {
        Value::Array(records) => records,
        Value::Object(mut response) => match response.remove("result") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(FlareRankErr::UnrecognizedExport(
                    "response has no \"result\" list",
                ))
            }
        },
        _ => {
            return Err(FlareRankErr::UnrecognizedExport(
                "expected a list of events or a HEK response",
            ))
        }
    };

    let events = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|err| FlareRankErr::InvalidEvent { index, err })
        })
        .collect::<Result<Vec<FlareEvent>, _>>()?;

    debug!("loaded {} events", events.len());

    Ok(events)
}

/// Read events from a file, or from standard input if the path is `-`.
pub fn load_events_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FlareEvent>, FlareRankErr> {
    let path = path.as_ref();

    if path == Path::new("-") {
        debug!("reading events from stdin");
        let stdin = io::stdin();
        let lock = stdin.lock();
        return load_events(lock);
    }

    debug!("reading events from {}", path.display());
    let file = File::open(path)?;
    load_events(BufReader::new(file))
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use crate::{
        errors::ParseError,
        rank::{rank, rank_with_magnitudes, RankPolicy},
    };
    use std::io::Write;
    use tempdir::TempDir;

    const EVENTS: &str = r#"[
        {
            "event_starttime": "2024-05-10T06:27:00",
            "event_peaktime": "2024-05-10T06:54:00",
            "event_endtime": "2024-05-10T07:06:00",
            "fl_goescls": "X3.9",
            "ar_noaanum": 13664
        },
        {
            "event_starttime": "2024-05-11T01:10:00",
            "event_peaktime": "2024-05-11T01:23:00",
            "event_endtime": "2024-05-11T01:39:00",
            "fl_goescls": "X5.8",
            "ar_noaanum": 13664
        }
    ]"#;

    #[test]
    fn test_load_bare_array() {
        let events = load_events(EVENTS.as_bytes()).expect("valid export");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].goes_class, "X5.8");
    }

    #[test]
    fn test_load_hek_response() {
        let response = format!(r#"{{ "result": {}, "overmax": false }}"#, EVENTS);
        let events = load_events(response.as_bytes()).expect("valid response");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].goes_class, "X3.9");
    }

    #[test]
    fn test_load_garbage_is_error() {
        match load_events(&b"{ \"nope\": 1 }"[..]) {
            Err(FlareRankErr::UnrecognizedExport(_)) => {}
            other => panic!("expected unrecognized export, got {:?}", other),
        }
        match load_events(&b"42"[..]) {
            Err(FlareRankErr::UnrecognizedExport(_)) => {}
            other => panic!("expected unrecognized export, got {:?}", other),
        }
        match load_events(&b"not json"[..]) {
            Err(FlareRankErr::Json(_)) => {}
            other => panic!("expected json error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_event_is_named() {
        let events = r#"[
            { "fl_goescls": "X3.9", "event_starttime": "2024-05-10T06:27:00",
              "event_peaktime": "2024-05-10T06:54:00", "event_endtime": "2024-05-10T07:06:00" },
            { "fl_goescls": "X5.8", "event_starttime": "whenever",
              "event_peaktime": "2024-05-11T01:23:00", "event_endtime": "2024-05-11T01:39:00" }
        ]"#;

        match load_events(events.as_bytes()) {
            Err(FlareRankErr::InvalidEvent { index, err }) => {
                assert_eq!(index, 1);
                assert!(err.to_string().contains("whenever"));
            }
            other => panic!("expected invalid event, got {:?}", other),
        }
    }

    const NULL_AND_MISSING_CLASS: &str = r#"[
        { "fl_goescls": null, "event_starttime": "2024-05-10T01:00:00",
          "event_peaktime": "2024-05-10T01:10:00", "event_endtime": "2024-05-10T01:20:00" },
        { "fl_goescls": "X3.9", "event_starttime": "2024-05-10T06:27:00",
          "event_peaktime": "2024-05-10T06:54:00", "event_endtime": "2024-05-10T07:06:00" },
        { "event_starttime": "2024-05-10T08:00:00",
          "event_peaktime": "2024-05-10T08:10:00", "event_endtime": "2024-05-10T08:20:00" },
        { "fl_goescls": "M1.0", "event_starttime": "2024-05-10T09:00:00",
          "event_peaktime": "2024-05-10T09:10:00", "event_endtime": "2024-05-10T09:20:00" }
    ]"#;

    #[test]
    fn test_null_and_missing_class_strict() {
        let events = load_events(NULL_AND_MISSING_CLASS.as_bytes()).expect("all events load");
        assert_eq!(events.len(), 4);

        let err = rank(events, RankPolicy::Strict).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::Empty));
    }

    #[test]
    fn test_null_and_missing_class_lenient() {
        let events = load_events(NULL_AND_MISSING_CLASS.as_bytes()).expect("all events load");

        let ranked = rank_with_magnitudes(events, RankPolicy::Lenient).unwrap();
        let order: Vec<(&str, &str)> = ranked
            .iter()
            .map(|r| (r.record.goes_class.as_str(), r.record.start_time.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                ("X3.9", "2024-05-10T06:27:00"),
                ("M1.0", "2024-05-10T09:00:00"),
                ("", "2024-05-10T01:00:00"),
                ("", "2024-05-10T08:00:00"),
            ]
        );
        assert!(ranked[2].magnitude.is_none() && ranked[3].magnitude.is_none());
    }

    #[test]
    fn test_load_from_path() {
        let tmp = TempDir::new("goes-flare-rank-test").expect("temp dir");
        let path = tmp.path().join("flares.json");
        File::create(&path)
            .and_then(|mut f| f.write_all(EVENTS.as_bytes()))
            .expect("write test file");

        let events = load_events_from_path(&path).expect("load from file");
        assert_eq!(events.len(), 2);

        match load_events_from_path(tmp.path().join("missing.json")) {
            Err(FlareRankErr::IO(_)) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
