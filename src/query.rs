//! Select flare events the way a HEK search would.
//!
//! The archive search itself lives elsewhere; this applies the same constraints to records that
//! have already been retrieved, so one tool covers every threshold and time range.

use crate::{
    errors::FlareRankErr,
    event::FlareEvent,
    magnitude::{compute_magnitude, FlareMagnitude},
};
use chrono::NaiveDateTime;
use log::debug;

/// The HEK event type code for flares.
pub const FLARE_EVENT_TYPE: &str = "FL";

/// The observatory whose flare list is used unless told otherwise.
pub const DEFAULT_OBSERVATORY: &str = "GOES";

/// Constraints on which flare events to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct FlareQuery {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    min_class: Option<FlareMagnitude>,
    observatory: Option<String>,
    event_type: String,
}

impl Default for FlareQuery {
    fn default() -> Self {
        FlareQuery {
            start: None,
            end: None,
            min_class: None,
            observatory: Some(DEFAULT_OBSERVATORY.to_owned()),
            event_type: FLARE_EVENT_TYPE.to_owned(),
        }
    }
}

impl FlareQuery {
    /// A query for GOES flares with no time or class limits.
    pub fn new() -> Self {
        FlareQuery::default()
    }

    /// Only keep events that overlap `[start, end]`.
    pub fn with_time_range(self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        FlareQuery {
            start: Some(start),
            end: Some(end),
            ..self
        }
    }

    /// Only keep events that end at or after `start`.
    pub fn with_start(self, start: NaiveDateTime) -> Self {
        FlareQuery {
            start: Some(start),
            ..self
        }
    }

    /// Only keep events that begin at or before `end`.
    pub fn with_end(self, end: NaiveDateTime) -> Self {
        FlareQuery {
            end: Some(end),
            ..self
        }
    }

    /// Only keep events strictly stronger than `threshold`, e.g. `"M3.0"`.
    pub fn with_min_class(self, threshold: &str) -> Result<Self, FlareRankErr> {
        let min_class = compute_magnitude(threshold)?;
        Ok(FlareQuery {
            min_class: Some(min_class),
            ..self
        })
    }

    /// Restrict to one observatory, or to none with `None`.
    pub fn with_observatory(self, observatory: Option<&str>) -> Self {
        FlareQuery {
            observatory: observatory.map(str::to_owned),
            ..self
        }
    }

    /// The class threshold, if any.
    pub fn min_class(&self) -> Option<FlareMagnitude> {
        self.min_class
    }

    /// Check the time range for consistency.
    pub fn validate(&self) -> Result<(), FlareRankErr> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Err(FlareRankErr::InvalidArgument(format!(
                "start {} is after end {}",
                start, end
            ))),
            _ => Ok(()),
        }
    }

    /// Does this event satisfy every constraint?
    ///
    /// Fields missing from the record do not exclude it. Neither does a class string that
    /// fails to parse; whether such a record is kept is up to the ranking policy.
    pub fn matches(&self, event: &FlareEvent) -> bool {
        if let Some(ref event_type) = event.event_type {
            if !event_type.eq_ignore_ascii_case(&self.event_type) {
                return false;
            }
        }

        if let Some(start) = self.start {
            if event.end_time.time() < start {
                return false;
            }
        }

        if let Some(end) = self.end {
            if event.start_time.time() > end {
                return false;
            }
        }

        if let (Some(wanted), Some(observatory)) = (&self.observatory, &event.observatory) {
            if !wanted.eq_ignore_ascii_case(observatory) {
                return false;
            }
        }

        if let Some(threshold) = self.min_class {
            if let Ok(magnitude) = compute_magnitude(&event.goes_class) {
                if magnitude <= threshold {
                    return false;
                }
            }
        }

        true
    }

    /// Keep the events that match, in their original order.
    pub fn filter(&self, events: impl IntoIterator<Item = FlareEvent>) -> Vec<FlareEvent> {
        let mut total = 0;
        let kept: Vec<FlareEvent> = events
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|event| self.matches(event))
            .collect();

        debug!("query kept {} of {} events", kept.len(), total);

        kept
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
