#![deny(missing_docs)]
//! Rank GOES solar flare events by the magnitude of their X-ray classification.
//!
//! Flare lists from the Heliophysics Event Knowledgebase give each event a class such as
//! `M3.2`. The letter is an order of magnitude in peak X-ray flux and the number a multiplier
//! within it, so `M1.0` outranks `C9.9`. This crate parses those classes, orders events by them
//! and selects events the way a HEK search would.

//
// Public API
//
pub use crate::class::FlareClass;
pub use crate::cmd_line::CmdLineArgs;
pub use crate::errors::{FlareRankErr, ParseError};
pub use crate::event::{FlareEvent, GoesClassified};
pub use crate::magnitude::{compute_magnitude, FlareMagnitude};
pub use crate::query::{FlareQuery, DEFAULT_OBSERVATORY, FLARE_EVENT_TYPE};
pub use crate::rank::{rank, rank_with_magnitudes, RankPolicy, Ranked};
pub use crate::report::{summary_line, write_report, FlareTable};
pub use crate::source::{load_events, load_events_from_path};
pub use crate::time::{parse_time, EventTime};

//
// Implementation only
//
mod class;
mod cmd_line;
mod errors;
mod event;
mod magnitude;
mod query;
mod rank;
mod report;
mod source;
mod time;

#[cfg(feature = "pylib")]
mod py_lib;
