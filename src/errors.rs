//! Module for errors.
use std::{error::Error, fmt::Display};

/// The ways a GOES class string can fail to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The class string was empty or only whitespace.
    Empty,
    /// The leading character is not a known intensity class letter.
    UnknownClass(char),
    /// The text after the class letter is not a finite, non-negative decimal.
    InvalidMultiplier(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::ParseError::*;

        match self {
            Empty => write!(f, "empty flare class"),
            UnknownClass(letter) => write!(f, "unknown flare class letter: {:?}", letter),
            InvalidMultiplier(text) => write!(f, "invalid flare class multiplier: {:?}", text),
        }
    }
}

impl Error for ParseError {}

/// Error from the flare ranking library.
#[derive(Debug)]
pub enum FlareRankErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),
    /// Error formatting a table
    Format(::std::fmt::Error),

    // Other forwarded errors
    /// Error forwarded from serde_json while reading event exports
    Json(::serde_json::Error),
    /// One event in an export could not be read.
    InvalidEvent {
        /// Position of the event in the export, from 0.
        index: usize,
        /// What serde_json reported for it.
        err: ::serde_json::Error,
    },
    /// The export is neither a list of events nor a HEK response.
    UnrecognizedExport(&'static str),

    // My own errors from this crate
    /// A GOES class string could not be parsed, along with the offending string.
    Parse {
        /// The class string as it was given.
        class: String,
        /// What was wrong with it.
        kind: ParseError,
    },
    /// A time in an export or on the command line could not be understood.
    InvalidTime(String),
    /// A command line value was out of range or malformed.
    InvalidArgument(String),
}

impl FlareRankErr {
    pub(crate) fn parse(class: &str, kind: ParseError) -> Self {
        FlareRankErr::Parse {
            class: class.to_owned(),
            kind,
        }
    }

    /// The kind of parse failure, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseError> {
        match self {
            FlareRankErr::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

impl Display for FlareRankErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::FlareRankErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),
            Format(err) => write!(f, "std lib formatting error: {}", err),

            Json(err) => write!(f, "error reading event json: {}", err),
            InvalidEvent { index, err } => write!(f, "unable to read event {}: {}", index, err),
            UnrecognizedExport(msg) => write!(f, "unrecognized event export: {}", msg),

            Parse { class, kind } => write!(f, "unable to parse class {:?}: {}", class, kind),
            InvalidTime(text) => write!(f, "invalid time: {}", text),
            InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for FlareRankErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FlareRankErr::IO(err) => Some(err),
            FlareRankErr::Format(err) => Some(err),
            FlareRankErr::Json(err) => Some(err),
            FlareRankErr::InvalidEvent { err, .. } => Some(err),
            FlareRankErr::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

impl From<::std::io::Error> for FlareRankErr {
    fn from(err: ::std::io::Error) -> FlareRankErr {
        FlareRankErr::IO(err)
    }
}

impl From<::std::fmt::Error> for FlareRankErr {
    fn from(err: ::std::fmt::Error) -> FlareRankErr {
        FlareRankErr::Format(err)
    }
}

impl From<::serde_json::Error> for FlareRankErr {
    fn from(err: ::serde_json::Error) -> FlareRankErr {
        FlareRankErr::Json(err)
    }
}
