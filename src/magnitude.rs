//! Parse GOES class strings into comparable flare magnitudes.

use crate::{
    class::FlareClass,
    errors::{FlareRankErr, ParseError},
};
use std::{cmp::Ordering, fmt, str::FromStr};

/// Total strength of a flare, ordered by class first and multiplier second.
///
/// Comparison is done on the pair rather than on [`value`](FlareMagnitude::value), so an
/// out of range multiplier such as `M12` still ranks below every `X` flare.
#[derive(Clone, Copy, Debug)]
pub struct FlareMagnitude {
    class: FlareClass,
    multiplier: f64,
    // False for a bare letter such as "X", which displays without a number.
    has_multiplier: bool,
}

impl FlareMagnitude {
    /// Create a new magnitude. The multiplier must be finite and non-negative.
    pub fn new(class: FlareClass, multiplier: f64) -> Result<Self, FlareRankErr> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(FlareRankErr::parse(
                &format!("{}{}", class, multiplier),
                ParseError::InvalidMultiplier(multiplier.to_string()),
            ));
        }

        Ok(FlareMagnitude {
            class,
            multiplier,
            has_multiplier: true,
        })
    }

    /// The intensity class.
    pub fn class(&self) -> FlareClass {
        self.class
    }

    /// The multiplier within the class, 0.0 when the class string had none.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// A single number on the combined scale, class band plus multiplier.
    pub fn value(&self) -> f64 {
        self.class.band() + self.multiplier
    }

    /// Peak X-ray flux in W/m^2.
    pub fn peak_flux(&self) -> f64 {
        self.class.base_flux() * self.multiplier
    }
}

impl PartialEq for FlareMagnitude {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FlareMagnitude {}

impl PartialOrd for FlareMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FlareMagnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.multiplier.total_cmp(&other.multiplier))
    }
}

impl fmt::Display for FlareMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.has_multiplier {
            write!(f, "{}", self.class)
        } else if self.multiplier.fract() == 0.0 {
            write!(f, "{}{:.1}", self.class, self.multiplier)
        } else {
            write!(f, "{}{}", self.class, self.multiplier)
        }
    }
}

impl FromStr for FlareMagnitude {
    type Err = FlareRankErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compute_magnitude(s)
    }
}

/// Compute the magnitude of a GOES class string such as `"M3.2"`.
///
/// Surrounding whitespace is ignored and the class letter may be lower case. A class with no
/// multiplier (`"X"`) gets a multiplier of 0.0 and so sorts below every flare in that class
/// that has one. Anything after the letter that is not a finite, non-negative decimal is an
/// error.
pub fn compute_magnitude(goes_class: &str) -> Result<FlareMagnitude, FlareRankErr> {
    let trimmed = goes_class.trim();

    let mut chars = trimmed.chars();
    let letter = chars
        .next()
        .ok_or_else(|| FlareRankErr::parse(goes_class, ParseError::Empty))?;
    let class = FlareClass::from_letter(letter)
        .map_err(|_| FlareRankErr::parse(goes_class, ParseError::UnknownClass(letter)))?;

    let suffix = chars.as_str();
    if suffix.is_empty() {
        return Ok(FlareMagnitude {
            class,
            multiplier: 0.0,
            has_multiplier: false,
        });
    }

    let bad_suffix =
        || FlareRankErr::parse(goes_class, ParseError::InvalidMultiplier(suffix.to_owned()));

    // f64::from_str also takes "inf", "NaN" and signs, none of which belong in a class code.
    if !suffix.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(bad_suffix());
    }

    let multiplier = suffix.parse::<f64>().map_err(|_| bad_suffix())?;

    Ok(FlareMagnitude {
        class,
        multiplier,
        has_multiplier: true,
    })
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
