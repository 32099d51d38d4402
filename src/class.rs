//! GOES X-ray flare intensity classes.

use crate::errors::{FlareRankErr, ParseError};
use std::{fmt, str::FromStr};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The letter part of a GOES flare classification.
///
/// Each class is an order of magnitude in peak 1-8 Angstrom X-ray flux. Variants are declared
/// weakest first, so the derived ordering matches physical intensity.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum FlareClass {
    /// Below 1e-7 W/m^2.
    #[strum(to_string = "A", serialize = "a")]
    A,
    /// From 1e-7 W/m^2.
    #[strum(to_string = "B", serialize = "b")]
    B,
    /// From 1e-6 W/m^2.
    #[strum(to_string = "C", serialize = "c")]
    C,
    /// From 1e-5 W/m^2.
    #[strum(to_string = "M", serialize = "m")]
    M,
    /// From 1e-4 W/m^2, open ended.
    #[strum(to_string = "X", serialize = "x")]
    X,
}

impl fmt::Display for FlareClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_static_str())
    }
}

impl FlareClass {
    /// Get a static string representation.
    pub fn as_static_str(self) -> &'static str {
        self.into()
    }

    /// Look up the class for the leading letter of a classification string.
    pub fn from_letter(letter: char) -> Result<Self, FlareRankErr> {
        let mut buf = [0u8; 4];
        FlareClass::from_str(letter.encode_utf8(&mut buf))
            .map_err(|_| FlareRankErr::parse(&letter.to_string(), ParseError::UnknownClass(letter)))
    }

    /// The start of this class's band on the combined magnitude scale.
    ///
    /// Bands are 10 wide and do not overlap for the conventional multiplier range [1, 10).
    pub fn band(self) -> f64 {
        match self {
            FlareClass::A => 0.0,
            FlareClass::B => 10.0,
            FlareClass::C => 20.0,
            FlareClass::M => 30.0,
            FlareClass::X => 40.0,
        }
    }

    /// Peak X-ray flux in W/m^2 represented by a multiplier of 1.0 in this class.
    pub fn base_flux(self) -> f64 {
        match self {
            FlareClass::A => 1.0e-8,
            FlareClass::B => 1.0e-7,
            FlareClass::C => 1.0e-6,
            FlareClass::M => 1.0e-5,
            FlareClass::X => 1.0e-4,
        }
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn test_classes_ordered_weakest_first() {
        let classes: Vec<FlareClass> = FlareClass::iter().collect();
        let mut sorted = classes.clone();
        sorted.sort();

        assert_eq!(classes, sorted);
        assert!(FlareClass::X > FlareClass::M);
        assert!(FlareClass::C > FlareClass::B);
    }

    #[test]
    fn test_bands_and_flux_increase_with_class() {
        for (weaker, stronger) in FlareClass::iter().zip(FlareClass::iter().skip(1)) {
            assert_eq!(stronger.band() - weaker.band(), 10.0);
            assert!((stronger.base_flux() / weaker.base_flux() - 10.0).abs() < 1.0e-9);
        }
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(FlareClass::from_letter('M').unwrap(), FlareClass::M);
        assert_eq!(FlareClass::from_letter('x').unwrap(), FlareClass::X);

        let err = FlareClass::from_letter('Z').unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::UnknownClass('Z')));
    }

    #[test]
    fn round_trip_strings_for_flare_class() {
        for class in FlareClass::iter() {
            assert_eq!(FlareClass::from_str(class.as_static_str()).unwrap(), class);
        }
    }
}
