//! Lenient coercion of user-supplied query dimensions.
//!
//! These never fail. Unusable input is replaced with a default and the
//! result carries an [`InputWarning`]; the same warning is emitted as a
//! `tracing` event so server-side callers see it without inspecting values.

use std::fmt;
use std::num::IntErrorKind;

use fec_api::types::{CommitteeType, TwoYearPeriod};

/// Why an input was replaced by its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWarning {
    /// Cycle was not an integer, or was later than the latest cycle.
    InvalidCycle,
    /// Committee type matched no known name or code.
    InvalidCommitteeType,
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::InvalidCycle => write!(
                f,
                "Invalid input, defaulting to {}.",
                TwoYearPeriod::LATEST
            ),
            InputWarning::InvalidCommitteeType => {
                write!(f, "Invalid input, defaulting to Presidential")
            }
        }
    }
}

/// A coerced value plus the warning raised while coercing it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub warning: Option<InputWarning>,
}

impl<T> Normalized<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn warned(value: T, warning: InputWarning) -> Self {
        tracing::warn!("{}", warning);
        Self {
            value,
            warning: Some(warning),
        }
    }

    pub fn into_parts(self) -> (T, Option<InputWarning>) {
        (self.value, self.warning)
    }
}

/// Coerces a cycle year given as a string or integer.
///
/// Odd years round up to the cycle they lead into (2013 becomes 2014).
/// Anything later than 2020, or not an integer at all, falls back to 2020
/// with a warning. Anything earlier than 2000 clamps to 2000 silently.
pub fn normalize_two_year_period(input: impl fmt::Display) -> Normalized<TwoYearPeriod> {
    let raw = input.to_string();
    let year = match raw.trim().parse::<i64>() {
        Ok(year) => year,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
            return Normalized::clean(TwoYearPeriod::EARLIEST)
        }
        Err(_) => return Normalized::warned(TwoYearPeriod::LATEST, InputWarning::InvalidCycle),
    };

    let year = if year % 2 != 0 {
        year.saturating_add(1)
    } else {
        year
    };

    if year > i64::from(TwoYearPeriod::LATEST.year()) {
        return Normalized::warned(TwoYearPeriod::LATEST, InputWarning::InvalidCycle);
    }
    if year < i64::from(TwoYearPeriod::EARLIEST.year()) {
        return Normalized::clean(TwoYearPeriod::EARLIEST);
    }

    match u16::try_from(year).ok().and_then(TwoYearPeriod::new) {
        Some(period) => Normalized::clean(period),
        None => Normalized::warned(TwoYearPeriod::LATEST, InputWarning::InvalidCycle),
    }
}

/// Coerces a committee name or letter code, case-insensitively.
///
/// Unknown input falls back to Presidential with a warning.
pub fn normalize_committee_type(input: &str) -> Normalized<CommitteeType> {
    match input.trim().to_lowercase().as_str() {
        "house" | "h" => Normalized::clean(CommitteeType::House),
        "senate" | "s" => Normalized::clean(CommitteeType::Senate),
        "presidential" | "p" => Normalized::clean(CommitteeType::Presidential),
        "super_pac" | "super pac" | "superpac" | "o" => Normalized::clean(CommitteeType::SuperPac),
        "pac" | "q" => Normalized::clean(CommitteeType::Pac),
        "party" | "y" => Normalized::clean(CommitteeType::Party),
        _ => Normalized::warned(
            CommitteeType::Presidential,
            InputWarning::InvalidCommitteeType,
        ),
    }
}
