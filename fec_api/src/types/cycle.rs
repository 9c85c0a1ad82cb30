//! Two-year election cycles.

use serde::{Serialize, Serializer};

/// An FEC two-year transaction period, identified by its even ending year.
///
/// Only even years in [`TwoYearPeriod::EARLIEST`, `TwoYearPeriod::LATEST`]
/// can be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TwoYearPeriod(u16);

impl TwoYearPeriod {
    pub const EARLIEST: TwoYearPeriod = TwoYearPeriod(2000);
    pub const LATEST: TwoYearPeriod = TwoYearPeriod(2020);

    /// Returns `None` for odd years and years outside the supported range.
    pub fn new(year: u16) -> Option<Self> {
        if year % 2 == 0 && (Self::EARLIEST.0..=Self::LATEST.0).contains(&year) {
            Some(TwoYearPeriod(year))
        } else {
            None
        }
    }

    pub fn year(&self) -> u16 {
        self.0
    }
}

impl Default for TwoYearPeriod {
    fn default() -> Self {
        Self::LATEST
    }
}

impl std::fmt::Display for TwoYearPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl Serialize for TwoYearPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
