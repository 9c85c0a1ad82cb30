//! FEC committee classifications.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Committee type as the FEC encodes it: a single uppercase letter.
///
/// Only the types this crate can filter on are listed; the FEC defines more.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CommitteeType {
    /// House candidate committee.
    #[serde(rename = "H")]
    House,

    /// Senate candidate committee.
    #[serde(rename = "S")]
    Senate,

    /// Presidential candidate committee. This is the default.
    #[serde(rename = "P")]
    #[default]
    Presidential,

    /// Independent expenditure-only committee (super PAC).
    #[serde(rename = "O")]
    SuperPac,

    /// Qualified PAC.
    #[serde(rename = "Q")]
    Pac,

    /// Qualified party committee.
    #[serde(rename = "Y")]
    Party,
}

impl CommitteeType {
    /// The single-letter code sent as `recipient_committee_type`.
    pub fn code(&self) -> &'static str {
        match self {
            CommitteeType::House => "H",
            CommitteeType::Senate => "S",
            CommitteeType::Presidential => "P",
            CommitteeType::SuperPac => "O",
            CommitteeType::Pac => "Q",
            CommitteeType::Party => "Y",
        }
    }
}

impl std::fmt::Display for CommitteeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Strict parse of the uppercase letter code. Lenient matching on names
/// belongs to the caller.
impl FromStr for CommitteeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(CommitteeType::House),
            "S" => Ok(CommitteeType::Senate),
            "P" => Ok(CommitteeType::Presidential),
            "O" => Ok(CommitteeType::SuperPac),
            "Q" => Ok(CommitteeType::Pac),
            "Y" => Ok(CommitteeType::Party),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_through_from_str() {
        for ct in [
            CommitteeType::House,
            CommitteeType::Senate,
            CommitteeType::Presidential,
            CommitteeType::SuperPac,
            CommitteeType::Pac,
            CommitteeType::Party,
        ] {
            assert_eq!(ct.code().parse::<CommitteeType>(), Ok(ct));
        }
    }

    #[test]
    fn from_str_is_strict() {
        assert!("h".parse::<CommitteeType>().is_err());
        assert!("House".parse::<CommitteeType>().is_err());
    }

    #[test]
    fn serializes_as_letter() {
        assert_eq!(serde_json::to_string(&CommitteeType::Senate).unwrap(), "\"S\"");
    }
}
