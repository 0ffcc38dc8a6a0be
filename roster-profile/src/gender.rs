//! Gender field values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted gender values. `Other` doubles as the fallback for anything
/// unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub const ACCEPTED: [&'static str; 3] = ["male", "female", "other"];

    /// Exact, case-sensitive match against the accepted values
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Like [`Gender::parse`], but missing or unrecognized input becomes `Other`
    pub fn parse_or_other(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_other() {
        assert_eq!(Gender::parse_or_other(Some("female")), Gender::Female);
        assert_eq!(Gender::parse_or_other(Some("male")), Gender::Male);
        assert_eq!(Gender::parse_or_other(Some("unknown")), Gender::Other);
        assert_eq!(Gender::parse_or_other(Some("Female")), Gender::Other);
        assert_eq!(Gender::parse_or_other(None), Gender::Other);
    }

    #[test]
    fn test_accepted_values_round_trip() {
        for value in Gender::ACCEPTED {
            assert_eq!(Gender::parse(value).map(Gender::as_str), Some(value));
        }
    }
}
