//! Authentication tiers, ordered by ascending privilege.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The authentication level a request was classified into.
///
/// The derived ordering follows declaration order, so
/// `Unauthenticated < Unregistered < Registered < AllAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthTier {
    /// No credentials at all
    Unauthenticated,
    /// Carries a registration key but no session user
    Unregistered,
    /// Has a session user
    Registered,
    /// Presented the backdoor key
    AllAccess,
}

impl AuthTier {
    pub const ALL: [AuthTier; 4] = [
        AuthTier::Unauthenticated,
        AuthTier::Unregistered,
        AuthTier::Registered,
        AuthTier::AllAccess,
    ];

    /// Numeric level of this tier, starting at 0 for `Unauthenticated`
    pub fn level(self) -> u8 {
        match self {
            Self::Unauthenticated => 0,
            Self::Unregistered => 1,
            Self::Registered => 2,
            Self::AllAccess => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Unregistered => "unregistered",
            Self::Registered => "registered",
            Self::AllAccess => "all-access",
        }
    }
}

impl fmt::Display for AuthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "unauthenticated" => Ok(Self::Unauthenticated),
            "unregistered" => Ok(Self::Unregistered),
            "registered" => Ok(Self::Registered),
            "all-access" => Ok(Self::AllAccess),
            other => Err(format!("unknown authentication tier '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_levels() {
        for pair in AuthTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].level() < pair[1].level());
        }
    }

    #[test]
    fn test_parse_accepts_display_and_serde_forms() {
        for tier in AuthTier::ALL {
            assert_eq!(tier.to_string().parse::<AuthTier>(), Ok(tier));
        }
        assert_eq!("ALL_ACCESS".parse::<AuthTier>(), Ok(AuthTier::AllAccess));
        assert!("admin".parse::<AuthTier>().is_err());
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&AuthTier::AllAccess).unwrap();
        assert_eq!(json, "\"ALL_ACCESS\"");
        let tier: AuthTier = serde_json::from_str("\"UNREGISTERED\"").unwrap();
        assert_eq!(tier, AuthTier::Unregistered);
    }
}
