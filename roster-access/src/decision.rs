//! The access decision procedure

use std::convert::Infallible;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::tier::AuthTier;

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Allow,
    Deny,
}

impl Verdict {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Verdict {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// Decide whether a request classified as `tier` may access a resource
/// requiring `min_tier`.
///
/// Checks short-circuit in order: insufficient tier denies, public resources
/// allow, all-access allows, and only then is `specific_check` evaluated.
pub fn decide_access<F>(tier: AuthTier, min_tier: AuthTier, specific_check: F) -> Verdict
where
    F: FnOnce() -> bool,
{
    match try_decide_access(tier, min_tier, || Ok::<_, Infallible>(specific_check())) {
        Ok(verdict) => verdict,
        Err(never) => match never {},
    }
}

/// Like [`decide_access`], for resource checks that can fail.
///
/// An error from `specific_check` is returned as-is rather than being
/// folded into a verdict.
pub fn try_decide_access<F, E>(
    tier: AuthTier,
    min_tier: AuthTier,
    specific_check: F,
) -> Result<Verdict, E>
where
    F: FnOnce() -> Result<bool, E>,
{
    if tier < min_tier {
        debug!("Denied: {tier} is below the required {min_tier}");
        return Ok(Verdict::Deny);
    }

    if min_tier == AuthTier::Unauthenticated {
        return Ok(Verdict::Allow);
    }

    if tier == AuthTier::AllAccess {
        debug!("Allowed: all-access pass");
        return Ok(Verdict::Allow);
    }

    let verdict = Verdict::from(specific_check()?);
    debug!("Resource-specific check for {tier} request: {verdict:?}");
    Ok(verdict)
}
