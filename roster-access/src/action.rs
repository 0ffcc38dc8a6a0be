//! Capability interface implemented by every request handler

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ActionResult, RequestError};
use crate::request::RequestContext;
use crate::tier::AuthTier;

/// An operation the system can perform on behalf of a request.
///
/// The dispatcher only calls [`Action::execute`] after the request passed
/// the tier gate and, where applicable, [`Action::check_specific_access`].
pub trait Action: Send + Sync {
    /// Minimum authentication tier required to access the resource
    fn min_auth_level(&self) -> AuthTier;

    /// Resource-specific access check, applied after tier gating.
    ///
    /// A required parameter missing from the request is an error, not a
    /// denial.
    fn check_specific_access(&self, ctx: &RequestContext) -> Result<bool, RequestError>;

    fn execute(&self, ctx: &RequestContext) -> ActionResult<ActionResponse>;
}

/// JSON response produced by the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: u16,
    pub body: Value,
}

impl ActionResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// Error response with a `{"message": ...}` body
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::json!({ "message": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
