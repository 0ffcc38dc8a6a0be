//! Error types for request handling

use crate::tier::AuthTier;
use thiserror::Error;

/// Failures looking up request parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// A required parameter is not present in the request
    #[error("The [{0}] HTTP parameter is null.")]
    MissingParameter(String),

    /// A required parameter is present but carries no values
    #[error("The [{0}] HTTP parameter has no values.")]
    EmptyParameter(String),
}

/// Errors surfaced by the dispatcher while running an action
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Access to '{action}' denied for {tier} request")]
    AccessDenied { action: String, tier: AuthTier },

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action failed: {0}")]
    Execution(String),
}

impl ActionError {
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// HTTP status the dispatcher responds with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Request(RequestError::MissingParameter(_)) => 400,
            Self::Request(RequestError::EmptyParameter(_)) => 500,
            Self::AccessDenied { .. } => 403,
            Self::UnknownAction(_) => 404,
            Self::Execution(_) => 500,
        }
    }

    /// True for errors caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

pub type ActionResult<T> = Result<T, ActionError>;
