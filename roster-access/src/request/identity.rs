//! Current-session identity, supplied by an external collaborator

use serde::{Deserialize, Serialize};

use crate::request::params::RequestParams;

/// The logged-in user behind a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub is_instructor: bool,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_instructor: false,
            is_student: false,
            is_admin: false,
        }
    }

    pub fn student(id: impl Into<String>) -> Self {
        Self {
            is_student: true,
            ..Self::new(id)
        }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(id)
        }
    }
}

/// Resolves the session user behind a request, if any.
///
/// Implementations receive the request's parameters so they can look up
/// a session token or cookie carried with it.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self, params: &dyn RequestParams) -> Option<UserInfo>;
}

/// Identity provider for requests without a session
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentity;

impl IdentityProvider for NoIdentity {
    fn current_user(&self, _params: &dyn RequestParams) -> Option<UserInfo> {
        None
    }
}

/// Identity provider that always resolves the same user
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub UserInfo);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self, _params: &dyn RequestParams) -> Option<UserInfo> {
        Some(self.0.clone())
    }
}
