//! This crate provides the request-side access control for Roster Gate:
//! - Authentication tier classification (backdoor key, session user, registration key)
//! - Required/optional request parameter lookup
//! - The access decision procedure and the `Action` capability trait
//! - A dispatcher holding a registry of named actions
//!

mod action;
mod config;
mod decision;
pub mod dispatch;
mod error;
mod request;
mod tier;

// Re-exports for a small, focused public API
pub use action::{Action, ActionResponse};
pub use config::{GateConfig, BACKDOOR_KEY_ENV};
pub use decision::{decide_access, try_decide_access, Verdict};
pub use dispatch::Dispatcher;
pub use error::{ActionError, ActionResult, RequestError};
pub use request::{
    IdentityProvider, NoIdentity, ParamMap, RequestContext, RequestParams, StaticIdentity,
    UserInfo, BACKDOOR_KEY_PARAM, REGKEY_PARAM,
};
pub use tier::AuthTier;
