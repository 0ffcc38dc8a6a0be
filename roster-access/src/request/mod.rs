//! Per-request state: parameters, identity and the classified tier

mod context;
mod identity;
mod params;

pub use context::{RequestContext, BACKDOOR_KEY_PARAM, REGKEY_PARAM};
pub use identity::{IdentityProvider, NoIdentity, StaticIdentity, UserInfo};
pub use params::{ParamMap, RequestParams};
