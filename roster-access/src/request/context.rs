//! Request context: parameters plus the authentication tier classified once
//! at construction

use log::trace;

use crate::action::Action;
use crate::config::GateConfig;
use crate::decision::{try_decide_access, Verdict};
use crate::error::RequestError;
use crate::request::identity::{IdentityProvider, UserInfo};
use crate::request::params::RequestParams;
use crate::tier::AuthTier;

/// Parameter carrying the backdoor key
pub const BACKDOOR_KEY_PARAM: &str = "backdoorkey";
/// Parameter carrying a course registration key
pub const REGKEY_PARAM: &str = "regkey";

/// State derived from a single incoming request
pub struct RequestContext {
    params: Box<dyn RequestParams + Send + Sync>,
    user: Option<UserInfo>,
    auth_tier: AuthTier,
}

impl RequestContext {
    /// Classify the request and capture its parameters.
    ///
    /// Classification order: backdoor key, session user, registration key.
    pub fn new(
        params: impl RequestParams + Send + Sync + 'static,
        identity: &dyn IdentityProvider,
        config: &GateConfig,
    ) -> Self {
        let (auth_tier, user) = classify(&params, identity, config);
        trace!("Request classified as {auth_tier}");
        Self {
            params: Box::new(params),
            user,
            auth_tier,
        }
    }

    pub fn auth_tier(&self) -> AuthTier {
        self.auth_tier
    }

    /// The session user, if one was resolved during classification
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Decide whether this request may run `action`
    pub fn check_access(&self, action: &dyn Action) -> Result<Verdict, RequestError> {
        try_decide_access(self.auth_tier, action.min_auth_level(), || {
            action.check_specific_access(self)
        })
    }

    /// First value of the parameter, or `None` if it is not in the request
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.first(name)
    }

    /// First value of a parameter expected to be present
    pub fn required_param(&self, name: &str) -> Result<&str, RequestError> {
        self.required_param_values(name)?
            .first()
            .map(String::as_str)
            .ok_or_else(|| RequestError::EmptyParameter(name.to_string()))
    }

    /// All values of the parameter, or `None` if it is not in the request
    pub fn param_values(&self, name: &str) -> Option<&[String]> {
        self.params.values(name)
    }

    /// All values of a parameter expected to be present
    pub fn required_param_values(&self, name: &str) -> Result<&[String], RequestError> {
        self.param_values(name)
            .ok_or_else(|| RequestError::MissingParameter(name.to_string()))
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("user", &self.user)
            .field("auth_tier", &self.auth_tier)
            .finish_non_exhaustive()
    }
}

fn classify(
    params: &dyn RequestParams,
    identity: &dyn IdentityProvider,
    config: &GateConfig,
) -> (AuthTier, Option<UserInfo>) {
    if config.matches_backdoor_key(params.first(BACKDOOR_KEY_PARAM)) {
        return (AuthTier::AllAccess, None);
    }

    if let Some(user) = identity.current_user(params) {
        return (AuthTier::Registered, Some(user));
    }

    // Value is not checked here; actions verify the key themselves
    if params.values(REGKEY_PARAM).is_some() {
        (AuthTier::Unregistered, None)
    } else {
        (AuthTier::Unauthenticated, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::request::identity::{NoIdentity, StaticIdentity};
    use crate::request::params::ParamMap;

    /// Resolves users from a `session` parameter
    struct SessionIdentity {
        sessions: HashMap<&'static str, UserInfo>,
    }

    impl IdentityProvider for SessionIdentity {
        fn current_user(&self, params: &dyn RequestParams) -> Option<UserInfo> {
            let token = params.first("session")?;
            self.sessions.get(token).cloned()
        }
    }

    fn sessions() -> SessionIdentity {
        SessionIdentity {
            sessions: HashMap::from([
                ("s-alice", UserInfo::student("alice")),
                ("s-root", UserInfo::admin("root")),
            ]),
        }
    }

    fn config() -> GateConfig {
        GateConfig::with_backdoor_key("open-sesame")
    }

    #[test]
    fn test_backdoor_key_wins_over_session_user() {
        let params = ParamMap::new()
            .with(BACKDOOR_KEY_PARAM, "open-sesame")
            .with(REGKEY_PARAM, "abc");
        let identity = StaticIdentity(UserInfo::student("alice"));
        let ctx = RequestContext::new(params, &identity, &config());
        assert_eq!(ctx.auth_tier(), AuthTier::AllAccess);
    }

    #[test]
    fn test_wrong_backdoor_key_falls_through() {
        let params = ParamMap::new().with(BACKDOOR_KEY_PARAM, "guess");
        let ctx = RequestContext::new(params, &NoIdentity, &config());
        assert_eq!(ctx.auth_tier(), AuthTier::Unauthenticated);
    }

    #[test]
    fn test_backdoor_disabled_without_configured_key() {
        let params = ParamMap::new().with(BACKDOOR_KEY_PARAM, "");
        let ctx = RequestContext::new(params, &NoIdentity, &GateConfig::new());
        assert_eq!(ctx.auth_tier(), AuthTier::Unauthenticated);
    }

    #[test]
    fn test_session_user_is_registered() {
        let identity = StaticIdentity(UserInfo::student("alice"));
        let ctx = RequestContext::new(ParamMap::new(), &identity, &config());
        assert_eq!(ctx.auth_tier(), AuthTier::Registered);
        assert_eq!(ctx.user().map(|u| u.id.as_str()), Some("alice"));
    }

    #[test]
    fn test_session_user_resolved_per_request() {
        let identity = sessions();

        let alice =
            RequestContext::new(ParamMap::from_query("session=s-alice"), &identity, &config());
        assert_eq!(alice.auth_tier(), AuthTier::Registered);
        assert_eq!(alice.user().map(|u| u.id.as_str()), Some("alice"));

        let root =
            RequestContext::new(ParamMap::from_query("session=s-root"), &identity, &config());
        assert_eq!(root.user().map(|u| u.is_admin), Some(true));

        let stale = RequestContext::new(
            ParamMap::from_query("session=expired&regkey=k"),
            &identity,
            &config(),
        );
        assert_eq!(stale.auth_tier(), AuthTier::Unregistered);
        assert!(stale.user().is_none());
    }

    #[test]
    fn test_regkey_presence_is_enough_for_unregistered() {
        let ctx = RequestContext::new(ParamMap::from_query("regkey="), &NoIdentity, &config());
        assert_eq!(ctx.auth_tier(), AuthTier::Unregistered);
    }

    #[test]
    fn test_no_credentials_is_unauthenticated() {
        let ctx = RequestContext::new(ParamMap::new(), &NoIdentity, &config());
        assert_eq!(ctx.auth_tier(), AuthTier::Unauthenticated);
        assert!(ctx.user().is_none());
    }

    #[test]
    fn test_optional_accessors() {
        let params = ParamMap::from_query("a=1&a=2");
        let ctx = RequestContext::new(params, &NoIdentity, &config());
        assert_eq!(ctx.param("a"), Some("1"));
        assert_eq!(ctx.param("b"), None);
        assert_eq!(ctx.param_values("a").map(<[String]>::len), Some(2));
        assert_eq!(ctx.param_values("b"), None);
    }

    #[test]
    fn test_required_accessors_on_missing_parameter() {
        let ctx = RequestContext::new(ParamMap::new(), &NoIdentity, &config());
        assert_eq!(
            ctx.required_param("courseid"),
            Err(RequestError::MissingParameter("courseid".to_string()))
        );
        assert_eq!(
            ctx.required_param_values("courseid"),
            Err(RequestError::MissingParameter("courseid".to_string()))
        );
    }

    #[test]
    fn test_required_param_on_empty_value_list_is_distinct() {
        let mut params = ParamMap::new();
        params.set_values("courseid", Vec::new());
        let ctx = RequestContext::new(params, &NoIdentity, &config());

        assert_eq!(ctx.required_param_values("courseid"), Ok(&[][..]));
        assert_eq!(
            ctx.required_param("courseid"),
            Err(RequestError::EmptyParameter("courseid".to_string()))
        );
    }
}
