//! Actions exposed through the `dispatch` subcommand

use std::sync::Arc;

use roster_access::{
    Action, ActionError, ActionResponse, ActionResult, AuthTier, Dispatcher, GateConfig,
    IdentityProvider, RequestContext, RequestError,
};
use roster_profile::ProfileRecord;
use serde_json::json;

use crate::store::ProfileStore;

const GOOGLE_ID_PARAM: &str = "googleid";
const PROFILE_PARAM: &str = "profile";

/// Build the dispatcher with every action registered
pub(crate) fn build_dispatcher(
    config: Arc<GateConfig>,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<ProfileStore>,
) -> Dispatcher {
    Dispatcher::new(config, identity)
        .with_action("get-profile", GetProfileAction { store })
        .with_action("check-profile", CheckProfileAction)
}

/// Returns a stored profile. Users may only read their own; admins may read any.
pub(crate) struct GetProfileAction {
    store: Arc<ProfileStore>,
}

impl Action for GetProfileAction {
    fn min_auth_level(&self) -> AuthTier {
        AuthTier::Registered
    }

    fn check_specific_access(&self, ctx: &RequestContext) -> Result<bool, RequestError> {
        let google_id = ctx.required_param(GOOGLE_ID_PARAM)?;
        Ok(ctx
            .user()
            .is_some_and(|user| user.is_admin || user.id == google_id))
    }

    fn execute(&self, ctx: &RequestContext) -> ActionResult<ActionResponse> {
        let google_id = ctx.required_param(GOOGLE_ID_PARAM)?;
        match self.store.get(google_id) {
            Some(record) => {
                let body = serde_json::to_value(record).map_err(|e| {
                    ActionError::execution(format!("Failed to serialize profile: {e}"))
                })?;
                Ok(ActionResponse::ok(body))
            }
            None => Ok(ActionResponse::error(
                404,
                format!("No profile found for '{google_id}'"),
            )),
        }
    }
}

/// Validates a profile submitted as JSON in the `profile` parameter
pub(crate) struct CheckProfileAction;

impl Action for CheckProfileAction {
    fn min_auth_level(&self) -> AuthTier {
        AuthTier::Unauthenticated
    }

    fn check_specific_access(&self, _ctx: &RequestContext) -> Result<bool, RequestError> {
        Ok(true)
    }

    fn execute(&self, ctx: &RequestContext) -> ActionResult<ActionResponse> {
        let raw = ctx.required_param(PROFILE_PARAM)?;
        // A null pictureKey is unrepresentable, so it fails parsing here
        // instead of surfacing as a validation message
        let record = match ProfileRecord::from_json(raw) {
            Ok(record) => record,
            Err(e) => return Ok(ActionResponse::error(400, e.to_string())),
        };
        let errors = record.invalidity_info();
        Ok(ActionResponse::ok(json!({
            "googleId": record.google_id(),
            "valid": errors.is_empty(),
            "errors": errors,
        })))
    }
}
