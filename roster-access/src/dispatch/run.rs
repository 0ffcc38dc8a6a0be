//! Request dispatch: classify, gate, execute

use log::{info, warn};

use crate::action::ActionResponse;
use crate::error::{ActionError, ActionResult};
use crate::request::{RequestContext, RequestParams};

impl super::registry::Dispatcher {
    /// Run the named action for a request and map the outcome to a response.
    ///
    /// Missing parameters and denials become client errors; an empty
    /// required parameter or a failing action becomes a server error.
    pub fn dispatch(
        &self,
        action_name: &str,
        params: impl RequestParams + Send + Sync + 'static,
    ) -> ActionResponse {
        match self.try_dispatch(action_name, params) {
            Ok(response) => response,
            Err(err) => {
                let status = err.status_code();
                if err.is_client_error() {
                    info!("Request to '{action_name}' rejected ({status}): {err}");
                } else {
                    warn!("Request to '{action_name}' failed ({status}): {err}");
                }
                ActionResponse::error(status, err.to_string())
            }
        }
    }

    /// Like [`Self::dispatch`] but returns the error instead of a response
    pub fn try_dispatch(
        &self,
        action_name: &str,
        params: impl RequestParams + Send + Sync + 'static,
    ) -> ActionResult<ActionResponse> {
        let action = self
            .actions
            .get(action_name)
            .ok_or_else(|| ActionError::UnknownAction(action_name.to_string()))?;

        let ctx = RequestContext::new(params, self.identity.as_ref(), &self.config);

        if !ctx.check_access(action.as_ref())?.is_allowed() {
            return Err(ActionError::AccessDenied {
                action: action_name.to_string(),
                tier: ctx.auth_tier(),
            });
        }

        info!("Executing '{action_name}' for {} request", ctx.auth_tier());
        action.execute(&ctx)
    }
}
