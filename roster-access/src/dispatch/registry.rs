//! Action registry
//!
//! The dispatcher owns its collaborators (configuration and identity
//! provider) and a table of named actions. Collaborators are passed in at
//! construction and never swapped afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::action::Action;
use crate::config::GateConfig;
use crate::request::IdentityProvider;

/// Main dispatcher struct holding the action registry
pub struct Dispatcher {
    pub(crate) config: Arc<GateConfig>,
    pub(crate) identity: Arc<dyn IdentityProvider>,
    pub(crate) actions: BTreeMap<String, Box<dyn Action>>,
}

impl Dispatcher {
    pub fn new(config: Arc<GateConfig>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            config,
            identity,
            actions: BTreeMap::new(),
        }
    }

    /// Register `action` under `name`, replacing any previous registration
    pub fn register(&mut self, name: impl Into<String>, action: impl Action + 'static) {
        self.actions.insert(name.into(), Box::new(action));
    }

    /// Builder-style variant of [`Dispatcher::register`]
    pub fn with_action(mut self, name: impl Into<String>, action: impl Action + 'static) -> Self {
        self.register(name, action);
        self
    }

    /// Names of all registered actions, sorted
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    // dispatch() method implementation is in run.rs
}
