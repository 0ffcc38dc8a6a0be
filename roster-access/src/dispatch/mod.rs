//! Dispatcher module - routes requests to registered actions

mod registry;
mod run;

pub use registry::Dispatcher;
