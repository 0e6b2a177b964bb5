//! Relay Context
//!
//! Relay settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::RelayConfig;

/// Settings the contact panel needs to reach the message relay
#[derive(Clone, Copy)]
pub struct RelayContext {
    pub config: RelayConfig,
}

impl RelayContext {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

/// Get the relay settings, falling back to the build configuration
pub fn use_relay_context() -> RelayContext {
    use_context::<RelayContext>().unwrap_or_else(|| RelayContext::new(RelayConfig::from_build_env()))
}
