//! Build-time Configuration
//!
//! Message-relay credentials and timing. Defaults are compiled in; each can
//! be overridden when building with the matching `PORTFOLIO_RELAY_*`
//! environment variable.

/// EmailJS REST endpoint for sending a templated message
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_ief7rrb";
const DEFAULT_TEMPLATE_ID: &str = "template_xvy8ygd";
const DEFAULT_PUBLIC_KEY: &str = "q5Z9gPD6kKsTVd895";
const DEFAULT_RECIPIENT: &str = "Devansh Sharma";

/// How long a dispatch may stay unsettled before it is reported as failed
pub const DEFAULT_RELAY_TIMEOUT_MS: u32 = 15_000;

/// Message-relay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
    /// Name filled into the template's `to_name`
    pub recipient_name: &'static str,
    pub timeout_ms: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT,
            service_id: DEFAULT_SERVICE_ID,
            template_id: DEFAULT_TEMPLATE_ID,
            public_key: DEFAULT_PUBLIC_KEY,
            recipient_name: DEFAULT_RECIPIENT,
            timeout_ms: DEFAULT_RELAY_TIMEOUT_MS,
        }
    }
}

impl RelayConfig {
    /// Defaults with build-environment overrides applied
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: option_env!("PORTFOLIO_RELAY_ENDPOINT").unwrap_or(defaults.endpoint),
            service_id: option_env!("PORTFOLIO_RELAY_SERVICE_ID").unwrap_or(defaults.service_id),
            template_id: option_env!("PORTFOLIO_RELAY_TEMPLATE_ID").unwrap_or(defaults.template_id),
            public_key: option_env!("PORTFOLIO_RELAY_PUBLIC_KEY").unwrap_or(defaults.public_key),
            recipient_name: option_env!("PORTFOLIO_RELAY_RECIPIENT").unwrap_or(defaults.recipient_name),
            timeout_ms: option_env!("PORTFOLIO_RELAY_TIMEOUT_MS")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }
}
