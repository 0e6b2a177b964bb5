//! Message Relay
//!
//! Outbound binding to the third-party email relay (EmailJS REST API).

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

/// Validated contents of the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("relay did not answer in time")]
    TimedOut,
}

/// Anything that can deliver a contact message
#[async_trait(?Send)]
pub trait MessageRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

// ========================
// Request Payload
// ========================

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
    pub to_name: &'a str,
    pub reply_to: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                message: &message.message,
                to_name: config.recipient_name,
                reply_to: &message.email,
            },
        }
    }
}

// ========================
// EmailJS Client
// ========================

/// Relay backed by the EmailJS `email/send` endpoint
#[derive(Debug, Clone)]
pub struct EmailRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }
}

#[async_trait(?Send)]
impl MessageRelay for EmailRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let body = SendRequest::new(&self.config, message);
        let response = self
            .client
            .post(self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            log::info!("[relay] message from {} accepted", message.email);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status: status.as_u16(), body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let config = RelayConfig::default();
        let message = sample();
        let value = serde_json::to_value(SendRequest::new(&config, &message)).unwrap();

        assert_eq!(value["service_id"], config.service_id);
        assert_eq!(value["template_id"], config.template_id);
        assert_eq!(value["user_id"], config.public_key);

        let params = &value["template_params"];
        assert_eq!(params["from_name"], "Ada");
        assert_eq!(params["from_email"], "ada@example.com");
        assert_eq!(params["message"], "Hello there");
        assert_eq!(params["to_name"], config.recipient_name);
        assert_eq!(params["reply_to"], "ada@example.com");
    }

    #[test]
    fn test_error_messages() {
        let rejected = RelayError::Rejected { status: 400, body: "bad template".to_string() };
        assert_eq!(rejected.to_string(), "relay rejected message (400): bad template");
        assert_eq!(RelayError::TimedOut.to_string(), "relay did not answer in time");
    }
}
