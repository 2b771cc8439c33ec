//! HTTP client for the transactional email provider.
//!
//! This module provides a synchronous client for a Resend-compatible `/emails`
//! endpoint that can be used from async contexts via `tokio::task::spawn_blocking`.
//! Provider status codes are mapped onto [`DispatchError`] variants so the
//! contact pipeline can classify failures without parsing English text.

mod async_wrapper;
pub mod templates;

pub use async_wrapper::{AsyncResendDispatcher, EmailDispatcher};

use crate::config::Config;
use crate::error::{DispatchError, DispatchResult};
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// An email ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Successful send response.
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Error body returned by the provider on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// HTTP client for the email provider.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the provider API
    base_url: String,

    /// API key sent as a bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.http_timeout())
            .build();

        Self {
            base_url: config.email_api_url.clone(),
            api_key: config.resend_api_key.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Replace the agent with one using `timeout` for each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = Arc::new(ureq::AgentBuilder::new().timeout(timeout).build());
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute an authenticated POST with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, DispatchError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Map a ureq error to a DispatchError.
    fn map_error(&self, error: ureq::Error) -> DispatchError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = Self::provider_message(&body);

                match code {
                    401 => DispatchError::Unauthorized(message),
                    403 => DispatchError::Forbidden(message),
                    422 => DispatchError::InvalidRequest(message),
                    429 => DispatchError::RateLimitExceeded(message),
                    _ => DispatchError::ProviderError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    DispatchError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    DispatchError::Timeout
                } else {
                    DispatchError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Extract the provider's `message` field, falling back to the raw body.
    fn provider_message(body: &str) -> String {
        match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(ProviderErrorBody {
                message: Some(message),
                ..
            }) => message,
            Ok(ProviderErrorBody {
                name: Some(name), ..
            }) => name,
            _ if body.trim().is_empty() => "Unknown error".to_string(),
            _ => body.trim().to_string(),
        }
    }

    /// Send one email and return the provider's message id.
    pub fn send(&self, message: &EmailMessage) -> DispatchResult<String> {
        let body = serde_json::to_value(message).map_err(DispatchError::JsonError)?;
        let response = self.post("/emails", &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                    DispatchError::Timeout
                }
                _ => DispatchError::HttpError(e.to_string()),
            })?;

        let sent: SendEmailResponse =
            serde_json::from_str(&response_body).map_err(DispatchError::JsonError)?;
        Ok(sent.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_slashes() {
        let client =
            ResendClient::with_base_url("https://api.resend.com/".to_string(), "key".to_string());
        assert_eq!(client.build_url("/emails"), "https://api.resend.com/emails");
    }

    #[test]
    fn test_provider_message_extraction() {
        assert_eq!(
            ResendClient::provider_message(r#"{"statusCode":403,"message":"The example.com domain is not verified","name":"validation_error"}"#),
            "The example.com domain is not verified"
        );
        assert_eq!(
            ResendClient::provider_message(r#"{"name":"rate_limit_exceeded"}"#),
            "rate_limit_exceeded"
        );
        assert_eq!(ResendClient::provider_message("Bad gateway"), "Bad gateway");
        assert_eq!(ResendClient::provider_message(""), "Unknown error");
    }

    #[test]
    fn test_message_serialization_omits_missing_reply_to() {
        let message = EmailMessage {
            from: "site@example.com".to_string(),
            to: vec!["jane@example.com".to_string()],
            subject: "Hello".to_string(),
            html: "<p>Hello</p>".to_string(),
            text: "Hello".to_string(),
            reply_to: None,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("reply_to").is_none());
        assert_eq!(json["to"][0], "jane@example.com");
    }
}
