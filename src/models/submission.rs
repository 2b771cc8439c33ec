//! Dispatch outcomes and the aggregate result of a contact submission.

use crate::domain::EmailAddress;
use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response window promised when the internal notification went out.
pub const RESPONSE_WINDOW: &str = "24-48 hours";

/// Response window promised when the internal notification failed.
pub const DELAYED_RESPONSE_WINDOW: &str = "48-72 hours (delayed)";

/// Why a single email dispatch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClassification {
    /// Provider misconfiguration: API key, unverified sending domain.
    Configuration,
    /// Transient throttling or exhausted quota.
    RateLimit,
    /// The provider rejected the recipient or payload.
    Validation,
    /// Anything else, including timeouts.
    Service,
}

impl ErrorClassification {
    /// Classify a provider error message by keyword.
    ///
    /// Matching is case-sensitive and checked in this order: `API key`,
    /// `domain`/`verify`, `rate limit`/`quota`, `invalid email`/`recipient`.
    pub fn from_message(message: &str) -> Self {
        if message.contains("API key") || message.contains("domain") || message.contains("verify")
        {
            Self::Configuration
        } else if message.contains("rate limit") || message.contains("quota") {
            Self::RateLimit
        } else if message.contains("invalid email") || message.contains("recipient") {
            Self::Validation
        } else {
            Self::Service
        }
    }

    /// Classify a dispatch error, preferring the provider status mapping and
    /// falling back to keyword matching on the message.
    pub fn from_dispatch_error(error: &DispatchError) -> Self {
        match error {
            DispatchError::Unauthorized(_) | DispatchError::Forbidden(_) => Self::Configuration,
            DispatchError::RateLimitExceeded(_) => Self::RateLimit,
            DispatchError::InvalidRequest(_) => Self::Validation,
            DispatchError::Timeout => Self::Service,
            DispatchError::ProviderError { message, .. } => Self::from_message(message),
            DispatchError::HttpError(message) | DispatchError::Other(message) => {
                Self::from_message(message)
            }
            DispatchError::JsonError(_) => Self::Service,
        }
    }

    /// Anything but `Service` says something concrete about the failure.
    pub fn is_specific(&self) -> bool {
        !matches!(self, Self::Service)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::RateLimit => "rate_limit",
            Self::Validation => "validation",
            Self::Service => "service",
        }
    }

    /// Message safe to show to the person who submitted the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Configuration => {
                "Our email service is temporarily unavailable due to a configuration problem."
            }
            Self::RateLimit => {
                "We're receiving an unusually high number of messages. Please try again in a few minutes."
            }
            Self::Validation => {
                "We couldn't deliver email to the address you provided. Please check it and try again."
            }
            Self::Service => "A temporary problem with our email service interrupted delivery.",
        }
    }
}

impl fmt::Display for ErrorClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two contact emails a dispatch was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Alert to the site owner with the full request.
    Notification,
    /// Acknowledgment sent to the requester.
    AutoReply,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notification => f.write_str("notification"),
            Self::AutoReply => f.write_str("auto_reply"),
        }
    }
}

/// Details of a failed dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchFailure {
    pub classification: ErrorClassification,
    /// User-facing text.
    pub message: String,
    /// Provider error text. For logs only, never returned to the user.
    #[serde(skip)]
    pub technical: String,
}

impl DispatchFailure {
    pub fn from_error(error: &DispatchError) -> Self {
        let classification = ErrorClassification::from_dispatch_error(error);
        Self {
            classification,
            message: classification.user_message().to_string(),
            technical: error.to_string(),
        }
    }
}

/// Result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent { message_id: String },
    Failed(DispatchFailure),
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    pub fn failure(&self) -> Option<&DispatchFailure> {
        match self {
            Self::Sent { .. } => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// A single field-level validation error, `field` being the dot-joined path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Aggregate outcome of a contact submission, returned to the caller.
///
/// Built only through the constructors below, which keep `warning` empty
/// whenever `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_response: Option<String>,
}

impl SubmissionResult {
    /// Input was rejected before any dispatch.
    pub fn validation_failed(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: "Please correct the highlighted fields and try again.".to_string(),
            warning: None,
            errors: Some(errors),
            error_type: None,
            expected_response: None,
        }
    }

    /// Combine the two dispatch outcomes.
    ///
    /// | notification | auto-reply | result |
    /// |---|---|---|
    /// | failed | failed | failure, surfaces the more specific classification |
    /// | failed | sent | partial success, delayed response window |
    /// | sent | failed | partial success, confirmation warning |
    /// | sent | sent | full success |
    pub fn aggregate(
        notification: &DispatchOutcome,
        auto_reply: &DispatchOutcome,
        requester: &EmailAddress,
        fallback_email: &str,
    ) -> Self {
        match (notification.failure(), auto_reply.failure()) {
            (Some(notification_failure), Some(auto_reply_failure)) => {
                let classification = if notification_failure.classification.is_specific()
                    || !auto_reply_failure.classification.is_specific()
                {
                    notification_failure.classification
                } else {
                    auto_reply_failure.classification
                };
                Self {
                    success: false,
                    message: format!(
                        "Sorry, your inquiry could not be delivered and no retry was attempted. {} Please email us directly at {}.",
                        classification.user_message(),
                        fallback_email
                    ),
                    warning: None,
                    errors: None,
                    error_type: Some(classification),
                    expected_response: None,
                }
            }
            (Some(_), None) => Self {
                success: true,
                message: "Your inquiry has been received, but our internal alert failed, so we may respond later than usual.".to_string(),
                warning: Some(format!(
                    "Our team was not notified automatically. If you haven't heard back within 72 hours, please email {}.",
                    fallback_email
                )),
                errors: None,
                error_type: None,
                expected_response: Some(DELAYED_RESPONSE_WINDOW.to_string()),
            },
            (None, Some(_)) => Self {
                success: true,
                message: "Your inquiry was submitted successfully.".to_string(),
                warning: Some(format!(
                    "We couldn't send a confirmation email to {}. Your request was still received.",
                    requester
                )),
                errors: None,
                error_type: None,
                expected_response: Some(RESPONSE_WINDOW.to_string()),
            },
            (None, None) => Self {
                success: true,
                message: format!(
                    "Thank you for your inquiry! We've received your message and will respond within {}.",
                    RESPONSE_WINDOW
                ),
                warning: None,
                errors: None,
                error_type: None,
                expected_response: Some(RESPONSE_WINDOW.to_string()),
            },
        }
    }
}
