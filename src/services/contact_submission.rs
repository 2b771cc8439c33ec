//! Contact form submission pipeline.
//!
//! Validate, send the internal notification and the auto-reply concurrently,
//! classify failures, record them in the audit sink, and fold everything into
//! one [`SubmissionResult`]. Each email is attempted exactly once per call.

use crate::audit::{AuditSink, FailedMessage, FailureRecord};
use crate::config::ContactSettings;
use crate::email::{templates, EmailDispatcher, EmailMessage};
use crate::error::DispatchError;
use crate::metrics::Metrics;
use crate::models::{
    ContactRequest, DispatchFailure, DispatchOutcome, FieldError, MessageKind, SubmissionResult,
};
use crate::validation::{ContactValidator, SchemaError, FORM_FIELD};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Entry point for contact form submissions.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Process raw form input. Never fails; every outcome is a result value.
    async fn submit(&self, raw: &Value) -> SubmissionResult;
}

/// Default [`SubmissionService`].
///
/// All collaborators are injected so tests can substitute doubles.
pub struct ContactSubmissionPipeline {
    validator: Arc<dyn ContactValidator>,
    dispatcher: Arc<dyn EmailDispatcher>,
    audit: Arc<dyn AuditSink>,
    settings: ContactSettings,
    metrics: Metrics,
}

impl ContactSubmissionPipeline {
    pub fn new(
        validator: Arc<dyn ContactValidator>,
        dispatcher: Arc<dyn EmailDispatcher>,
        audit: Arc<dyn AuditSink>,
        settings: ContactSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            validator,
            dispatcher,
            audit,
            settings,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// One attempt at one email, bounded by the dispatch timeout.
    async fn dispatch(&self, kind: MessageKind, message: EmailMessage) -> DispatchOutcome {
        let result =
            tokio::time::timeout(self.settings.dispatch_timeout, self.dispatcher.send(&message))
                .await
                .unwrap_or(Err(DispatchError::Timeout));

        let outcome = match result {
            Ok(message_id) => {
                debug!(kind = %kind, message_id = %message_id, "Contact email sent");
                DispatchOutcome::Sent { message_id }
            }
            Err(e) => {
                let failure = DispatchFailure::from_error(&e);
                error!(
                    kind = %kind,
                    classification = %failure.classification,
                    detail = %failure.technical,
                    "Contact email failed"
                );
                DispatchOutcome::Failed(failure)
            }
        };

        self.metrics.record_dispatch(outcome.is_sent());
        outcome
    }

    /// Hand failed dispatches to the audit sink. Sink errors are only logged.
    async fn audit_failures(
        &self,
        request: &ContactRequest,
        outcomes: [(MessageKind, &DispatchOutcome); 2],
    ) {
        let failed: Vec<FailedMessage> = outcomes
            .iter()
            .filter_map(|(kind, outcome)| {
                outcome.failure().map(|failure| FailedMessage {
                    kind: *kind,
                    classification: failure.classification,
                    detail: failure.technical.clone(),
                })
            })
            .collect();

        if failed.is_empty() {
            return;
        }

        let record = FailureRecord {
            requester_name: request.full_name(),
            requester_email: request.email().clone(),
            service_type: request.service_type(),
            failed,
            timestamp: Utc::now(),
        };

        if let Err(e) = self.audit.record_failure(&record).await {
            warn!("Failed to record contact failure: {}", e);
        }
    }

    fn rejected(&self, err: SchemaError) -> SubmissionResult {
        if let SchemaError::Internal(detail) = &err {
            error!(detail = %detail, "Contact validator failed");
        }
        self.metrics.record_validation_failure();

        let mut errors = err.into_field_errors();
        if errors.is_empty() {
            errors.push(FieldError {
                field: FORM_FIELD.to_string(),
                message: "Please review the form and try again.".to_string(),
            });
        }
        SubmissionResult::validation_failed(errors)
    }
}

#[async_trait]
impl SubmissionService for ContactSubmissionPipeline {
    async fn submit(&self, raw: &Value) -> SubmissionResult {
        self.metrics.record_submission();

        let request = match self.validator.parse(raw) {
            Ok(request) => request,
            Err(err) => return self.rejected(err),
        };

        info!(
            service_type = %request.service_type(),
            "Processing contact submission"
        );

        let notification_message =
            templates::internal_notification(&request, &self.settings, Utc::now());
        let auto_reply_message = templates::auto_reply(&request, &self.settings);

        let (notification, auto_reply) = tokio::join!(
            self.dispatch(MessageKind::Notification, notification_message),
            self.dispatch(MessageKind::AutoReply, auto_reply_message),
        );

        self.audit_failures(
            &request,
            [
                (MessageKind::Notification, &notification),
                (MessageKind::AutoReply, &auto_reply),
            ],
        )
        .await;

        let result = SubmissionResult::aggregate(
            &notification,
            &auto_reply,
            request.email(),
            self.settings.fallback_email.as_str(),
        );

        match (notification.is_sent(), auto_reply.is_sent()) {
            (true, true) => info!("Contact submission delivered"),
            (false, false) => {
                self.metrics.record_full_failure();
                warn!(error_type = ?result.error_type, "Contact submission failed");
            }
            _ => {
                self.metrics.record_partial_success();
                warn!(
                    notification_sent = notification.is_sent(),
                    auto_reply_sent = auto_reply.is_sent(),
                    "Contact submission partially delivered"
                );
            }
        }

        result
    }
}
