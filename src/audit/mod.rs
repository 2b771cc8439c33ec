//! Audit trail for failed contact dispatches.
//!
//! When either contact email fails, the pipeline hands a [`FailureRecord`] to
//! an [`AuditSink`]. This is a best-effort log: sink errors are reported via
//! `tracing` and otherwise ignored, and nothing is retried or queued.

use crate::domain::{EmailAddress, ServiceType};
use crate::error::AuditResult;
use crate::models::{ErrorClassification, MessageKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One email that could not be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedMessage {
    pub kind: MessageKind,
    pub classification: ErrorClassification,
    /// Provider error text.
    pub detail: String,
}

/// Structured record of a submission with at least one failed dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub requester_name: String,
    pub requester_email: EmailAddress,
    pub service_type: ServiceType,
    pub failed: Vec<FailedMessage>,
    pub timestamp: DateTime<Utc>,
}

impl FailureRecord {
    pub fn failed_kinds(&self) -> Vec<MessageKind> {
        self.failed.iter().map(|m| m.kind).collect()
    }
}

/// Destination for failure records.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record_failure(&self, record: &FailureRecord) -> AuditResult<()>;
}

/// Writes failure records as JSON to the `contact_audit` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record_failure(&self, record: &FailureRecord) -> AuditResult<()> {
        let json = serde_json::to_string(record)?;
        tracing::warn!(
            target: "contact_audit",
            service_type = %record.service_type,
            failed = record.failed.len(),
            record = %json,
            "Contact dispatch failure"
        );
        Ok(())
    }
}
