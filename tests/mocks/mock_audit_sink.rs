use async_trait::async_trait;
use portfolio_mcp_server::audit::{AuditSink, FailureRecord};
use portfolio_mcp_server::error::{AuditError, AuditResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock audit sink that keeps every record it is given.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAuditSink {
    records: Arc<Mutex<Vec<FailureRecord>>>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that records the attempt but reports itself unavailable.
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.unavailable.store(true, Ordering::SeqCst);
        sink
    }

    pub fn records(&self) -> Vec<FailureRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl AuditSink for MockAuditSink {
    async fn record_failure(&self, record: &FailureRecord) -> AuditResult<()> {
        self.records.lock().unwrap().push(record.clone());

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuditError::Unavailable("audit store offline".to_string()));
        }
        Ok(())
    }
}
