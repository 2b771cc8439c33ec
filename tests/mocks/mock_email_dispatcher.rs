use async_trait::async_trait;
use portfolio_mcp_server::email::{EmailDispatcher, EmailMessage};
use portfolio_mcp_server::error::{DispatchError, DispatchResult};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Script = Result<String, DispatchError>;

/// Mock dispatcher with per-recipient scripted outcomes.
///
/// Unscripted sends succeed with a generated id. Every message is recorded.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailDispatcher {
    scripts: Arc<Mutex<HashMap<String, VecDeque<Script>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

#[allow(dead_code)]
impl MockEmailDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome for the next send to `recipient`.
    pub fn script(&self, recipient: &str, outcome: Script) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts
            .entry(recipient.to_string())
            .or_default()
            .push_back(outcome);
    }

    pub fn fail_for(&self, recipient: &str, error: DispatchError) {
        self.script(recipient, Err(error));
    }

    /// Sleep before answering sends to `recipient`.
    pub fn delay_for(&self, recipient: &str, delay: Duration) {
        let mut delays = self.delays.lock().unwrap();
        delays.insert(recipient.to_string(), delay);
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn calls_to(&self, recipient: &str) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.to.iter().any(|to| to == recipient))
            .count()
    }
}

#[async_trait]
impl EmailDispatcher for MockEmailDispatcher {
    async fn send(&self, message: &EmailMessage) -> DispatchResult<String> {
        let recipient = message.to.first().cloned().unwrap_or_default();
        let index = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(message.clone());
            sent.len()
        };

        let delay = self.delays.lock().unwrap().get(&recipient).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = {
            let mut scripts = self.scripts.lock().unwrap();
            scripts.get_mut(&recipient).and_then(VecDeque::pop_front)
        };

        scripted.unwrap_or_else(|| Ok(format!("msg_{}", index)))
    }
}
