//! Async dispatch seam around the synchronous ResendClient.
//!
//! The contact pipeline talks to [`EmailDispatcher`] only. The production
//! implementation runs the blocking `ureq` call on tokio's blocking pool so
//! the two contact emails can be in flight at the same time.

use super::{EmailMessage, ResendClient};
use crate::error::{DispatchError, DispatchResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends a single email and returns the provider's message id.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> DispatchResult<String>;
}

/// [`EmailDispatcher`] backed by a [`ResendClient`].
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncResendDispatcher {
    client: Arc<ResendClient>,
}

impl AsyncResendDispatcher {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailDispatcher for AsyncResendDispatcher {
    async fn send(&self, message: &EmailMessage) -> DispatchResult<String> {
        let client = self.client.clone();
        let message = message.clone();

        tokio::task::spawn_blocking(move || client.send(&message))
            .await
            .map_err(|e| DispatchError::Other(format!("Task join error: {}", e)))?
    }
}
