use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum MutationState {
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// Observable state of one kind of write (create post, add reply, ...).
///
/// Overlapping runs are not prevented here; views check `is_pending` to
/// keep the submit control disabled.
#[derive(Clone)]
pub struct MutationTracker {
    state: Arc<RwLock<MutationState>>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MutationState::Idle)),
        }
    }

    pub async fn run<T, Fut>(&self, mutation: Fut) -> Result<T, AppError>
    where
        Fut: Future<Output = Result<T, AppError>>,
    {
        *self.state.write().await = MutationState::Pending;
        let result = mutation.await;
        *self.state.write().await = match &result {
            Ok(_) => MutationState::Succeeded,
            Err(err) => {
                debug!(code = err.code(), error = %err, "mutation failed");
                MutationState::Failed(err.user_message())
            }
        };
        result
    }

    pub async fn state(&self) -> MutationState {
        self.state.read().await.clone()
    }

    pub async fn is_pending(&self) -> bool {
        matches!(*self.state.read().await, MutationState::Pending)
    }

    pub async fn reset(&self) {
        *self.state.write().await = MutationState::Idle;
    }
}

impl Default for MutationTracker {
    fn default() -> Self {
        Self::new()
    }
}
