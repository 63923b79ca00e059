use crate::domain::entities::{Post, Profile, ProfileDraft, UserRole};
use crate::domain::value_objects::PrincipalId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Remote procedure calls exposed by the backend actor.
///
/// Implementations authenticate as whatever identity they were built with;
/// the `caller` methods act on that identity.
#[async_trait]
pub trait ActorClient: Send + Sync {
    async fn get_all_posts(&self) -> Result<Vec<Post>, AppError>;
    async fn create_post(&self, content: &str) -> Result<(), AppError>;
    async fn add_reply(&self, post_id: u64, content: &str) -> Result<(), AppError>;

    async fn get_caller_user_profile(&self) -> Result<Option<Profile>, AppError>;
    async fn get_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError>;
    async fn get_user_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError>;
    async fn create_profile(&self, draft: &ProfileDraft) -> Result<(), AppError>;
    async fn update_profile(&self, draft: &ProfileDraft) -> Result<(), AppError>;
    async fn save_caller_user_profile(&self, draft: &ProfileDraft) -> Result<(), AppError>;
    async fn find_profiles_by_interests(
        &self,
        interests: &[String],
    ) -> Result<Vec<Profile>, AppError>;

    async fn get_caller_user_role(&self) -> Result<UserRole, AppError>;
    async fn is_caller_admin(&self) -> Result<bool, AppError>;
    async fn assign_caller_user_role(
        &self,
        user: &PrincipalId,
        role: UserRole,
    ) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorStatus {
    Disconnected,
    Connecting,
    Ready,
}

enum ActorSlot {
    Disconnected,
    Connecting,
    Ready(Arc<dyn ActorClient>),
}

/// Holds the actor handle while it is being (re)built for a new identity.
#[derive(Clone)]
pub struct ActorConnection {
    slot: Arc<RwLock<ActorSlot>>,
}

impl ActorConnection {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(ActorSlot::Disconnected)),
        }
    }

    pub fn ready(client: Arc<dyn ActorClient>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(ActorSlot::Ready(client))),
        }
    }

    pub async fn begin_connect(&self) {
        *self.slot.write().await = ActorSlot::Connecting;
    }

    pub async fn set_ready(&self, client: Arc<dyn ActorClient>) {
        *self.slot.write().await = ActorSlot::Ready(client);
    }

    pub async fn disconnect(&self) {
        *self.slot.write().await = ActorSlot::Disconnected;
    }

    /// The handle, only once it is fully built.
    pub async fn client(&self) -> Option<Arc<dyn ActorClient>> {
        match &*self.slot.read().await {
            ActorSlot::Ready(client) => Some(Arc::clone(client)),
            _ => None,
        }
    }

    pub async fn status(&self) -> ActorStatus {
        match &*self.slot.read().await {
            ActorSlot::Disconnected => ActorStatus::Disconnected,
            ActorSlot::Connecting => ActorStatus::Connecting,
            ActorSlot::Ready(_) => ActorStatus::Ready,
        }
    }
}

impl Default for ActorConnection {
    fn default() -> Self {
        Self::new()
    }
}
