use crate::application::ports::{ActorClient, ActorConnection};
use crate::application::services::QueryGate;
use crate::domain::entities::{Post, Profile, ProfileDraft, UserRole};
use crate::domain::value_objects::{PrincipalId, Timestamp};
use crate::infrastructure::cache::QueryCache;
use crate::infrastructure::identity::SessionIdentity;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Actor {}

    #[async_trait]
    impl ActorClient for Actor {
        async fn get_all_posts(&self) -> Result<Vec<Post>, AppError>;
        async fn create_post(&self, content: &str) -> Result<(), AppError>;
        async fn add_reply(&self, post_id: u64, content: &str) -> Result<(), AppError>;
        async fn get_caller_user_profile(&self) -> Result<Option<Profile>, AppError>;
        async fn get_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError>;
        async fn get_user_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError>;
        async fn create_profile(&self, draft: &ProfileDraft) -> Result<(), AppError>;
        async fn update_profile(&self, draft: &ProfileDraft) -> Result<(), AppError>;
        async fn save_caller_user_profile(&self, draft: &ProfileDraft) -> Result<(), AppError>;
        async fn find_profiles_by_interests(&self, interests: &[String]) -> Result<Vec<Profile>, AppError>;
        async fn get_caller_user_role(&self) -> Result<UserRole, AppError>;
        async fn is_caller_admin(&self) -> Result<bool, AppError>;
        async fn assign_caller_user_role(&self, user: &PrincipalId, role: UserRole) -> Result<(), AppError>;
    }
}

pub fn test_cache() -> QueryCache {
    QueryCache::new(&AppConfig::default().cache)
}

pub fn gate_with(actor: MockActor, principal: Option<PrincipalId>) -> QueryGate {
    let connection = ActorConnection::ready(Arc::new(actor));
    QueryGate::new(connection, Arc::new(identity(principal)))
}

pub fn gate_without_actor(principal: Option<PrincipalId>) -> QueryGate {
    QueryGate::new(ActorConnection::new(), Arc::new(identity(principal)))
}

fn identity(principal: Option<PrincipalId>) -> SessionIdentity {
    match principal {
        Some(principal) => SessionIdentity::signed_in(principal),
        None => SessionIdentity::new(),
    }
}

pub fn principal(seed: u8) -> PrincipalId {
    PrincipalId::from_bytes(&[seed; 10]).unwrap()
}

pub fn post(id: u64, timestamp: u64) -> Post {
    Post::new(
        id,
        format!("post {id}"),
        principal(1),
        Timestamp::from_nanos(timestamp),
    )
}

pub fn profile(seed: u8, display_name: &str) -> Profile {
    Profile::new(principal(seed), display_name.to_string(), Timestamp::from_nanos(1))
}
