use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, oneshot};
use tribes_lib::domain::entities::{Post, Profile, ProfileDraft, Reply, UserRole};
use tribes_lib::domain::value_objects::{PrincipalId, Timestamp};
use tribes_lib::{ActorClient, AppError};

#[derive(Default)]
struct BackendState {
    posts: Vec<Post>,
    profiles: HashMap<PrincipalId, Profile>,
    roles: HashMap<PrincipalId, UserRole>,
    next_post_id: u64,
    clock: u64,
}

impl BackendState {
    fn tick(&mut self) -> Timestamp {
        self.clock += 1_000;
        Timestamp::from_nanos(self.clock)
    }
}

/// In-memory stand-in for the remote actor, shared by every handle built
/// from it so that sessions see each other's writes.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<RwLock<BackendState>>,
    calls: Arc<RwLock<HashMap<&'static str, usize>>>,
    failing_methods: Arc<RwLock<HashSet<&'static str>>>,
    failing_profiles: Arc<RwLock<HashSet<PrincipalId>>>,
    held_feed_read: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actor handle authenticated as `caller` (anonymous when `None`).
    pub fn actor(&self, caller: Option<PrincipalId>) -> Arc<FakeActor> {
        Arc::new(FakeActor {
            backend: self.clone(),
            caller: caller.unwrap_or_else(PrincipalId::anonymous),
        })
    }

    pub async fn seed_post(&self, author: PrincipalId, content: &str, timestamp: u64) -> u64 {
        let mut state = self.state.write().await;
        state.next_post_id += 1;
        let id = state.next_post_id;
        state.clock = state.clock.max(timestamp);
        state.posts.push(Post::new(
            id,
            content.to_string(),
            author,
            Timestamp::from_nanos(timestamp),
        ));
        id
    }

    pub async fn seed_profile(&self, profile: Profile) {
        let mut state = self.state.write().await;
        state.profiles.insert(profile.id.clone(), profile);
    }

    pub async fn grant_role(&self, user: PrincipalId, role: UserRole) {
        self.state.write().await.roles.insert(user, role);
    }

    pub async fn calls(&self, method: &str) -> usize {
        self.calls.read().await.get(method).copied().unwrap_or(0)
    }

    pub async fn fail(&self, method: &'static str) {
        self.failing_methods.write().await.insert(method);
    }

    pub async fn fail_profile(&self, user: PrincipalId) {
        self.failing_profiles.write().await.insert(user);
    }

    /// The next `get_all_posts` call waits until the returned sender fires.
    pub async fn hold_next_feed_read(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.held_feed_read.lock().await = Some(rx);
        tx
    }

    async fn enter(&self, method: &'static str) -> Result<(), AppError> {
        *self.calls.write().await.entry(method).or_insert(0) += 1;
        if self.failing_methods.read().await.contains(method) {
            return Err(AppError::remote(format!("{method} rejected")));
        }
        Ok(())
    }
}

pub struct FakeActor {
    backend: FakeBackend,
    caller: PrincipalId,
}

impl FakeActor {
    fn require_signed_in(&self) -> Result<(), AppError> {
        if self.caller.is_anonymous() {
            return Err(AppError::remote("Unauthorized: please sign in"));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorClient for FakeActor {
    async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        self.backend.enter("get_all_posts").await?;
        let held = self.backend.held_feed_read.lock().await.take();
        if let Some(release) = held {
            let _ = release.await;
        }
        Ok(self.backend.state.read().await.posts.clone())
    }

    async fn create_post(&self, content: &str) -> Result<(), AppError> {
        self.backend.enter("create_post").await?;
        self.require_signed_in()?;
        let mut state = self.backend.state.write().await;
        state.next_post_id += 1;
        let id = state.next_post_id;
        let timestamp = state.tick();
        state
            .posts
            .push(Post::new(id, content.to_string(), self.caller.clone(), timestamp));
        Ok(())
    }

    async fn add_reply(&self, post_id: u64, content: &str) -> Result<(), AppError> {
        self.backend.enter("add_reply").await?;
        self.require_signed_in()?;
        let mut state = self.backend.state.write().await;
        let timestamp = state.tick();
        let post = state
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| AppError::remote("Post not found"))?;
        post.add_reply(Reply::new(content.to_string(), self.caller.clone(), timestamp));
        Ok(())
    }

    async fn get_caller_user_profile(&self) -> Result<Option<Profile>, AppError> {
        self.backend.enter("get_caller_user_profile").await?;
        Ok(self.backend.state.read().await.profiles.get(&self.caller).cloned())
    }

    async fn get_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError> {
        self.backend.enter("get_profile").await?;
        if self.backend.failing_profiles.read().await.contains(user) {
            return Err(AppError::remote("replica timeout"));
        }
        Ok(self.backend.state.read().await.profiles.get(user).cloned())
    }

    async fn get_user_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError> {
        self.backend.enter("get_user_profile").await?;
        Ok(self.backend.state.read().await.profiles.get(user).cloned())
    }

    async fn create_profile(&self, draft: &ProfileDraft) -> Result<(), AppError> {
        self.backend.enter("create_profile").await?;
        self.require_signed_in()?;
        let mut state = self.backend.state.write().await;
        if state.profiles.contains_key(&self.caller) {
            return Err(AppError::remote("Profile already exists"));
        }
        let joined = state.tick();
        let profile = Profile::new(self.caller.clone(), draft.display_name.clone(), joined)
            .with_bio(draft.bio.clone())
            .with_interests(draft.interests.clone());
        state.profiles.insert(self.caller.clone(), profile);
        Ok(())
    }

    async fn update_profile(&self, draft: &ProfileDraft) -> Result<(), AppError> {
        self.backend.enter("update_profile").await?;
        self.require_signed_in()?;
        let mut state = self.backend.state.write().await;
        let profile = state
            .profiles
            .get_mut(&self.caller)
            .ok_or_else(|| AppError::remote("User profile not found"))?;
        profile.display_name = draft.display_name.clone();
        profile.bio = draft.bio.clone();
        profile.interests = draft.interests.clone();
        Ok(())
    }

    async fn save_caller_user_profile(&self, draft: &ProfileDraft) -> Result<(), AppError> {
        self.backend.enter("save_caller_user_profile").await?;
        self.require_signed_in()?;
        let mut state = self.backend.state.write().await;
        let joined = state.tick();
        let profile = state
            .profiles
            .entry(self.caller.clone())
            .or_insert_with(|| Profile::new(self.caller.clone(), String::new(), joined));
        profile.display_name = draft.display_name.clone();
        profile.bio = draft.bio.clone();
        profile.interests = draft.interests.clone();
        Ok(())
    }

    async fn find_profiles_by_interests(
        &self,
        interests: &[String],
    ) -> Result<Vec<Profile>, AppError> {
        self.backend.enter("find_profiles_by_interests").await?;
        let state = self.backend.state.read().await;
        Ok(state
            .profiles
            .values()
            .filter(|profile| interests.iter().any(|tag| profile.has_interest(tag)))
            .cloned()
            .collect())
    }

    async fn get_caller_user_role(&self) -> Result<UserRole, AppError> {
        self.backend.enter("get_caller_user_role").await?;
        if self.caller.is_anonymous() {
            return Ok(UserRole::Guest);
        }
        let state = self.backend.state.read().await;
        Ok(state.roles.get(&self.caller).copied().unwrap_or(UserRole::User))
    }

    async fn is_caller_admin(&self) -> Result<bool, AppError> {
        Ok(self.get_caller_user_role().await? == UserRole::Admin)
    }

    async fn assign_caller_user_role(
        &self,
        user: &PrincipalId,
        role: UserRole,
    ) -> Result<(), AppError> {
        self.backend.enter("assign_caller_user_role").await?;
        let mut state = self.backend.state.write().await;
        let caller_role = state.roles.get(&self.caller).copied();
        if caller_role != Some(UserRole::Admin) {
            return Err(AppError::remote("Only admins can assign user roles"));
        }
        state.roles.insert(user.clone(), role);
        Ok(())
    }
}
