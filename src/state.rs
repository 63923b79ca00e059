use crate::application::ports::{ActorClient, ActorConnection, ActorStatus, IdentityProvider};
use crate::application::services::{
    DiscoveryService, PostService, ProfileService, QueryGate, RoleService,
};
use crate::domain::value_objects::PrincipalId;
use crate::infrastructure::cache::QueryCache;
use crate::infrastructure::identity::SessionIdentity;
use crate::presentation::handlers::{DiscoveryHandler, PostHandler, ProfileHandler, RoleHandler};
use crate::shared::config::AppConfig;
use std::sync::Arc;
use tracing::info;

/// Everything a view needs, wired once and passed around explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub cache: QueryCache,
    pub connection: ActorConnection,
    pub identity: SessionIdentity,
    pub post_handler: Arc<PostHandler>,
    pub profile_handler: Arc<ProfileHandler>,
    pub discovery_handler: Arc<DiscoveryHandler>,
    pub role_handler: Arc<RoleHandler>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

        let cache = QueryCache::new(&config.cache);
        let connection = ActorConnection::new();
        let identity = SessionIdentity::new();
        let gate = QueryGate::new(connection.clone(), Arc::new(identity.clone()));

        let post_service = Arc::new(PostService::new(
            cache.clone(),
            gate.clone(),
            config.validation.clone(),
        ));
        let profile_service = Arc::new(ProfileService::new(
            cache.clone(),
            gate.clone(),
            config.validation.clone(),
        ));
        let discovery_service = Arc::new(DiscoveryService::new(cache.clone(), gate.clone()));
        let role_service = Arc::new(RoleService::new(gate));

        Ok(Self {
            config,
            cache,
            connection,
            identity,
            post_handler: Arc::new(PostHandler::new(post_service)),
            profile_handler: Arc::new(ProfileHandler::new(profile_service)),
            discovery_handler: Arc::new(DiscoveryHandler::new(discovery_service)),
            role_handler: Arc::new(RoleHandler::new(role_service)),
        })
    }

    /// Installs an actor handle without an identity (anonymous browsing).
    pub async fn connect_actor(&self, actor: Arc<dyn ActorClient>) {
        self.connection.set_ready(actor).await;
        info!("actor connected");
    }

    /// Starts a session. The actor must already be built for `principal`;
    /// nothing cached under the previous identity survives.
    ///
    /// The old actor and identity are retired before the cache is cleared,
    /// so a read that resolved them has an epoch older than the clear.
    pub async fn sign_in(&self, principal: PrincipalId, actor: Arc<dyn ActorClient>) {
        self.connection.begin_connect().await;
        self.identity.sign_in(principal.clone());
        self.cache.clear().await;
        self.connection.set_ready(actor).await;
        info!(principal = %principal, "signed in");
    }

    /// Ends the session and drops every cached query.
    pub async fn sign_out(&self) {
        self.connection.disconnect().await;
        self.identity.sign_out();
        self.cache.clear().await;
        info!("signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    pub async fn actor_status(&self) -> ActorStatus {
        self.connection.status().await
    }
}
