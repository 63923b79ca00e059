use crate::application::ports::{ActorClient, ActorConnection, IdentityProvider};
use crate::domain::value_objects::PrincipalId;
use crate::shared::error::AppError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    ActorNotReady,
    NoIdentity,
    MissingInput,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DisabledReason::ActorNotReady => "actor not ready",
            DisabledReason::NoIdentity => "no active identity",
            DisabledReason::MissingInput => "missing input",
        };
        f.write_str(reason)
    }
}

/// Preconditions evaluated before any read is scheduled.
///
/// A disabled read never reaches the actor; callers report it as pending.
#[derive(Clone)]
pub struct QueryGate {
    connection: ActorConnection,
    identity: Arc<dyn IdentityProvider>,
}

impl QueryGate {
    pub fn new(connection: ActorConnection, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            connection,
            identity,
        }
    }

    pub async fn actor(&self) -> Result<Arc<dyn ActorClient>, DisabledReason> {
        self.connection
            .client()
            .await
            .ok_or(DisabledReason::ActorNotReady)
    }

    /// Identity is checked before the actor so that signed-out callers are
    /// reported as such even while the handle is being rebuilt.
    pub async fn actor_for_caller(
        &self,
    ) -> Result<(Arc<dyn ActorClient>, PrincipalId), DisabledReason> {
        let principal = self
            .identity
            .active_principal()
            .ok_or(DisabledReason::NoIdentity)?;
        let actor = self.actor().await?;
        Ok((actor, principal))
    }

    /// Writes and uncached reads fail instead of waiting when the actor is missing.
    pub async fn require_actor(&self) -> Result<Arc<dyn ActorClient>, AppError> {
        self.connection
            .client()
            .await
            .ok_or(AppError::ActorUnavailable)
    }

    pub fn active_principal(&self) -> Option<PrincipalId> {
        self.identity.active_principal()
    }
}
