use super::query_gate::QueryGate;
use crate::domain::entities::UserRole;
use crate::domain::value_objects::PrincipalId;
use crate::shared::error::AppError;
use tracing::{info, warn};

/// Pass-through access to the actor's role surface. Nothing here is cached.
pub struct RoleService {
    gate: QueryGate,
}

impl RoleService {
    pub fn new(gate: QueryGate) -> Self {
        Self { gate }
    }

    pub async fn get_caller_role(&self) -> Result<UserRole, AppError> {
        let actor = self.gate.require_actor().await?;
        actor.get_caller_user_role().await
    }

    pub async fn is_caller_admin(&self) -> Result<bool, AppError> {
        let actor = self.gate.require_actor().await?;
        actor.is_caller_admin().await
    }

    pub async fn assign_role(&self, user: &PrincipalId, role: UserRole) -> Result<(), AppError> {
        if self.gate.active_principal().is_none() {
            return Err(AppError::Unauthorized(
                "Sign in to manage roles".to_string(),
            ));
        }
        let actor = self.gate.require_actor().await?;

        actor
            .assign_caller_user_role(user, role)
            .await
            .map_err(|err| {
                warn!(user = %user, %role, error = %err, "assign role failed");
                err
            })?;
        info!(user = %user, %role, "role assigned");
        Ok(())
    }
}
