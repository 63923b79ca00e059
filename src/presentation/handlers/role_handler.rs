use crate::{
    application::services::{MutationTracker, RoleService},
    domain::value_objects::PrincipalId,
    presentation::dto::{
        Validate,
        role_dto::{AssignRoleRequest, RoleResponse},
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct RoleHandler {
    role_service: Arc<RoleService>,
    assign_role: MutationTracker,
}

impl RoleHandler {
    pub fn new(role_service: Arc<RoleService>) -> Self {
        Self {
            role_service,
            assign_role: MutationTracker::new(),
        }
    }

    pub async fn get_caller_role(&self) -> Result<RoleResponse, AppError> {
        let role = self.role_service.get_caller_role().await?;
        let is_admin = self.role_service.is_caller_admin().await?;
        Ok(RoleResponse { role, is_admin })
    }

    pub async fn assign_role(&self, request: AssignRoleRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidPrincipal)?;
        let user = PrincipalId::parse(&request.user).map_err(AppError::InvalidPrincipal)?;

        self.assign_role
            .run(self.role_service.assign_role(&user, request.role))
            .await
    }
}
