use super::Validate;
use crate::domain::entities::UserRole;
use crate::domain::value_objects::PrincipalId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    pub user: String,
    pub role: UserRole,
}

impl Validate for AssignRoleRequest {
    fn validate(&self) -> Result<(), String> {
        PrincipalId::parse(&self.user).map(|_| ())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoleResponse {
    pub role: UserRole,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_role_request_needs_valid_principal() {
        let request: AssignRoleRequest =
            serde_json::from_str(r#"{ "user": "2vxsx-fae", "role": "admin" }"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.role, UserRole::Admin);

        let bad = AssignRoleRequest {
            user: "nope".into(),
            role: UserRole::User,
        };
        assert!(bad.validate().is_err());
    }
}
