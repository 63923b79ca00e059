pub mod post_dto;
pub mod profile_dto;
pub mod role_dto;

/// Cheap shape checks run by handlers before a service call.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
