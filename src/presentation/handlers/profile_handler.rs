use crate::{
    application::services::{MutationState, MutationTracker, ProfileService},
    domain::value_objects::PrincipalId,
    infrastructure::cache::QueryState,
    presentation::dto::{
        Validate,
        profile_dto::{ProfileRequest, ProfileResponse},
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct ProfileHandler {
    profile_service: Arc<ProfileService>,
    save_profile: MutationTracker,
}

impl ProfileHandler {
    pub fn new(profile_service: Arc<ProfileService>) -> Self {
        Self {
            profile_service,
            save_profile: MutationTracker::new(),
        }
    }

    pub async fn get_caller_profile(&self) -> QueryState<Option<ProfileResponse>> {
        self.profile_service
            .get_caller_profile()
            .await
            .map(|profile| profile.map(ProfileResponse::from))
    }

    pub async fn get_profile(&self, raw_key: &str) -> QueryState<Option<ProfileResponse>> {
        self.profile_service
            .get_profile(raw_key)
            .await
            .map(|profile| profile.map(ProfileResponse::from))
    }

    pub async fn get_profiles(&self, raw_keys: &[String]) -> Vec<QueryState<Option<ProfileResponse>>> {
        self.profile_service
            .get_profiles(raw_keys)
            .await
            .into_iter()
            .map(|state| state.map(|profile| profile.map(ProfileResponse::from)))
            .collect()
    }

    pub async fn get_user_profile(&self, user: &str) -> Result<Option<ProfileResponse>, AppError> {
        let user = PrincipalId::parse(user).map_err(AppError::InvalidPrincipal)?;
        let profile = self.profile_service.get_user_profile(&user).await?;
        Ok(profile.map(ProfileResponse::from))
    }

    pub async fn create_profile(&self, request: ProfileRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.save_profile
            .run(self.profile_service.create_profile(request.into()))
            .await
    }

    pub async fn update_profile(&self, request: ProfileRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.save_profile
            .run(self.profile_service.update_profile(request.into()))
            .await
    }

    pub async fn save_caller_profile(&self, request: ProfileRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.save_profile
            .run(self.profile_service.save_caller_profile(request.into()))
            .await
    }

    pub async fn save_profile_state(&self) -> MutationState {
        self.save_profile.state().await
    }

    pub fn is_own_profile(&self, raw_key: &str) -> bool {
        self.profile_service.is_own_profile(raw_key)
    }

    pub async fn needs_profile_setup(&self) -> bool {
        self.profile_service.needs_profile_setup().await
    }
}
