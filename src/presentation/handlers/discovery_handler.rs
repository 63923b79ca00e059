use crate::{
    application::services::DiscoveryService,
    domain::{constants::INTEREST_CATALOG, value_objects::InterestSelection},
    infrastructure::cache::QueryState,
    presentation::dto::profile_dto::{DiscoverRequest, InterestOption, ProfileResponse},
};
use std::sync::Arc;

pub struct DiscoveryHandler {
    discovery_service: Arc<DiscoveryService>,
}

impl DiscoveryHandler {
    pub fn new(discovery_service: Arc<DiscoveryService>) -> Self {
        Self { discovery_service }
    }

    /// The fixed catalog with the current selection marked.
    pub fn interest_options(&self, selection: &InterestSelection) -> Vec<InterestOption> {
        INTEREST_CATALOG
            .iter()
            .map(|name| InterestOption {
                name: name.to_string(),
                selected: selection.contains(name),
            })
            .collect()
    }

    pub async fn discover(&self, request: DiscoverRequest) -> QueryState<Vec<ProfileResponse>> {
        let selection = InterestSelection::new(&request.interests);
        self.discovery_service
            .find_by_interests(&selection)
            .await
            .map(|profiles| profiles.into_iter().map(ProfileResponse::from).collect())
    }
}
