use super::query_gate::QueryGate;
use crate::domain::entities::Profile;
use crate::domain::value_objects::InterestSelection;
use crate::infrastructure::cache::{QueryCache, QueryKey, QueryState};
use tracing::{debug, warn};

pub struct DiscoveryService {
    cache: QueryCache,
    gate: QueryGate,
}

impl DiscoveryService {
    pub fn new(cache: QueryCache, gate: QueryGate) -> Self {
        Self { cache, gate }
    }

    /// Profiles sharing any of the selected interests, in the order the
    /// actor returns them. An empty selection finds nothing and makes no
    /// remote call.
    pub async fn find_by_interests(&self, selection: &InterestSelection) -> QueryState<Vec<Profile>> {
        if selection.is_empty() {
            return QueryState::Resolved(Vec::new());
        }
        let epoch = self.cache.epoch().await;
        let actor = match self.gate.actor().await {
            Ok(actor) => actor,
            Err(reason) => {
                debug!(%reason, "discover read disabled");
                return QueryState::Pending;
            }
        };

        let interests = selection.as_slice().to_vec();
        self.cache
            .fetch_at(epoch, QueryKey::discover(selection), || async move {
                actor
                    .find_profiles_by_interests(&interests)
                    .await
                    .map_err(|err| {
                        warn!(interests = ?interests, error = %err, "failed to find profiles");
                        err
                    })
            })
            .await
    }
}
