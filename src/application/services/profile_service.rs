use super::query_gate::{DisabledReason, QueryGate};
use crate::domain::entities::{Profile, ProfileDraft};
use crate::domain::value_objects::PrincipalId;
use crate::infrastructure::cache::{QueryCache, QueryFilter, QueryKey, QueryNamespace, QueryState};
use crate::shared::config::ValidationConfig;
use crate::shared::error::AppError;
use crate::shared::validation::{normalize_bio, normalize_display_name, normalize_interests};
use futures::future::join_all;
use tracing::{debug, warn};

pub struct ProfileService {
    cache: QueryCache,
    gate: QueryGate,
    validation: ValidationConfig,
}

impl ProfileService {
    pub fn new(cache: QueryCache, gate: QueryGate, validation: ValidationConfig) -> Self {
        Self {
            cache,
            gate,
            validation,
        }
    }

    /// Profile of the signed-in caller. Stays pending until both an
    /// identity and a ready actor exist.
    pub async fn get_caller_profile(&self) -> QueryState<Option<Profile>> {
        let epoch = self.cache.epoch().await;
        let (actor, principal) = match self.gate.actor_for_caller().await {
            Ok(ready) => ready,
            Err(reason) => {
                debug!(%reason, "caller profile read disabled");
                return QueryState::Pending;
            }
        };

        self.cache
            .fetch_at(epoch, QueryKey::CallerProfile, || async move {
                actor.get_caller_user_profile().await.map_err(|err| {
                    warn!(principal = %principal, error = %err, "failed to fetch caller profile");
                    err
                })
            })
            .await
    }

    /// Profile for a textual principal, typically taken from a link.
    ///
    /// A key that does not parse resolves to `None` without calling the
    /// actor. Remote failures for a well-formed key settle as `Errored`.
    pub async fn get_profile(&self, raw_key: &str) -> QueryState<Option<Profile>> {
        if raw_key.trim().is_empty() {
            debug!(reason = %DisabledReason::MissingInput, "profile read disabled");
            return QueryState::Pending;
        }
        let epoch = self.cache.epoch().await;
        let actor = match self.gate.actor().await {
            Ok(actor) => actor,
            Err(reason) => {
                debug!(%reason, key = raw_key, "profile read disabled");
                return QueryState::Pending;
            }
        };

        let key = raw_key.to_string();
        self.cache
            .fetch_at(epoch, QueryKey::profile(raw_key), || async move {
                let principal = match PrincipalId::parse(&key) {
                    Ok(principal) => principal,
                    Err(err) => {
                        debug!(key = %key, error = %err, "malformed profile key");
                        return Ok(None);
                    }
                };
                actor.get_profile(&principal).await.map_err(|err| {
                    warn!(principal = %principal, error = %err, "failed to fetch profile");
                    err
                })
            })
            .await
    }

    /// Reads several profiles at once, e.g. the authors of a page of posts.
    /// Each key settles on its own; results follow the order of `raw_keys`.
    pub async fn get_profiles<S: AsRef<str>>(
        &self,
        raw_keys: &[S],
    ) -> Vec<QueryState<Option<Profile>>> {
        join_all(raw_keys.iter().map(|key| self.get_profile(key.as_ref()))).await
    }

    /// Uncached lookup used by the role surface.
    pub async fn get_user_profile(&self, user: &PrincipalId) -> Result<Option<Profile>, AppError> {
        let actor = self.gate.require_actor().await?;
        actor.get_user_profile(user).await
    }

    pub async fn create_profile(&self, draft: ProfileDraft) -> Result<(), AppError> {
        let draft = self.normalize(draft)?;
        let actor = self.gate.require_actor().await?;

        actor.create_profile(&draft).await.map_err(|err| {
            warn!(error = %err, "create profile failed");
            err
        })?;

        self.cache
            .invalidate(&[QueryFilter::Exact(QueryKey::CallerProfile)])
            .await;
        Ok(())
    }

    pub async fn update_profile(&self, draft: ProfileDraft) -> Result<(), AppError> {
        let draft = self.normalize(draft)?;
        let actor = self.gate.require_actor().await?;

        actor.update_profile(&draft).await.map_err(|err| {
            warn!(error = %err, "update profile failed");
            err
        })?;

        self.invalidate_profiles().await;
        Ok(())
    }

    pub async fn save_caller_profile(&self, draft: ProfileDraft) -> Result<(), AppError> {
        let draft = self.normalize(draft)?;
        let actor = self.gate.require_actor().await?;

        actor.save_caller_user_profile(&draft).await.map_err(|err| {
            warn!(error = %err, "save caller profile failed");
            err
        })?;

        self.invalidate_profiles().await;
        Ok(())
    }

    /// Whether `raw_key` names the signed-in caller.
    pub fn is_own_profile(&self, raw_key: &str) -> bool {
        match (self.gate.active_principal(), PrincipalId::parse(raw_key)) {
            (Some(active), Ok(viewed)) => active == viewed,
            _ => false,
        }
    }

    /// True once a signed-in caller's own profile has been fetched and is
    /// absent. Never triggers a fetch.
    pub async fn needs_profile_setup(&self) -> bool {
        if self.gate.active_principal().is_none() {
            return false;
        }
        matches!(
            self.cache.peek::<Option<Profile>>(&QueryKey::CallerProfile).await,
            Some(snapshot) if snapshot.state == QueryState::Resolved(None)
        )
    }

    async fn invalidate_profiles(&self) {
        // Any cached profile-by-key may be the caller's own.
        self.cache
            .invalidate(&[
                QueryFilter::Exact(QueryKey::CallerProfile),
                QueryFilter::Namespace(QueryNamespace::Profile),
            ])
            .await;
    }

    fn normalize(&self, draft: ProfileDraft) -> Result<ProfileDraft, AppError> {
        Ok(ProfileDraft {
            display_name: normalize_display_name(
                &draft.display_name,
                self.validation.max_display_name_chars,
            )?,
            bio: normalize_bio(Some(&draft.bio)),
            interests: normalize_interests(&draft.interests),
        })
    }
}
