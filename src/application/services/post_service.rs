use super::query_gate::QueryGate;
use crate::domain::entities::{Post, sort_newest_first};
use crate::domain::value_objects::PrincipalId;
use crate::infrastructure::cache::{QueryCache, QueryFilter, QueryKey, QueryState};
use crate::shared::config::ValidationConfig;
use crate::shared::error::AppError;
use crate::shared::validation::normalize_content;
use tracing::{debug, warn};

pub struct PostService {
    cache: QueryCache,
    gate: QueryGate,
    validation: ValidationConfig,
}

impl PostService {
    pub fn new(cache: QueryCache, gate: QueryGate, validation: ValidationConfig) -> Self {
        Self {
            cache,
            gate,
            validation,
        }
    }

    /// Feed read, newest first.
    ///
    /// A remote failure settles as `Errored`; views that want the literal
    /// "empty on failure" behaviour use `QueryState::data_or_default`.
    pub async fn get_all_posts(&self) -> QueryState<Vec<Post>> {
        let epoch = self.cache.epoch().await;
        let actor = match self.gate.actor().await {
            Ok(actor) => actor,
            Err(reason) => {
                debug!(%reason, "all-posts read disabled");
                return QueryState::Pending;
            }
        };

        self.cache
            .fetch_at(epoch, QueryKey::AllPosts, || async move {
                let mut posts = actor.get_all_posts().await.map_err(|err| {
                    warn!(error = %err, "failed to fetch posts");
                    err
                })?;
                sort_newest_first(&mut posts);
                Ok::<_, AppError>(posts)
            })
            .await
    }

    /// Posts written by `author`, filtered from the feed entry.
    pub async fn get_posts_by_author(&self, author: &PrincipalId) -> QueryState<Vec<Post>> {
        self.get_all_posts().await.map(|posts| {
            posts
                .into_iter()
                .filter(|post| post.is_authored_by(author))
                .collect()
        })
    }

    pub async fn create_post(&self, content: &str) -> Result<(), AppError> {
        let content = normalize_content(content, self.validation.max_content_chars)?;
        let actor = self.gate.require_actor().await?;

        actor.create_post(&content).await.map_err(|err| {
            warn!(error = %err, "create post failed");
            err
        })?;

        self.cache
            .invalidate(&[QueryFilter::Exact(QueryKey::AllPosts)])
            .await;
        Ok(())
    }

    pub async fn add_reply(&self, post_id: u64, content: &str) -> Result<(), AppError> {
        let content = normalize_content(content, self.validation.max_content_chars)?;
        let actor = self.gate.require_actor().await?;

        actor.add_reply(post_id, &content).await.map_err(|err| {
            warn!(post_id, error = %err, "add reply failed");
            err
        })?;

        self.cache
            .invalidate(&[QueryFilter::Exact(QueryKey::AllPosts)])
            .await;
        Ok(())
    }
}
