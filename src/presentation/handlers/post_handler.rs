use crate::{
    application::services::{MutationState, MutationTracker, PostService},
    domain::value_objects::PrincipalId,
    infrastructure::cache::QueryState,
    presentation::dto::{
        Validate,
        post_dto::{AddReplyRequest, CreatePostRequest, GetPostsRequest, PostResponse},
    },
    shared::error::AppError,
};
use chrono::Utc;
use std::sync::Arc;

pub struct PostHandler {
    post_service: Arc<PostService>,
    create_post: MutationTracker,
    add_reply: MutationTracker,
}

impl PostHandler {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self {
            post_service,
            create_post: MutationTracker::new(),
            add_reply: MutationTracker::new(),
        }
    }

    pub async fn get_posts(
        &self,
        request: GetPostsRequest,
    ) -> Result<QueryState<Vec<PostResponse>>, AppError> {
        let posts = match request.author {
            Some(author) => {
                let author = PrincipalId::parse(&author).map_err(AppError::InvalidPrincipal)?;
                self.post_service.get_posts_by_author(&author).await
            }
            None => self.post_service.get_all_posts().await,
        };

        let now = Utc::now();
        Ok(posts.map(|posts| {
            posts
                .into_iter()
                .map(|post| PostResponse::from_post(post, now))
                .collect()
        }))
    }

    pub async fn create_post(&self, request: CreatePostRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.create_post
            .run(self.post_service.create_post(&request.content))
            .await
    }

    pub async fn add_reply(&self, request: AddReplyRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.add_reply
            .run(self.post_service.add_reply(request.post_id, &request.content))
            .await
    }

    pub async fn create_post_state(&self) -> MutationState {
        self.create_post.state().await
    }

    pub async fn add_reply_state(&self) -> MutationState {
        self.add_reply.state().await
    }
}
