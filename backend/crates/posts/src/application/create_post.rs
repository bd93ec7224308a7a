//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{post_body::PostBody, post_title::PostTitle};
use crate::error::{PostError, PostResult};

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
}

pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a post owned by `caller`
    pub async fn execute(&self, caller: UserId, input: CreatePostInput) -> PostResult<Post> {
        let title = PostTitle::new(input.title).map_err(PostError::Validation)?;
        let body = PostBody::new(input.body).map_err(PostError::Validation)?;

        let post = Post::new(caller, title, body);
        self.repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, owner_id = %caller, "Post created");

        Ok(post)
    }
}
