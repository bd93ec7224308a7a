//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::domain::services::load_owned;
use crate::error::{PostError, PostResult};

pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, post_id: PostId) -> PostResult<()> {
        load_owned(self.repo.as_ref(), &post_id, &caller).await?;

        if !self.repo.delete(&post_id).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(post_id = %post_id, owner_id = %caller, "Post deleted");

        Ok(())
    }
}
