//! Edit Post Use Case
//!
//! Read-for-edit: the owner loads a post to fill the edit form.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::services::load_owned;
use crate::error::PostResult;

pub struct EditPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> EditPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, post_id: PostId) -> PostResult<Post> {
        load_owned(self.repo.as_ref(), &post_id, &caller).await
    }
}
