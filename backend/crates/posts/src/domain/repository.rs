//! Repository Traits
//!
//! Interfaces for post persistence. Implementations are in the infra layer.

use kernel::id::PostId;

use crate::domain::entity::post::Post;
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// All posts, newest first
    async fn find_all(&self) -> PostResult<Vec<Post>>;

    /// Persist title, body and `updated_at`
    ///
    /// Returns `false` when the post no longer exists.
    async fn update(&self, post: &Post) -> PostResult<bool>;

    /// Returns `false` when the post no longer exists.
    async fn delete(&self, post_id: &PostId) -> PostResult<bool>;
}
