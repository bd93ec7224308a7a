//! Domain Services
//!
//! The ownership rule shared by read-for-edit, update and delete.

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Load a post the caller is allowed to modify
///
/// Existence is checked first: a missing post is `NotFound` for everyone,
/// and only an existing post owned by someone else is `Forbidden`.
pub async fn load_owned<R>(repo: &R, post_id: &PostId, caller: &UserId) -> PostResult<Post>
where
    R: PostRepository,
{
    let post = repo.find_by_id(post_id).await?.ok_or(PostError::NotFound)?;

    if !post.is_owned_by(caller) {
        tracing::warn!(
            post_id = %post_id,
            owner_id = %post.owner_id,
            caller_id = %caller,
            "Ownership check failed"
        );
        return Err(PostError::Forbidden);
    }

    Ok(post)
}
