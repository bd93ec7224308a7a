//! Update Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::services::load_owned;
use crate::domain::value_object::{post_body::PostBody, post_title::PostTitle};
use crate::error::{PostError, PostResult};

/// Update post input
pub struct UpdatePostInput {
    pub title: String,
    pub body: String,
}

pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Overwrite title and body of a post the caller owns
    ///
    /// Concurrent updates are last-write-wins.
    pub async fn execute(
        &self,
        caller: UserId,
        post_id: PostId,
        input: UpdatePostInput,
    ) -> PostResult<Post> {
        let mut post = load_owned(self.repo.as_ref(), &post_id, &caller).await?;

        let title = PostTitle::new(input.title).map_err(PostError::Validation)?;
        let body = PostBody::new(input.body).map_err(PostError::Validation)?;
        post.revise(title, body);

        // Deleted between the lookup and the write
        if !self.repo.update(&post).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(post_id = %post.post_id, owner_id = %caller, "Post updated");

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support;

    fn input(title: &str) -> UpdatePostInput {
        UpdatePostInput {
            title: title.to_string(),
            body: "B2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_owner_update_round_trips() {
        let repo = test_support::repo();
        let alice = UserId::new();
        let post = test_support::create(&repo, alice, "T").await;

        UpdatePostUseCase::new(repo.clone())
            .execute(alice, post.post_id, input("T2"))
            .await
            .unwrap();

        let stored = repo.find_by_id(&post.post_id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_str(), "T2");
        assert_eq!(stored.body.as_str(), "B2");
        assert_eq!(stored.owner_id, alice);
        assert!(stored.updated_at > stored.created_at);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update() {
        let repo = test_support::repo();
        let post = test_support::create(&repo, UserId::new(), "T").await;

        let result = UpdatePostUseCase::new(repo.clone())
            .execute(UserId::new(), post.post_id, input("hijacked"))
            .await;

        assert!(matches!(result, Err(PostError::Forbidden)));
        let stored = repo.find_by_id(&post.post_id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_str(), "T");
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let result = UpdatePostUseCase::new(test_support::repo())
            .execute(UserId::new(), PostId::new(), input("T2"))
            .await;
        assert!(matches!(result, Err(PostError::NotFound)));
    }

    #[tokio::test]
    async fn test_ownership_checked_before_input() {
        let repo = test_support::repo();
        let post = test_support::create(&repo, UserId::new(), "T").await;

        let result = UpdatePostUseCase::new(repo)
            .execute(UserId::new(), post.post_id, input(""))
            .await;
        assert!(matches!(result, Err(PostError::Forbidden)));
    }
}
