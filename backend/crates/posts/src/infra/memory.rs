//! In-Memory Repository Implementation
//!
//! Process-local post store. Used when no database is configured and in tests.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::PostId;
use tokio::sync::RwLock;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

#[derive(Default)]
struct Inner {
    posts: HashMap<PostId, (u64, Post)>,
    /// Insertion counter; breaks ties between posts created in the same microsecond
    next_seq: u64,
}

/// Post store keyed by post id
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.posts.insert(post.post_id, (seq, post.clone()));
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let inner = self.inner.read().await;
        Ok(inner.posts.get(post_id).map(|(_, post)| post.clone()))
    }

    async fn find_all(&self) -> PostResult<Vec<Post>> {
        let inner = self.inner.read().await;

        let mut entries: Vec<_> = inner.posts.values().collect();
        entries.sort_by_key(|(seq, post)| Reverse((post.created_at, *seq)));

        Ok(entries.into_iter().map(|(_, post)| post.clone()).collect())
    }

    async fn update(&self, post: &Post) -> PostResult<bool> {
        let mut inner = self.inner.write().await;

        match inner.posts.get_mut(&post.post_id) {
            Some((_, stored)) => {
                stored.title = post.title.clone();
                stored.body = post.body.clone();
                stored.updated_at = post.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        Ok(self.inner.write().await.posts.remove(post_id).is_some())
    }
}
