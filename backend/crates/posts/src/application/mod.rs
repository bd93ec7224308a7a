//! Application Layer
//!
//! One use case per post operation. All of them expect an authenticated
//! caller; the auth gate runs before any of them.

pub mod create_post;
pub mod delete_post;
pub mod edit_post;
pub mod list_posts;
pub mod update_post;

// Re-exports
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use edit_post::EditPostUseCase;
pub use list_posts::ListPostsUseCase;
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
