//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, value objects, repository trait, ownership rule
//! - `application/` - One use case per CRUD operation
//! - `infra/` - PostgreSQL and in-memory post stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership
//! Every route sits behind `auth::require_auth`. Any signed-in user may list
//! and create posts; only the owner may open a post for editing, update it or
//! delete it. Existence is checked before ownership, so a missing id is always
//! `404` and never `403`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::{memory::InMemoryPostRepository, postgres::PgPostRepository};
pub use presentation::router::posts_router;
