//! Domain Layer
//!
//! Contains the post entity, value objects, repository trait and the
//! ownership rule.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::post::Post;
pub use repository::PostRepository;
