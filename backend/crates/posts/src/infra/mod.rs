//! Infrastructure Layer
//!
//! Database implementations of the post repository.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPostRepository;
pub use postgres::PgPostRepository;
