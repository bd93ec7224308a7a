//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `posts` crates:
//! - The unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed identifiers for users and posts ([`id::UserId`], [`id::PostId`])
//!
//! Only things whose meaning is identical in every feature crate live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
