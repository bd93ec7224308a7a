//! Value Object Module

pub mod avatar_path;
pub mod user_name;
pub mod user_password;

pub use kernel::id::UserId;
