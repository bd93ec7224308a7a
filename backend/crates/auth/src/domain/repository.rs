//! Repository Traits
//!
//! Interfaces for user persistence. Implementations are in the infra layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Fails with `AuthError::UserNameTaken` when the name is already stored.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact (normalized) user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}
