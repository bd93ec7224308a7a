//! Sign In Use Case
//!
//! Checks credentials and issues a session token.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<SessionTokenService>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<SessionTokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let password = RawPassword::for_login(input.password);

        // A name that cannot be valid cannot be stored either
        let user = match UserName::new(&input.user_name) {
            Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            // Same Argon2 cost as a real check so timing does not reveal the miss
            UserPassword::dummy().verify(&password, self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let session_token = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::memory::InMemoryUserRepository;
    use platform::upload::DiskUploadStore;

    struct Fixture {
        repo: Arc<InMemoryUserRepository>,
        tokens: Arc<SessionTokenService>,
        config: Arc<AuthConfig>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Arc::new(AuthConfig::development());
            Self {
                repo: Arc::new(InMemoryUserRepository::new()),
                tokens: Arc::new(SessionTokenService::new(config.clone())),
                config,
            }
        }

        async fn register(&self, user_name: &str, password: &str) -> UserId {
            let uploads = Arc::new(DiskUploadStore::new(std::env::temp_dir()));
            SignUpUseCase::new(self.repo.clone(), uploads, self.config.clone())
                .execute(SignUpInput {
                    user_name: user_name.to_string(),
                    password: password.to_string(),
                    avatar: None,
                })
                .await
                .unwrap()
                .user
                .user_id
        }

        async fn sign_in(&self, user_name: &str, password: &str) -> AuthResult<SignInOutput> {
            SignInUseCase::new(self.repo.clone(), self.tokens.clone(), self.config.clone())
                .execute(SignInInput {
                    user_name: user_name.to_string(),
                    password: password.to_string(),
                })
                .await
        }
    }

    #[tokio::test]
    async fn test_correct_password_issues_token_for_user() {
        let fx = Fixture::new();
        let alice = fx.register("alice", "pw1").await;

        let output = fx.sign_in("alice", "pw1").await.unwrap();

        assert_eq!(output.user_id, alice);
        assert_eq!(fx.tokens.verify(&output.session_token).unwrap(), alice);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let fx = Fixture::new();
        fx.register("alice", "pw1").await;

        for wrong in ["pw2", "PW1", "", "pw1 "] {
            assert!(matches!(
                fx.sign_in("alice", wrong).await,
                Err(AuthError::InvalidCredentials)
            ));
        }
    }

    #[tokio::test]
    async fn test_unknown_user_is_same_error() {
        let fx = Fixture::new();
        fx.register("alice", "pw1").await;

        assert!(matches!(
            fx.sign_in("mallory", "pw1").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            fx.sign_in("", "pw1").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_name_is_normalized_like_registration() {
        let fx = Fixture::new();
        let alice = fx.register("alice", "pw1").await;

        for spelled in ["alice ", " alice", "ａｌｉｃｅ"] {
            let output = fx.sign_in(spelled, "pw1").await.unwrap();
            assert_eq!(output.user_id, alice);
        }

        assert!(matches!(
            fx.sign_in("Alice", "pw1").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
