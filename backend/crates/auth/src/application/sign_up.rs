//! Sign Up Use Case
//!
//! Registers a user. Does not sign the new user in.

use std::sync::Arc;

use platform::upload::DiskUploadStore;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    avatar_path::AvatarPath,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Avatar file received with the registration form
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    pub avatar: Option<AvatarUpload>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    uploads: Arc<DiskUploadStore>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, uploads: Arc<DiskUploadStore>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            uploads,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.into()))?;

        let raw_password = RawPassword::new(input.password).map_err(AuthError::Validation)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let uploaded = match input.avatar {
            Some(upload) => Some(self.uploads.save(&upload.file_name, &upload.bytes).await?),
            None => None,
        };
        let avatar = AvatarPath::new(
            uploaded
                .clone()
                .unwrap_or_else(|| self.config.default_avatar_path.clone()),
        );

        let user = User::new(user_name, password_hash, avatar);

        if let Err(e) = self.user_repo.create(&user).await {
            if let Some(path) = uploaded {
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(error = %remove_err, path = %path, "Failed to remove orphaned avatar");
                }
            }
            return Err(e);
        }

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            avatar = %user.avatar,
            "User signed up"
        );

        Ok(SignUpOutput { user })
    }
}
