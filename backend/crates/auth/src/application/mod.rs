//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod session_token;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use session_token::SessionTokenService;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{AvatarUpload, SignUpInput, SignUpOutput, SignUpUseCase};
