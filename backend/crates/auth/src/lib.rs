//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Sign-in, sign-up and the session token service
//! - `infra/` - PostgreSQL and in-memory user stores
//! - `presentation/` - HTTP handlers, DTOs, the auth gate, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; plaintext is zeroized after use
//! - Sessions are stateless: an HMAC-SHA256 signed token carrying the user id,
//!   delivered in an HTTP-only `token` cookie
//! - Unknown user and wrong password are indistinguishable to the caller
//! - No server-side revocation; logging out only clears the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_token::SessionTokenService;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::{AuthGate, CurrentUser, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
