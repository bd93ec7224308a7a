//! Blog Admin API
//!
//! Router assembly shared by the server binary and the integration tests.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::AuthAppState;
use auth::{AuthConfig, AuthGate, SessionTokenService, auth_router};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use platform::upload::DiskUploadStore;
use posts::domain::repository::PostRepository;
use posts::posts_router;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Build the full application router over the given stores
pub fn build_app<U, P>(config: &AppConfig, users: U, posts: P) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let auth_config: Arc<AuthConfig> = Arc::new(config.auth.clone());
    let tokens = Arc::new(SessionTokenService::new(auth_config.clone()));
    let gate = AuthGate::new(tokens.clone(), auth_config.cookie_name.clone());

    let auth_state = AuthAppState {
        repo: Arc::new(users),
        config: auth_config,
        tokens,
        uploads: Arc::new(DiskUploadStore::new(&config.upload_dir)),
    };

    Router::new()
        .merge(auth_router(auth_state))
        .merge(posts_router(posts, gate))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}
