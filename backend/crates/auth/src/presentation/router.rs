//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Public authentication routes: login page, login, registration, logout
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/admin",
            get(handlers::login_page).post(handlers::sign_in::<R>),
        )
        .route("/register", post(handlers::sign_up::<R>))
        .route("/logout", get(handlers::sign_out::<R>))
        .with_state(state)
}
