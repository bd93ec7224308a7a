//! Posts Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get},
};
use auth::{AuthGate, require_auth};
use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Post routes, all behind the auth gate
///
/// `route_layer` keeps unknown paths at 404 instead of 401.
pub fn posts_router<R>(repo: R, gate: AuthGate) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/dashboard", get(handlers::dashboard::<R>))
        .route(
            "/add-post",
            get(handlers::add_post_page).post(handlers::add_post::<R>),
        )
        .route(
            "/edit-post/{id}",
            get(handlers::edit_post_page::<R>).put(handlers::update_post::<R>),
        )
        .route("/delete-post/{id}", delete(handlers::delete_post::<R>))
        .route_layer(from_fn_with_state(gate, require_auth))
        .with_state(state)
}
