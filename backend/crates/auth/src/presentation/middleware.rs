//! Auth Middleware
//!
//! Gate for protected routes. A request passes only with a `token` cookie that
//! verifies under the server secret; the resolved user id is then available to
//! handlers through the [`CurrentUser`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::application::session_token::SessionTokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    pub tokens: Arc<SessionTokenService>,
    pub cookie_name: String,
}

impl AuthGate {
    pub fn new(tokens: Arc<SessionTokenService>, cookie_name: impl Into<String>) -> Self {
        Self {
            tokens,
            cookie_name: cookie_name.into(),
        }
    }
}

/// Identity of the authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid session token
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token =
        extract_cookie(req.headers(), &gate.cookie_name).ok_or(AuthError::Unauthenticated)?;

    let user_id = gate
        .tokens
        .verify(&token)
        .map_err(|_| AuthError::SessionInvalid)?;

    req.extensions_mut().insert(CurrentUser { user_id });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use tower::ServiceExt;

    fn app() -> (Router, Arc<SessionTokenService>) {
        let tokens = Arc::new(SessionTokenService::new(Arc::new(AuthConfig::development())));
        let gate = AuthGate::new(tokens.clone(), "token");

        let router = Router::new()
            .route(
                "/whoami",
                get(|user: CurrentUser| async move { user.user_id.to_string() }),
            )
            .layer(from_fn_with_state(gate, require_auth));

        (router, tokens)
    }

    fn request(cookie: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_cookie_is_unauthorized() {
        let (app, _) = app();
        let res = app.oneshot(request(None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_forged_token_is_unauthorized() {
        let (app, _) = app();
        let res = app.oneshot(request(Some("token=abc.def"))).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let (app, tokens) = app();
        let user_id = UserId::new();
        let token = tokens.issue(&user_id).unwrap();

        let res = app
            .oneshot(request(Some(&format!("theme=dark; token={}", token))))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
