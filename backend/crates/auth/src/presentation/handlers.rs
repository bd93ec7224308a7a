//! HTTP Handlers

use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect};
use platform::cookie::to_header_value;
use platform::upload::DiskUploadStore;
use platform::view::Page;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenService;
use crate::application::{AvatarUpload, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{SignInRequest, SignUpResponse, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<SessionTokenService>,
    pub uploads: Arc<DiskUploadStore>,
}

// ============================================================================
// Login Page
// ============================================================================

/// GET /admin
pub async fn login_page() -> Json<Page<()>> {
    Json(Page::new("admin/index", "Admin"))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /admin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Form(req): Form<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        [(header::SET_COOKIE, to_header_value(&cookie))],
        Redirect::to("/dashboard"),
    ))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /register
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    mut multipart: Multipart,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let mut user_name = String::new();
    let mut password = String::new();
    let mut avatar = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "username" => user_name = field.text().await.map_err(multipart_error)?,
            "password" => password = field.text().await.map_err(multipart_error)?,
            "avatar" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                // Browsers send an empty part when no file was chosen
                if !bytes.is_empty() {
                    avatar = Some(AvatarUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.uploads.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignUpInput {
            user_name,
            password,
            avatar,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User created",
            user: UserResponse::from(output.user),
        }),
    ))
}

fn multipart_error(err: MultipartError) -> AuthError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AuthError::UploadTooLarge
    } else {
        AuthError::MalformedForm(err.body_text())
    }
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /logout
///
/// Tokens are stateless, so this only tells the browser to forget the cookie.
pub async fn sign_out<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.session_cookie().build_delete_cookie();

    ([(header::SET_COOKIE, to_header_value(&cookie))], Redirect::to("/"))
}
