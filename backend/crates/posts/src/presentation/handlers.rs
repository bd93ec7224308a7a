//! HTTP Handlers

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use auth::CurrentUser;
use kernel::id::PostId;
use platform::view::Page;
use std::sync::Arc;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, EditPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{PostForm, PostResponse};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Ids that do not parse cannot name a stored post
fn parse_post_id(raw: &str) -> PostResult<PostId> {
    raw.parse().map_err(|_| PostError::NotFound)
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /dashboard
pub async fn dashboard<R>(
    State(state): State<PostsAppState<R>>,
) -> PostResult<Json<Page<Vec<PostResponse>>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    let data = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(Page::new("admin/dashboard", "Dashboard").with_data(data)))
}

// ============================================================================
// Create
// ============================================================================

/// GET /add-post
pub async fn add_post_page(_user: CurrentUser) -> Json<Page<()>> {
    Json(Page::new("admin/add-post", "Add Post"))
}

/// POST /add-post
pub async fn add_post<R>(
    State(state): State<PostsAppState<R>>,
    user: CurrentUser,
    Form(form): Form<PostForm>,
) -> PostResult<Redirect>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    CreatePostUseCase::new(state.repo.clone())
        .execute(
            user.user_id,
            CreatePostInput {
                title: form.title,
                body: form.body,
            },
        )
        .await?;

    Ok(Redirect::to("/dashboard"))
}

// ============================================================================
// Edit
// ============================================================================

/// GET /edit-post/{id}
pub async fn edit_post_page<R>(
    State(state): State<PostsAppState<R>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> PostResult<Json<Page<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let post = EditPostUseCase::new(state.repo.clone())
        .execute(user.user_id, post_id)
        .await?;

    Ok(Json(
        Page::new("admin/edit-post", "Edit Post").with_data(PostResponse::from(post)),
    ))
}

/// PUT /edit-post/{id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    user: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> PostResult<Redirect>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    UpdatePostUseCase::new(state.repo.clone())
        .execute(
            user.user_id,
            post_id,
            UpdatePostInput {
                title: form.title,
                body: form.body,
            },
        )
        .await?;

    Ok(Redirect::to(&format!("/edit-post/{}", post_id)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /delete-post/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> PostResult<Redirect>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    DeletePostUseCase::new(state.repo.clone())
        .execute(user.user_id, post_id)
        .await?;

    Ok(Redirect::to("/dashboard"))
}
