use axum::extract::{Path, State};
use devconnect_post::{Comment, CommentInput, CreateInput, Like, Post};

use crate::auth::AuthUser;
use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::server::AppState;

async fn author_name(state: &AppState, auth: &AuthUser) -> Result<String> {
    match state.user_command.find(auth.id.to_owned()).await? {
        Some(user) => Ok(user.name),
        None => Err(AppError::InvalidToken),
    }
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateInput>,
) -> Result<Json<Post>> {
    let name = author_name(&state, &auth).await?;
    let post = state.post_command.create(auth.id, name, input).await?;

    Ok(Json(post))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Post>>> {
    Ok(Json(state.post_command.list().await?))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Post>> {
    Ok(Json(state.post_command.get(id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.post_command.delete(&auth.id, id).await?))
}

pub async fn like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>> {
    Ok(Json(state.post_command.like(&auth.id, id).await?))
}

pub async fn unlike(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>> {
    Ok(Json(state.post_command.unlike(&auth.id, id).await?))
}

pub async fn comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<CommentInput>,
) -> Result<Json<Vec<Comment>>> {
    let name = author_name(&state, &auth).await?;
    let comments = state
        .post_command
        .comment(auth.id, name, id, input)
        .await?;

    Ok(Json(comments))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>> {
    let comments = state
        .post_command
        .delete_comment(&auth.id, id, comment_id)
        .await?;

    Ok(Json(comments))
}
