use axum::extract::{Path, State};
use devconnect_profile::{EducationInput, ExperienceInput, Profile, UpsertInput};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::extract::Json;
use crate::server::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Profile>> {
    Ok(Json(state.profile_command.me(auth.id).await?))
}

pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpsertInput>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_command.upsert(&auth.id, input).await?))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Profile>>> {
    Ok(Json(state.profile_command.list().await?))
}

pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_command.by_user(user_id).await?))
}

/// DELETE /api/profiles - removes the account with its profile and posts
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>> {
    let posts = state.post_command.delete_by_user(auth.id.to_owned()).await?;
    state.profile_command.delete_by_user(auth.id.to_owned()).await?;
    state.user_command.delete(auth.id.to_owned()).await?;

    tracing::info!(user_id = %auth.id, posts, "account deleted");

    Ok(Json(MessageResponse {
        msg: "User and its associated profile and posts have been deleted",
    }))
}

pub async fn add_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ExperienceInput>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_command.add_experience(&auth.id, input).await?))
}

pub async fn delete_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>> {
    Ok(Json(
        state
            .profile_command
            .delete_experience(&auth.id, exp_id)
            .await?,
    ))
}

pub async fn add_education(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<EducationInput>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_command.add_education(&auth.id, input).await?))
}

pub async fn delete_education(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>> {
    Ok(Json(
        state
            .profile_command
            .delete_education(&auth.id, edu_id)
            .await?,
    ))
}
