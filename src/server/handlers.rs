use crate::db::models::{Profile, ProfileFields};
use crate::error::PawbookError;
use crate::server::router::PawbookState;
use crate::server::session::Session;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Body of `/auth/register` and `/auth/login`.
#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /auth/register
pub async fn register(
    State(state): State<PawbookState>,
    Json(body): Json<CredentialsBody>,
) -> Result<StatusCode, PawbookError> {
    state.accounts.register(&body.email, &body.password).await?;
    Ok(StatusCode::CREATED)
}

/// POST /auth/login -> a fresh bearer token
pub async fn login(
    State(state): State<PawbookState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<LoginResponse>, PawbookError> {
    let token = state.accounts.login(&body.email, &body.password).await?;
    Ok(Json(LoginResponse { token }))
}

pub async fn logout(
    State(state): State<PawbookState>,
    session: Session,
) -> Result<StatusCode, PawbookError> {
    state.accounts.logout(&session.email).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_account(
    State(state): State<PawbookState>,
    session: Session,
) -> Result<StatusCode, PawbookError> {
    state.accounts.remove_account(&session.email).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_profile(
    State(state): State<PawbookState>,
    session: Session,
    Json(profile): Json<Profile>,
) -> Result<(StatusCode, Json<Profile>), PawbookError> {
    session.ensure_owns(&profile.email)?;
    state.accounts.create_profile(&profile).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn get_profile(
    State(state): State<PawbookState>,
    _session: Session,
    Path(email): Path<String>,
) -> Result<Json<Profile>, PawbookError> {
    Ok(Json(state.accounts.profile(&email).await?))
}

pub async fn update_profile(
    State(state): State<PawbookState>,
    session: Session,
    Path(email): Path<String>,
    Json(fields): Json<ProfileFields>,
) -> Result<Json<Profile>, PawbookError> {
    session.ensure_owns(&email)?;
    let profile = fields.with_email(email);
    state.accounts.update_profile(&profile).await?;
    Ok(Json(profile))
}

pub async fn delete_profile(
    State(state): State<PawbookState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<StatusCode, PawbookError> {
    session.ensure_owns(&email)?;
    state.accounts.delete_profile(&email).await?;
    Ok(StatusCode::NO_CONTENT)
}
