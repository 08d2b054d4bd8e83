// SPDX-License-Identifier: MIT

//! Registration, login and profile routes.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, CurrentUser};
use crate::models::{LessonProgress, Level, User};
use crate::services::password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes that require a valid bearer token (middleware applied in mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/me", get(me))
}

// ─── Request / Response Types ────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Compact account view returned with tokens.
#[derive(Serialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub level: Level,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            level: user.level,
        }
    }
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserSummary,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub level: Level,
    pub progress: HashMap<String, LessonProgress>,
}

// ─── Handlers ────────────────────────────────────────────────

/// Register a new account and issue a first token.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>> {
    payload
        .validate()
        .map_err(|_| AppError::BadRequest("Invalid email address".to_string()))?;

    if payload.password.is_empty() {
        return Err(AppError::BadRequest("Password must not be empty".to_string()));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    // Friendly fast path; the store's create semantics are the real
    // uniqueness guard when two registrations race past this check.
    if state.db.find_user_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let user = User::new(payload.email, payload.name, password_hash);

    state.db.insert_user(&user).await?;

    tracing::info!(user_id = %user.id, "New user registered");

    issue_token(&state, &user)
}

/// Exchange email + password for a token.
///
/// Unknown email and wrong password produce the identical response, so the
/// endpoint never reveals whether an email is registered.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let user = state.db.find_user_by_email(&payload.email).await?;

    let user = match user {
        Some(u) if password::verify_password(&payload.password, &u.password_hash) => u,
        _ => return Err(AppError::Unauthorized),
    };

    tracing::debug!(user_id = %user.id, "User logged in");

    issue_token(&state, &user)
}

/// Get the current user's profile with full progress.
async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        id: user.id,
        email: user.email,
        name: user.name,
        level: user.level,
        progress: user.progress,
    })
}

fn issue_token(state: &AppState, user: &User) -> Result<Json<TokenResponse>> {
    let token = create_jwt(&user.email, &state.config.jwt_secret, state.config.token_ttl_hours)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserSummary::from(user),
    }))
}
