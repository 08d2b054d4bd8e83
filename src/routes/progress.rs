// SPDX-License-Identifier: MIT

//! Progress and score recording routes (require authentication).

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::CurrentUser;
use crate::models::{GameScore, LessonProgress};
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/progress/lesson", post(update_lesson_progress))
        .route("/api/games/score", post(save_game_score))
}

#[derive(Deserialize)]
pub struct LessonProgressRequest {
    pub lesson_id: String,
    #[serde(default)]
    pub completed: bool,
    pub score: Option<i64>,
}

#[derive(Deserialize)]
pub struct GameScoreRequest {
    pub game_id: String,
    pub score: i64,
    pub level: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Record completion state for one lesson.
///
/// Only the entry for `lesson_id` is replaced; progress on other lessons
/// is untouched even when updates race (see FirestoreDb::update_lesson_progress).
async fn update_lesson_progress(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<LessonProgressRequest>,
) -> Result<Json<MessageResponse>> {
    let entry = LessonProgress {
        completed: payload.completed,
        score: payload.score,
        completed_at: payload.completed.then(now_rfc3339),
    };

    state
        .db
        .update_lesson_progress(&user.email, &payload.lesson_id, entry)
        .await?;

    tracing::info!(
        user_id = %user.id,
        lesson_id = %payload.lesson_id,
        completed = payload.completed,
        "Lesson progress recorded"
    );

    Ok(Json(MessageResponse {
        message: "Progress updated successfully".to_string(),
    }))
}

/// Append a game score record for the current user.
async fn save_game_score(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<GameScoreRequest>,
) -> Result<Json<MessageResponse>> {
    let score = GameScore::new(
        user.id.clone(),
        payload.game_id,
        payload.score,
        payload.level,
    );

    state.db.insert_game_score(&score).await?;

    Ok(Json(MessageResponse {
        message: "Score saved successfully".to_string(),
    }))
}
