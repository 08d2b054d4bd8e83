// SPDX-License-Identifier: MIT

//! Public catalog routes. Pure data, no auth, no failure paths.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::{ContactInfo, Game, Lesson, Video};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/lessons", get(get_lessons))
        .route("/api/games", get(get_games))
        .route("/api/videos", get(get_videos))
        .route("/api/contact", get(get_contact))
}

async fn get_lessons(State(state): State<Arc<AppState>>) -> Json<Vec<Lesson>> {
    Json(state.content.lessons().to_vec())
}

async fn get_games(State(state): State<Arc<AppState>>) -> Json<Vec<Game>> {
    Json(state.content.games().to_vec())
}

async fn get_videos(State(state): State<Arc<AppState>>) -> Json<Vec<Video>> {
    Json(state.content.videos().to_vec())
}

async fn get_contact(State(state): State<Arc<AppState>>) -> Json<ContactInfo> {
    Json(state.content.contact().clone())
}
