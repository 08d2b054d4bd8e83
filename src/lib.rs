// SPDX-License-Identifier: MIT

//! LingoLeap: English learning platform API
//!
//! This crate provides the backend API for user accounts, lesson/game/video
//! catalogs, and per-user progress and score tracking.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::ContentService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub content: ContentService,
}
