// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod content;
pub mod score;
pub mod user;

pub use content::{Catalog, ContactInfo, Game, Lesson, Video};
pub use score::GameScore;
pub use user::{LessonProgress, Level, User};
