// SPDX-License-Identifier: MIT

//! Static catalog types (lessons, games, videos, contact info).
//!
//! These are fixed, versionless records served verbatim; nothing here is
//! persisted or mutated.

use crate::models::user::Level;
use serde::{Deserialize, Serialize};

/// A lesson in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub level: Level,
    pub description: String,
    pub content: LessonContent,
}

/// Teaching material inside a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonContent {
    pub vocabulary: Vec<String>,
    pub phrases: Vec<Phrase>,
}

/// An English phrase with its Spanish translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    pub english: String,
    pub spanish: String,
}

/// A game in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub level: Level,
}

/// A video in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
    pub level: Level,
    pub duration: String,
}

/// Contact information for the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social_media: SocialMedia,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

/// The full static catalog served by the content routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub lessons: Vec<Lesson>,
    pub games: Vec<Game>,
    pub videos: Vec<Video>,
    pub contact: ContactInfo,
}
