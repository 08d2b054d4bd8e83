// SPDX-License-Identifier: MIT

//! User model for storage and API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Proficiency level of a user (or of a piece of content).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Completion state for a single lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub completed: bool,
    /// Score achieved on the lesson, if any
    pub score: Option<i64>,
    /// When the lesson was completed (RFC3339), None if not completed
    pub completed_at: Option<String>,
}

/// User account stored in Firestore.
///
/// The Firestore document ID is the email address, so a create-if-absent
/// write doubles as the uniqueness constraint on email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// Email address, unique, case-sensitive as stored
    pub email: String,
    /// Display name
    pub name: String,
    /// Argon2id password hash (PHC string)
    pub password_hash: String,
    /// Proficiency level, starts at beginner
    #[serde(default)]
    pub level: Level,
    /// Per-lesson completion state, keyed by lesson ID
    #[serde(default)]
    pub progress: HashMap<String, LessonProgress>,
    /// When the account was created (RFC3339)
    pub created_at: String,
}

impl User {
    /// Build a fresh account with a hashed password and empty progress.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name,
            password_hash,
            level: Level::default(),
            progress: HashMap::new(),
            created_at: crate::time_utils::now_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Level::Beginner).unwrap(),
            "\"beginner\""
        );
        assert_eq!(
            serde_json::from_str::<Level>("\"advanced\"").unwrap(),
            Level::Advanced
        );
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "a@b.com".to_string(),
            "A".to_string(),
            "$argon2id$fake".to_string(),
        );

        assert_eq!(user.level, Level::Beginner);
        assert!(user.progress.is_empty());
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_user_deserializes_without_progress_field() {
        // Documents written before the progress field existed must still load.
        let json = r#"{
            "id": "u-1",
            "email": "a@b.com",
            "name": "A",
            "password_hash": "h",
            "created_at": "2024-01-15T10:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.progress.is_empty());
        assert_eq!(user.level, Level::Beginner);
    }
}
