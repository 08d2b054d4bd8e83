// SPDX-License-Identifier: MIT

//! Static content provider.
//!
//! Serves fixed lesson/game/video catalogs and contact info. The built-in
//! catalog can be replaced by a read-only JSON file (CATALOG_PATH); the two
//! are behaviorally identical.

use crate::models::content::{
    Catalog, ContactInfo, Game, Lesson, LessonContent, Phrase, SocialMedia, Video,
};
use crate::models::user::Level;
use std::fs;
use std::path::Path;

/// Service holding the immutable content catalog.
#[derive(Clone)]
pub struct ContentService {
    catalog: Catalog,
}

impl Default for ContentService {
    fn default() -> Self {
        Self {
            catalog: builtin_catalog(),
        }
    }
}

impl ContentService {
    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| ContentError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(json_data)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;

        tracing::info!(
            lessons = catalog.lessons.len(),
            games = catalog.games.len(),
            videos = catalog.videos.len(),
            "Loaded content catalog"
        );

        Ok(Self { catalog })
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.catalog.lessons
    }

    pub fn games(&self) -> &[Game] {
        &self.catalog.games
    }

    pub fn videos(&self) -> &[Video] {
        &self.catalog.videos
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.catalog.contact
    }
}

/// Content catalog errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read catalog file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),
}

/// The catalog shipped with the service.
fn builtin_catalog() -> Catalog {
    let phrase = |english: &str, spanish: &str| Phrase {
        english: english.to_string(),
        spanish: spanish.to_string(),
    };
    let words = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();

    Catalog {
        lessons: vec![
            Lesson {
                id: "basic-1".to_string(),
                title: "Greetings and Introductions".to_string(),
                level: Level::Beginner,
                description: "Learn basic greetings and how to introduce yourself".to_string(),
                content: LessonContent {
                    vocabulary: words(&[
                        "Hello",
                        "Hi",
                        "Good morning",
                        "Good afternoon",
                        "Good evening",
                        "My name is",
                        "Nice to meet you",
                    ]),
                    phrases: vec![
                        phrase("Hello, my name is John", "Hola, mi nombre es John"),
                        phrase("Nice to meet you", "Mucho gusto"),
                        phrase("How are you?", "¿Cómo estás?"),
                        phrase("I'm fine, thank you", "Estoy bien, gracias"),
                    ],
                },
            },
            Lesson {
                id: "basic-2".to_string(),
                title: "Numbers and Colors".to_string(),
                level: Level::Beginner,
                description: "Learn numbers 1-20 and basic colors".to_string(),
                content: LessonContent {
                    vocabulary: words(&[
                        "One", "Two", "Three", "Red", "Blue", "Green", "Yellow", "Black", "White",
                    ]),
                    phrases: vec![
                        phrase("I have two cats", "Tengo dos gatos"),
                        phrase("The car is red", "El carro es rojo"),
                        phrase("Five blue birds", "Cinco pájaros azules"),
                    ],
                },
            },
        ],
        games: vec![
            Game {
                id: "word-match".to_string(),
                title: "Word Matching".to_string(),
                description: "Match English words with their Spanish translations".to_string(),
                kind: "matching".to_string(),
                level: Level::Beginner,
            },
            Game {
                id: "grammar-quiz".to_string(),
                title: "Grammar Quiz".to_string(),
                description: "Test your English grammar knowledge".to_string(),
                kind: "quiz".to_string(),
                level: Level::Intermediate,
            },
        ],
        videos: vec![
            Video {
                id: "intro-english".to_string(),
                title: "Introduction to English".to_string(),
                description: "Basic English introduction video".to_string(),
                url: "https://example.com/video1".to_string(),
                thumbnail: "https://example.com/thumb1.jpg".to_string(),
                level: Level::Beginner,
                duration: "10:30".to_string(),
            },
            Video {
                id: "conversation-basics".to_string(),
                title: "Basic Conversations".to_string(),
                description: "Learn basic English conversations".to_string(),
                url: "https://example.com/video2".to_string(),
                thumbnail: "https://example.com/thumb2.jpg".to_string(),
                level: Level::Beginner,
                duration: "15:45".to_string(),
            },
        ],
        contact: ContactInfo {
            email: "contact@lingoleap.com".to_string(),
            phone: "+1-555-0123".to_string(),
            address: "123 Learning Street, Education City, EC 12345".to_string(),
            social_media: SocialMedia {
                facebook: "https://facebook.com/lingoleap".to_string(),
                twitter: "https://twitter.com/lingoleap".to_string(),
                instagram: "https://instagram.com/lingoleap".to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let service = ContentService::default();
        assert_eq!(service.lessons().len(), 2);
        assert_eq!(service.games().len(), 2);
        assert_eq!(service.videos().len(), 2);
        assert!(!service.contact().email.is_empty());
    }

    #[test]
    fn test_load_from_json_round_trip() {
        let service = ContentService::default();
        let json = serde_json::to_string(&Catalog {
            lessons: service.lessons().to_vec(),
            games: service.games().to_vec(),
            videos: service.videos().to_vec(),
            contact: service.contact().clone(),
        })
        .unwrap();

        let loaded = ContentService::load_from_json(&json).unwrap();
        assert_eq!(loaded.lessons().len(), 2);
        assert_eq!(loaded.games()[0].id, "word-match");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let result = ContentService::load_from_json("{not json");
        assert!(matches!(result, Err(ContentError::ParseError(_))));
    }
}
