// SPDX-License-Identifier: MIT

//! Game score records.

use serde::{Deserialize, Serialize};

/// One game play result. Append-only; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameScore {
    /// Opaque unique identifier (UUID v4, also the document ID)
    pub id: String,
    /// Owning user's ID
    pub user_id: String,
    /// Which game was played
    pub game_id: String,
    /// Numeric score achieved
    pub score: i64,
    /// Level label the game was played at
    pub level: String,
    /// When the game was played (RFC3339)
    pub played_at: String,
}

impl GameScore {
    /// Build a new score record with a fresh ID and the current timestamp.
    pub fn new(user_id: String, game_id: String, score: i64, level: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            game_id,
            score,
            level,
            played_at: crate::time_utils::now_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_record_gets_a_unique_id() {
        let a = GameScore::new("u-1".to_string(), "word-match".to_string(), 80, "beginner".to_string());
        let b = GameScore::new("u-1".to_string(), "word-match".to_string(), 80, "beginner".to_string());
        assert_ne!(a.id, b.id);
    }
}
