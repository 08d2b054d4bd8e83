// SPDX-License-Identifier: MIT

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// User accounts, keyed by email address.
    pub const USERS: &str = "users";
    /// Append-only game score records, keyed by UUID.
    pub const GAME_SCORES: &str = "game_scores";
}
