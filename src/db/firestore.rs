// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (account + per-lesson progress, keyed by email)
//! - Game scores (append-only records)
//!
//! Each operation is a single document read or write; there is no
//! application-level locking. Email uniqueness comes from keying user
//! documents by email and using create (not upsert) semantics, so the
//! store rejects a second concurrent registration even when both pass
//! the handler's existence check.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{GameScore, LessonProgress, User};
use futures_util::FutureExt;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Look up a user account by email (single document read).
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(email)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new user account.
    ///
    /// Uses create (not upsert) semantics: the write fails if a document
    /// with the same email already exists. That failure is the uniqueness
    /// constraint; the handler's earlier existence check is only a
    /// friendlier fast path.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        let result: Result<User, _> = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::USERS)
            .document_id(&user.email)
            .object(user)
            .execute()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(firestore::errors::FirestoreError::DataConflictError(_)) => {
                Err(AppError::Conflict("Email already registered".to_string()))
            }
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    /// Replace the progress entry for a single lesson.
    ///
    /// Runs as a read-modify-write inside `run_transaction`: the read goes
    /// through the transaction-bound client, so the document is registered
    /// for conflict detection and the commit aborts (and is retried) when a
    /// concurrent request touched the same user. The write mask is limited
    /// to the `progress` field. Entries for other lessons are never
    /// dropped, even when updates race.
    pub async fn update_lesson_progress(
        &self,
        email: &str,
        lesson_id: &str,
        entry: LessonProgress,
    ) -> Result<(), AppError> {
        let client = self.get_client()?;

        let found = client
            .run_transaction(|db, transaction| {
                let email = email.to_string();
                let lesson_id = lesson_id.to_string();
                let entry = entry.clone();
                async move {
                    // This read is served at the transaction's consistency,
                    // not default consistency.
                    let current: Option<User> = db
                        .fluent()
                        .select()
                        .by_id_in(collections::USERS)
                        .obj()
                        .one(&email)
                        .await?;

                    let Some(mut user) = current else {
                        return Ok(false);
                    };

                    user.progress.insert(lesson_id, entry);

                    db.fluent()
                        .update()
                        .fields(firestore::paths!(User::{progress}))
                        .in_col(collections::USERS)
                        .document_id(&email)
                        .object(&user)
                        .add_to_transaction(transaction)?;

                    Ok(true)
                }
                .boxed()
            })
            .await
            .map_err(|e| AppError::Database(format!("Progress update transaction failed: {}", e)))?;

        if !found {
            return Err(AppError::NotFound(format!("User {} not found", email)));
        }

        tracing::debug!(email, lesson_id, "Lesson progress updated");

        Ok(())
    }

    // ─── Score Operations ────────────────────────────────────────

    /// Append a game score record. Pure append; existing records are never
    /// merged or overwritten (every record carries a fresh UUID).
    pub async fn insert_game_score(&self, score: &GameScore) -> Result<(), AppError> {
        let _: GameScore = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::GAME_SCORES)
            .document_id(&score.id)
            .object(score)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(
            user_id = %score.user_id,
            game_id = %score.game_id,
            score = score.score,
            "Game score saved"
        );

        Ok(())
    }

    /// Fetch all score records for a user, most recent first.
    ///
    /// Not exposed over HTTP; scores are write-only through the API. This
    /// query exists so integration tests can verify the append-only
    /// behavior of the collection.
    pub async fn get_scores_for_user(&self, user_id: &str) -> Result<Vec<GameScore>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::GAME_SCORES)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([(
                "played_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
