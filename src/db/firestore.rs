// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Athletes (profiles)
//! - Activities (synced workouts with zone points)
//! - Competitions (configured windows)
//!
//! Activity documents are normalized into [`Activity`] here; callers never
//! see the raw storage shape.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Activity, ActivityRecord, Athlete, CompetitionConfig};
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;

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

    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Athlete Operations ──────────────────────────────────────

    /// Get an athlete by Strava athlete ID.
    pub async fn get_athlete(&self, athlete_id: u64) -> Result<Option<Athlete>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ATHLETES)
            .obj()
            .one(&athlete_id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List every athlete, ordered by ID for a stable roster order.
    pub async fn list_athletes(&self) -> Result<Vec<Athlete>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ATHLETES)
            .order_by([("id", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update an athlete.
    pub async fn upsert_athlete(&self, athlete: &Athlete) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ATHLETES)
            .document_id(athlete.id.to_string())
            .object(athlete)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Activity Operations ─────────────────────────────────────

    async fn get_activity_record(
        &self,
        activity_id: u64,
    ) -> Result<Option<ActivityRecord>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ACTIVITIES)
            .obj()
            .one(&activity_id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an activity by Strava ID.
    pub async fn get_activity(&self, activity_id: u64) -> Result<Option<Activity>, AppError> {
        Ok(self
            .get_activity_record(activity_id)
            .await?
            .map(Activity::from))
    }

    /// Get every activity for one athlete, unfiltered.
    pub async fn get_activities_for_athlete(
        &self,
        athlete_id: u64,
    ) -> Result<Vec<Activity>, AppError> {
        let records: Vec<ActivityRecord> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .filter(move |q| q.field("athlete_id").eq(athlete_id))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(athlete_id, count = records.len(), "Loaded activities");

        Ok(records.into_iter().map(Activity::from).collect())
    }

    /// Get every activity for every athlete, unfiltered.
    pub async fn get_all_activities(&self) -> Result<Vec<Activity>, AppError> {
        let records: Vec<ActivityRecord> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(count = records.len(), "Loaded all activities");

        Ok(records.into_iter().map(Activity::from).collect())
    }

    /// Store an activity.
    pub async fn set_activity(&self, activity: &Activity) -> Result<(), AppError> {
        let record = ActivityRecord::from(activity);
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(record.id.to_string())
            .object(&record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Store many activities.
    ///
    /// Uses concurrent writes with a limit to avoid overloading Firestore.
    pub async fn batch_set_activities(&self, activities: &[Activity]) -> Result<(), AppError> {
        stream::iter(activities)
            .map(|activity| self.set_activity(activity))
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<(), AppError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, AppError>>()?;

        Ok(())
    }

    /// Set the `exclude_from_pace_analysis` flag on one activity.
    ///
    /// Fetch-modify-write so other fields are preserved. Returns the updated
    /// activity, or `None` if it does not exist.
    pub async fn set_pace_exclusion(
        &self,
        activity_id: u64,
        exclude: bool,
    ) -> Result<Option<Activity>, AppError> {
        let Some(mut record) = self.get_activity_record(activity_id).await? else {
            return Ok(None);
        };

        record.exclude_from_pace_analysis = exclude;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(activity_id.to_string())
            .object(&record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(activity_id, exclude, "Updated pace analysis exclusion");

        Ok(Some(Activity::from(record)))
    }

    // ─── Competition Operations ──────────────────────────────────

    /// List all configured competitions.
    pub async fn list_competitions(&self) -> Result<Vec<CompetitionConfig>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::COMPETITIONS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a competition.
    pub async fn set_competition(&self, competition: &CompetitionConfig) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::COMPETITIONS)
            .document_id(&competition.id)
            .object(competition)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
