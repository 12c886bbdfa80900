// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Competition API routes.

use crate::error::{AppError, Result};
use crate::scoring::{ActivityView, Comparison};
use crate::services::standings::{
    AthleteSummary, CompetitionOverview, CompetitionProjection, LeaderboardEntry,
};
use crate::time_utils::parse_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_RECENT_ACTIVITIES: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/competition", get(get_competition))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/athletes/{athlete_id}/summary", get(get_athlete_summary))
        .route(
            "/api/athletes/{athlete_id}/activities",
            get(get_athlete_activities),
        )
        .route("/api/compare", get(get_comparison))
        .route("/api/projections", get(get_projections))
        .route(
            "/api/activities/{activity_id}/pace-exclusion",
            put(set_pace_exclusion),
        )
}

// ─── Clock ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct AsOfQuery {
    /// Evaluate the timeline at this instant instead of now (RFC3339)
    as_of: Option<String>,
}

fn resolve_now(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    match as_of {
        Some(raw) => parse_utc_rfc3339(raw).ok_or_else(|| {
            AppError::BadRequest("Invalid 'as_of' parameter: must be RFC3339 datetime".to_string())
        }),
        None => Ok(Utc::now()),
    }
}

// ─── Competition ─────────────────────────────────────────────

async fn get_competition(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfQuery>,
) -> Result<Json<CompetitionOverview>> {
    let now = resolve_now(params.as_of.as_deref())?;
    Ok(Json(state.standings.competition_overview(now).await?))
}

async fn get_projections(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfQuery>,
) -> Result<Json<CompetitionProjection>> {
    let now = resolve_now(params.as_of.as_deref())?;
    tracing::debug!(now = %now, "Fetching projections");
    Ok(Json(state.standings.projections(now).await?))
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Result<Json<LeaderboardResponse>> {
    let entries = state.standings.leaderboard().await?;
    Ok(Json(LeaderboardResponse { entries }))
}

// ─── Athletes ────────────────────────────────────────────────

#[derive(Deserialize)]
struct SummaryQuery {
    /// Number of recent activities to include
    limit: Option<usize>,
}

fn recent_limit(requested: Option<usize>, default: usize) -> usize {
    requested.unwrap_or(default).min(MAX_RECENT_ACTIVITIES)
}

async fn get_athlete_summary(
    State(state): State<Arc<AppState>>,
    Path(athlete_id): Path<u64>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<AthleteSummary>> {
    let limit = recent_limit(params.limit, state.config.recent_activities_limit);
    tracing::debug!(athlete_id, limit, "Fetching athlete summary");

    Ok(Json(state.standings.athlete_summary(athlete_id, limit).await?))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityView>,
    pub total: u32,
}

async fn get_athlete_activities(
    State(state): State<Arc<AppState>>,
    Path(athlete_id): Path<u64>,
) -> Result<Json<ActivitiesResponse>> {
    let activities = state.standings.athlete_activities(athlete_id).await?;
    Ok(Json(ActivitiesResponse {
        total: activities.len() as u32,
        activities,
    }))
}

// ─── Comparison ──────────────────────────────────────────────

#[derive(Deserialize)]
struct CompareQuery {
    athlete1: u64,
    athlete2: u64,
}

async fn get_comparison(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareQuery>,
) -> Result<Json<Comparison>> {
    tracing::debug!(
        athlete1 = params.athlete1,
        athlete2 = params.athlete2,
        "Comparing athletes"
    );

    Ok(Json(
        state
            .standings
            .compare(params.athlete1, params.athlete2)
            .await?,
    ))
}

// ─── Pace Analysis Exclusion ─────────────────────────────────

#[derive(Deserialize)]
struct PaceExclusionRequest {
    exclude: bool,
}

async fn set_pace_exclusion(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<u64>,
    Json(body): Json<PaceExclusionRequest>,
) -> Result<Json<ActivityView>> {
    Ok(Json(
        state
            .standings
            .set_pace_exclusion(activity_id, body.exclude)
            .await?,
    ))
}
