// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Standings service.
//!
//! Loads athletes, activities and competitions from Firestore, applies the
//! activity scope for each view and hands the records to the scoring engine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Activity, Athlete, CompetitionConfig};
use crate::scoring::breakdown::recent_activities;
use crate::scoring::{
    self, ActivityScope, ActivityView, AthleteHistory, AthleteStats, Comparison,
    ProjectionReport, ScoringError, Timeline,
};

/// Public athlete identity attached to responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteProfile {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub profile_image_url: Option<String>,
}

impl From<&Athlete> for AthleteProfile {
    fn from(athlete: &Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.display_name(),
            profile_image_url: athlete.profile_image_url.clone(),
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub athlete: AthleteProfile,
    pub total_points: f64,
    pub activity_count: usize,
}

/// Summary for one athlete's competition activities.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteSummary {
    pub athlete: AthleteProfile,
    #[serde(flatten)]
    pub stats: AthleteStats,
    pub recent_activities: Vec<ActivityView>,
}

/// Resolved competition with its timeline at request time.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompetitionOverview {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub timeline: Timeline,
}

impl CompetitionOverview {
    fn new(config: &CompetitionConfig, now: DateTime<Utc>) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone(),
            active: config.active,
            timeline: Timeline::at(&config.window(), now),
        }
    }
}

/// Projection report tagged with the competition it was computed for.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompetitionProjection {
    pub competition_id: String,
    pub competition_name: String,
    #[serde(flatten)]
    pub report: ProjectionReport,
}

/// Group activities by owning athlete, keeping their original order.
pub fn group_by_athlete(activities: Vec<Activity>) -> HashMap<u64, Vec<Activity>> {
    let mut grouped: HashMap<u64, Vec<Activity>> = HashMap::new();
    for activity in activities {
        grouped.entry(activity.athlete_id).or_default().push(activity);
    }
    grouped
}

/// Rank athletes by competition points. Ties keep roster order.
///
/// Activities are expected to be scoped already.
pub fn rank_leaderboard(
    athletes: &[Athlete],
    activities_by_athlete: &HashMap<u64, Vec<Activity>>,
) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(AthleteProfile, scoring::PointsTotal)> = athletes
        .iter()
        .map(|athlete| {
            let activities = activities_by_athlete
                .get(&athlete.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (AthleteProfile::from(athlete), scoring::total_points(activities))
        })
        .collect();

    rows.sort_by(|a, b| b.1.total_points.total_cmp(&a.1.total_points));

    rows.into_iter()
        .enumerate()
        .map(|(i, (athlete, totals))| LeaderboardEntry {
            rank: i as u32 + 1,
            athlete,
            total_points: totals.total_points,
            activity_count: totals.activity_count,
        })
        .collect()
}

/// Head-to-head comparison of two loaded athletes. A missing athlete is
/// reported by ID, first side first.
pub fn compare_athletes(
    athlete1: (u64, Option<&AthleteStats>),
    athlete2: (u64, Option<&AthleteStats>),
) -> Result<Comparison> {
    scoring::compare(athlete1.1, athlete2.1).map_err(|err| match err {
        ScoringError::NotFound(_) => {
            let missing = if athlete1.1.is_none() {
                athlete1.0
            } else {
                athlete2.0
            };
            AppError::NotFound(format!("Athlete {} not found", missing))
        }
    })
}

/// Read-side service over the scoring engine.
#[derive(Clone)]
pub struct StandingsService {
    db: FirestoreDb,
}

impl StandingsService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Resolve the competition that applies at `now`.
    pub async fn current_competition(&self, now: DateTime<Utc>) -> Result<CompetitionConfig> {
        let configs = self.db.list_competitions().await?;
        CompetitionConfig::select_current(&configs, now)
            .cloned()
            .ok_or_else(|| AppError::NotFound("No competition configured".to_string()))
    }

    pub async fn competition_overview(&self, now: DateTime<Utc>) -> Result<CompetitionOverview> {
        let config = self.current_competition(now).await?;
        Ok(CompetitionOverview::new(&config, now))
    }

    /// Points leaderboard over in-window, visible activities.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let (athletes, activities) =
            tokio::try_join!(self.db.list_athletes(), self.db.get_all_activities())?;

        let scoped = group_by_athlete(ActivityScope::Competition.apply(activities));
        let board = rank_leaderboard(&athletes, &scoped);

        tracing::debug!(athletes = board.len(), "Built leaderboard");
        Ok(board)
    }

    async fn load_athlete(&self, athlete_id: u64) -> Result<(Athlete, Vec<Activity>)> {
        let (athlete, activities) = tokio::try_join!(
            self.db.get_athlete(athlete_id),
            self.db.get_activities_for_athlete(athlete_id)
        )?;

        let athlete = athlete
            .ok_or_else(|| AppError::NotFound(format!("Athlete {} not found", athlete_id)))?;
        Ok((athlete, activities))
    }

    /// Derived stats over in-window, visible activities, or `None` for an
    /// unknown athlete.
    async fn load_stats(&self, athlete_id: u64) -> Result<Option<AthleteStats>> {
        match self.load_athlete(athlete_id).await {
            Ok((_, activities)) => {
                let scoped = ActivityScope::Competition.apply(activities);
                Ok(Some(AthleteStats::from_activities(athlete_id, &scoped)))
            }
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn athlete_summary(&self, athlete_id: u64, limit: usize) -> Result<AthleteSummary> {
        let (athlete, activities) = self.load_athlete(athlete_id).await?;
        let scoped = ActivityScope::Competition.apply(activities);

        Ok(AthleteSummary {
            athlete: AthleteProfile::from(&athlete),
            stats: AthleteStats::from_activities(athlete_id, &scoped),
            recent_activities: recent_activities(&scoped, limit),
        })
    }

    /// Full flattened history for one athlete, newest first.
    pub async fn athlete_activities(&self, athlete_id: u64) -> Result<Vec<ActivityView>> {
        let (_, activities) = self.load_athlete(athlete_id).await?;
        let all = ActivityScope::FullHistory.apply(activities);
        Ok(recent_activities(&all, all.len()))
    }

    /// Head-to-head comparison. Both athletes load concurrently.
    pub async fn compare(&self, athlete1: u64, athlete2: u64) -> Result<Comparison> {
        let (first, second) =
            tokio::try_join!(self.load_stats(athlete1), self.load_stats(athlete2))?;

        if first.is_none() || second.is_none() {
            tracing::warn!(
                athlete1,
                athlete2,
                first_found = first.is_some(),
                second_found = second.is_some(),
                "Comparison requested for unknown athlete"
            );
        }

        compare_athletes((athlete1, first.as_ref()), (athlete2, second.as_ref()))
    }

    /// Run-rate projections for the current competition.
    pub async fn projections(&self, now: DateTime<Utc>) -> Result<CompetitionProjection> {
        let (config, athletes, activities) = tokio::try_join!(
            self.current_competition(now),
            self.db.list_athletes(),
            self.db.get_all_activities()
        )?;

        let grouped = group_by_athlete(ActivityScope::FullHistory.apply(activities));
        let histories: Vec<AthleteHistory<'_>> = athletes
            .iter()
            .map(|athlete| AthleteHistory {
                athlete_id: athlete.id,
                name: athlete.display_name(),
                activities: grouped
                    .get(&athlete.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
            })
            .collect();

        let report = scoring::project(&config.window(), now, &histories);

        tracing::debug!(
            competition = %config.id,
            athletes = histories.len(),
            status = ?report.timeline.status,
            "Computed projections"
        );

        Ok(CompetitionProjection {
            competition_id: config.id,
            competition_name: config.name,
            report,
        })
    }

    /// Toggle whether an activity is excluded from pace analysis.
    pub async fn set_pace_exclusion(&self, activity_id: u64, exclude: bool) -> Result<ActivityView> {
        let updated = self
            .db
            .set_pace_exclusion(activity_id, exclude)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", activity_id)))?;
        Ok(ActivityView::from(&updated))
    }
}
