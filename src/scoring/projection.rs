// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Competition timeline and end-of-competition point projections.
//!
//! Projections are a straight run-rate: points so far divided by whole days
//! elapsed, carried forward over the days that remain.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;
use crate::scoring::points::total_points;
use crate::scoring::round_to_tenth;
use crate::time_utils::format_utc_rfc3339;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Start and end instants of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Lifecycle of a competition relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionStatus {
    Upcoming,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub start_date: String,
    pub end_date: String,
    pub status: CompetitionStatus,
    pub has_started: bool,
    pub has_ended: bool,
    pub total_days: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub days_until_start: i64,
    pub progress_percent: f64,
}

/// Days between two instants, as a fraction.
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

impl Timeline {
    pub fn at(window: &CompetitionWindow, now: DateTime<Utc>) -> Self {
        let CompetitionWindow { start, end } = *window;
        let has_started = now >= start;
        let has_ended = now > end;

        let total_days = days_between(start, end).ceil() as i64;

        let days_elapsed = if has_started {
            days_between(start, now).floor() as i64
        } else {
            0
        };

        let days_remaining = if has_ended {
            0
        } else if has_started {
            days_between(now, end).ceil() as i64
        } else {
            total_days
        };

        let days_until_start = if has_started {
            0
        } else {
            days_between(now, start).ceil() as i64
        };

        let progress_percent = if has_ended {
            100.0
        } else if has_started {
            let span = days_between(start, end);
            let progress = if span > 0.0 {
                days_between(start, now) / span * 100.0
            } else {
                100.0
            };
            round_to_tenth(progress.clamp(0.0, 100.0))
        } else {
            0.0
        };

        let status = if has_ended {
            CompetitionStatus::Completed
        } else if has_started {
            CompetitionStatus::Active
        } else {
            CompetitionStatus::Upcoming
        };

        Self {
            start_date: format_utc_rfc3339(start),
            end_date: format_utc_rfc3339(end),
            status,
            has_started,
            has_ended,
            total_days,
            days_elapsed,
            days_remaining,
            days_until_start,
            progress_percent,
        }
    }
}

/// One athlete's activities as input to [`project`].
#[derive(Debug, Clone)]
pub struct AthleteHistory<'a> {
    pub athlete_id: u64,
    pub name: String,
    pub activities: &'a [Activity],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProjection {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub athlete_id: u64,
    pub name: String,
    pub current_points: f64,
    pub points_per_day: f64,
    pub projected_final_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProjectionReport {
    pub timeline: Timeline,
    /// Ranked by projected final points
    pub projections: Vec<AthleteProjection>,
    /// Ranked by points so far
    pub current_standings: Vec<AthleteProjection>,
}

/// Project every athlete's final total at `now`.
///
/// Uses each athlete's full activity history as given; callers do not
/// scope the input.
pub fn project(
    window: &CompetitionWindow,
    now: DateTime<Utc>,
    athletes: &[AthleteHistory<'_>],
) -> ProjectionReport {
    let timeline = Timeline::at(window, now);

    let entries: Vec<AthleteProjection> = athletes
        .iter()
        .map(|athlete| {
            let current_points = total_points(athlete.activities).total_points;

            let points_per_day =
                if timeline.has_started && timeline.days_elapsed > 0 && current_points > 0.0 {
                    current_points / timeline.days_elapsed as f64
                } else {
                    0.0
                };

            let projected_final_points = if timeline.has_ended {
                current_points
            } else {
                current_points + points_per_day * timeline.days_remaining as f64
            };

            AthleteProjection {
                athlete_id: athlete.athlete_id,
                name: athlete.name.clone(),
                current_points,
                points_per_day,
                projected_final_points,
            }
        })
        .collect();

    // sort_by is stable, so ties keep roster order.
    let mut projections = entries.clone();
    projections.sort_by(|a, b| b.projected_final_points.total_cmp(&a.projected_final_points));

    let mut current_standings = entries;
    current_standings.sort_by(|a, b| b.current_points.total_cmp(&a.current_points));

    ProjectionReport {
        timeline,
        projections,
        current_standings,
    }
}
