// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-athlete breakdowns: sport totals, weekly points, zone time, and the
//! derived ratios used by comparisons.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, HeartRateZones};
use crate::scoring::points::total_points;
use crate::time_utils::format_utc_rfc3339;

/// Bucket for activities with no sport type.
pub const UNKNOWN_SPORT: &str = "Unknown";

/// Totals for one sport type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SportTotals {
    pub count: u32,
    pub points: f64,
    pub distance_m: f64,
    pub time_s: f64,
}

/// Seconds spent in each heart-rate zone across many activities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ZoneDistribution {
    pub zone_1: f64,
    pub zone_2: f64,
    pub zone_3: f64,
    pub zone_4: f64,
    pub zone_5: f64,
}

impl ZoneDistribution {
    fn add(&mut self, zones: &HeartRateZones) {
        self.zone_1 += zones.zone_1;
        self.zone_2 += zones.zone_2;
        self.zone_3 += zones.zone_3;
        self.zone_4 += zones.zone_4;
        self.zone_5 += zones.zone_5;
    }

    pub fn total(&self) -> f64 {
        self.zone_1 + self.zone_2 + self.zone_3 + self.zone_4 + self.zone_5
    }

    /// Share of zone time spent in zones 4 and 5, as a percentage.
    pub fn high_zone_ratio(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            (self.zone_4 + self.zone_5) / total * 100.0
        } else {
            0.0
        }
    }
}

/// Sport, weekly and zone breakdowns for one athlete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityBreakdown {
    pub sport_breakdown: BTreeMap<String, SportTotals>,
    /// Points per week, keyed by the week's Sunday ("YYYY-MM-DD")
    pub weekly_stats: BTreeMap<String, f64>,
    pub zone_distribution: ZoneDistribution,
}

impl ActivityBreakdown {
    pub fn from_activities(activities: &[Activity]) -> Self {
        let mut breakdown = Self::default();

        for activity in activities {
            let points = activity.points();

            let sport = activity
                .sport_type
                .clone()
                .unwrap_or_else(|| UNKNOWN_SPORT.to_string());
            let totals = breakdown.sport_breakdown.entry(sport).or_default();
            totals.count += 1;
            totals.points += points;
            totals.distance_m += activity.distance_meters;
            totals.time_s += activity.moving_time_seconds;

            let week = week_start(activity.start_date)
                .format("%Y-%m-%d")
                .to_string();
            *breakdown.weekly_stats.entry(week).or_insert(0.0) += points;

            if let Some(zones) = &activity.heart_rate_zones {
                breakdown.zone_distribution.add(zones);
            }
        }

        breakdown
    }

    pub fn week_count(&self) -> usize {
        self.weekly_stats.len()
    }
}

/// The Sunday that starts the week containing `date` (UTC).
pub fn week_start(date: DateTime<Utc>) -> NaiveDate {
    let day = date.date_naive();
    let offset = u64::from(day.weekday().num_days_from_sunday());
    day.checked_sub_days(Days::new(offset)).unwrap_or(day)
}

/// Activity flattened for display: zone seconds at top level, points parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityView {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub athlete_id: u64,
    pub name: String,
    pub sport_type: Option<String>,
    pub start_date: String,
    pub distance_meters: f64,
    pub moving_time_seconds: f64,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
    pub average_speed: Option<f64>,
    pub total_elevation_gain: Option<f64>,
    pub zone_points: f64,
    pub in_competition_window: bool,
    pub hidden: bool,
    pub exclude_from_pace_analysis: bool,
    pub zone_1: f64,
    pub zone_2: f64,
    pub zone_3: f64,
    pub zone_4: f64,
    pub zone_5: f64,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        let zones = activity.heart_rate_zones.unwrap_or_default();
        Self {
            id: activity.id,
            athlete_id: activity.athlete_id,
            name: activity.name.clone(),
            sport_type: activity.sport_type.clone(),
            start_date: format_utc_rfc3339(activity.start_date),
            distance_meters: activity.distance_meters,
            moving_time_seconds: activity.moving_time_seconds,
            average_heartrate: activity.average_heartrate,
            max_heartrate: activity.max_heartrate,
            average_speed: activity.average_speed,
            total_elevation_gain: activity.total_elevation_gain,
            zone_points: activity.points(),
            in_competition_window: activity.in_competition_window,
            hidden: activity.is_hidden(),
            exclude_from_pace_analysis: activity.exclude_from_pace_analysis,
            zone_1: zones.zone_1,
            zone_2: zones.zone_2,
            zone_3: zones.zone_3,
            zone_4: zones.zone_4,
            zone_5: zones.zone_5,
        }
    }
}

/// Most recent activities first, flattened, at most `limit` of them.
pub fn recent_activities(activities: &[Activity], limit: usize) -> Vec<ActivityView> {
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date).then_with(|| b.id.cmp(&a.id)));
    sorted
        .into_iter()
        .take(limit)
        .map(ActivityView::from)
        .collect()
}

/// Derived stats for one athlete, recomputed per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteStats {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub athlete_id: u64,
    pub total_points: f64,
    pub activity_count: usize,
    pub total_distance_m: f64,
    pub total_time_s: f64,
    pub week_count: usize,
    pub avg_points_per_week: f64,
    pub avg_points_per_activity: f64,
    pub active_days: usize,
    /// Active days over available days in the observed weeks. Not clamped.
    pub consistency: f64,
    pub high_zone_ratio: f64,
    #[serde(flatten)]
    pub breakdown: ActivityBreakdown,
}

impl AthleteStats {
    pub fn from_activities(athlete_id: u64, activities: &[Activity]) -> Self {
        let totals = total_points(activities);
        let breakdown = ActivityBreakdown::from_activities(activities);
        let week_count = breakdown.week_count();

        let active_days = activities
            .iter()
            .map(|a| a.start_date.date_naive())
            .collect::<HashSet<_>>()
            .len();

        let avg_points_per_activity = if totals.activity_count > 0 {
            totals.total_points / totals.activity_count as f64
        } else {
            0.0
        };

        let consistency = if week_count > 0 {
            active_days as f64 / (week_count as f64 * 7.0) * 100.0
        } else {
            0.0
        };

        Self {
            athlete_id,
            total_points: totals.total_points,
            activity_count: totals.activity_count,
            total_distance_m: activities.iter().map(|a| a.distance_meters).sum(),
            total_time_s: activities.iter().map(|a| a.moving_time_seconds).sum(),
            week_count,
            avg_points_per_week: totals.total_points / week_count.max(1) as f64,
            avg_points_per_activity,
            active_days,
            consistency,
            high_zone_ratio: breakdown.zone_distribution.high_zone_ratio(),
            breakdown,
        }
    }
}
