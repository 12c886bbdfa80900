// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Head-to-head comparison of two athletes.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::scoring::breakdown::AthleteStats;
use crate::scoring::ScoringError;

/// Metrics compared, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    TotalPoints,
    ActivityCount,
    PointsPerWeek,
    PointsPerActivity,
    Consistency,
    HighZonePercent,
    TotalDistance,
    TotalTime,
}

impl MetricKind {
    pub const ALL: [MetricKind; 8] = [
        MetricKind::TotalPoints,
        MetricKind::ActivityCount,
        MetricKind::PointsPerWeek,
        MetricKind::PointsPerActivity,
        MetricKind::Consistency,
        MetricKind::HighZonePercent,
        MetricKind::TotalDistance,
        MetricKind::TotalTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::TotalPoints => "Total Points",
            MetricKind::ActivityCount => "Activities",
            MetricKind::PointsPerWeek => "Points / Week",
            MetricKind::PointsPerActivity => "Points / Activity",
            MetricKind::Consistency => "Consistency %",
            MetricKind::HighZonePercent => "High Zone %",
            MetricKind::TotalDistance => "Total Distance (m)",
            MetricKind::TotalTime => "Total Time (s)",
        }
    }

    fn value(self, stats: &AthleteStats) -> f64 {
        match self {
            MetricKind::TotalPoints => stats.total_points,
            MetricKind::ActivityCount => stats.activity_count as f64,
            MetricKind::PointsPerWeek => stats.avg_points_per_week,
            MetricKind::PointsPerActivity => stats.avg_points_per_activity,
            MetricKind::Consistency => stats.consistency,
            MetricKind::HighZonePercent => stats.high_zone_ratio,
            MetricKind::TotalDistance => stats.total_distance_m,
            MetricKind::TotalTime => stats.total_time_s,
        }
    }
}

/// One compared metric. `winner` is 1 or 2, or `None` on a tie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetric {
    pub metric: MetricKind,
    pub label: String,
    pub athlete1: f64,
    pub athlete2: f64,
    pub winner: Option<u8>,
    pub diff_percent: f64,
}

impl ComparisonMetric {
    fn new(metric: MetricKind, athlete1: f64, athlete2: f64) -> Self {
        let (winner, diff_percent) = if athlete1 > athlete2 {
            (Some(1), percent_gap(athlete1, athlete2))
        } else if athlete2 > athlete1 {
            (Some(2), percent_gap(athlete2, athlete1))
        } else {
            (None, 0.0)
        };

        Self {
            metric,
            label: metric.label().to_string(),
            athlete1,
            athlete2,
            winner,
            diff_percent,
        }
    }
}

/// Gap of the winner over the loser; a zero loser counts as a 100% gap.
fn percent_gap(winner: f64, loser: f64) -> f64 {
    if loser == 0.0 {
        100.0
    } else {
        (winner - loser) / loser * 100.0
    }
}

/// Full head-to-head result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub metrics: Vec<ComparisonMetric>,
    pub athlete1_wins: u32,
    pub athlete2_wins: u32,
    pub overall_leader: Option<u8>,
}

/// Compare two athletes metric by metric.
///
/// Fails with [`ScoringError::NotFound`] if either side is missing.
pub fn compare(
    first: Option<&AthleteStats>,
    second: Option<&AthleteStats>,
) -> Result<Comparison, ScoringError> {
    let first = first.ok_or_else(|| ScoringError::NotFound("athlete1".to_string()))?;
    let second = second.ok_or_else(|| ScoringError::NotFound("athlete2".to_string()))?;

    let metrics: Vec<ComparisonMetric> = MetricKind::ALL
        .iter()
        .map(|&kind| ComparisonMetric::new(kind, kind.value(first), kind.value(second)))
        .collect();

    let athlete1_wins = metrics.iter().filter(|m| m.winner == Some(1)).count() as u32;
    let athlete2_wins = metrics.iter().filter(|m| m.winner == Some(2)).count() as u32;

    let overall_leader = match athlete1_wins.cmp(&athlete2_wins) {
        std::cmp::Ordering::Greater => Some(1),
        std::cmp::Ordering::Less => Some(2),
        std::cmp::Ordering::Equal => None,
    };

    Ok(Comparison {
        metrics,
        athlete1_wins,
        athlete2_wins,
        overall_leader,
    })
}
