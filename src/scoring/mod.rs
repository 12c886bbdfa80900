// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scoring and analytics engine.
//!
//! Everything in here is a pure function of activity records already loaded
//! into memory: no I/O, no clock reads, no logging. The service layer loads
//! records, picks an [`ActivityScope`] and hands the result to these
//! functions.

pub mod breakdown;
pub mod comparison;
pub mod filter;
pub mod numeric;
pub mod points;
pub mod projection;
#[cfg(test)]
pub(crate) mod testing;

pub use breakdown::{ActivityBreakdown, ActivityView, AthleteStats, SportTotals, ZoneDistribution};
pub use comparison::{compare, Comparison, ComparisonMetric, MetricKind};
pub use filter::ActivityScope;
pub use points::{total_points, PointsTotal};
pub use projection::{
    project, AthleteHistory, AthleteProjection, CompetitionStatus, CompetitionWindow,
    ProjectionReport, Timeline,
};

/// Errors surfaced by the scoring engine.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScoringError {
    #[error("Athlete not found: {0}")]
    NotFound(String),
}

/// Round to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
