// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Points totals.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;

/// Point total and activity count for one athlete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PointsTotal {
    pub total_points: f64,
    pub activity_count: usize,
}

/// Sum zone points over already-scoped activities.
pub fn total_points<'a, I>(activities: I) -> PointsTotal
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities
        .into_iter()
        .fold(PointsTotal::default(), |mut acc, activity| {
            acc.total_points += activity.points();
            acc.activity_count += 1;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testing::{activity, with_points};

    #[test]
    fn test_sums_mixed_representations() {
        let activities = vec![
            with_points(activity(1, 1), 10.0),
            with_points(activity(2, 1), "5.5"),
            with_points(activity(3, 1), "oops"),
            activity(4, 1),
        ];

        let total = total_points(&activities);
        assert_eq!(total.total_points, 15.5);
        assert_eq!(total.activity_count, 4);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut activities = vec![
            with_points(activity(1, 1), 1.5),
            with_points(activity(2, 1), "2"),
            with_points(activity(3, 1), 3.25),
        ];
        let forward = total_points(&activities);
        activities.reverse();
        assert_eq!(total_points(&activities), forward);
    }

    #[test]
    fn test_empty() {
        let activities: Vec<Activity> = Vec::new();
        let total = total_points(&activities);
        assert_eq!(total.total_points, 0.0);
        assert_eq!(total.activity_count, 0);
    }
}
