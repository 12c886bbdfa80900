// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Which activities count for a given view.

use crate::models::Activity;

/// Activity selection policy, applied once before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityScope {
    /// Inside the competition window and not hidden. Leaderboard, summary
    /// and comparison views use this.
    Competition,
    /// Everything the athlete ever synced. Projections and exports.
    FullHistory,
}

impl ActivityScope {
    pub fn includes(self, activity: &Activity) -> bool {
        match self {
            ActivityScope::Competition => activity.in_competition_window && !activity.is_hidden(),
            ActivityScope::FullHistory => true,
        }
    }

    /// Keep only the activities this scope counts.
    pub fn apply(self, activities: Vec<Activity>) -> Vec<Activity> {
        activities
            .into_iter()
            .filter(|a| self.includes(a))
            .collect()
    }
}
