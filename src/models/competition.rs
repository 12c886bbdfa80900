// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Competition configuration and selection of the current competition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::projection::CompetitionWindow;

/// Competition configuration stored in Firestore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionConfig {
    /// Document ID
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CompetitionConfig {
    pub fn window(&self) -> CompetitionWindow {
        CompetitionWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }

    fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    /// Pick the competition that applies at `now`.
    ///
    /// Among active configs whose window contains `now`, the shortest window
    /// wins, then the latest start. With no running competition, the next
    /// upcoming one is chosen, and failing that the most recently ended one.
    pub fn select_current(
        configs: &[CompetitionConfig],
        now: DateTime<Utc>,
    ) -> Option<&CompetitionConfig> {
        let active = || configs.iter().filter(|c| c.active);

        let running = active().filter(|c| c.contains(now)).min_by(|a, b| {
            let a_len = a.end_date - a.start_date;
            let b_len = b.end_date - b.start_date;
            a_len
                .cmp(&b_len)
                .then_with(|| b.start_date.cmp(&a.start_date))
        });
        if running.is_some() {
            return running;
        }

        let upcoming = active()
            .filter(|c| c.start_date > now)
            .min_by_key(|c| c.start_date);
        if upcoming.is_some() {
            return upcoming;
        }

        active()
            .filter(|c| c.end_date < now)
            .max_by_key(|c| c.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> CompetitionConfig {
        CompetitionConfig {
            id: id.to_string(),
            name: format!("Challenge {}", id),
            start_date: Utc.with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(end.0, end.1, end.2, 0, 0, 0).unwrap(),
            active: true,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_shortest_containing_window_wins() {
        let configs = vec![
            config("season", (2026, 1, 1), (2026, 12, 31)),
            config("spring", (2026, 3, 1), (2026, 5, 31)),
        ];

        let selected = CompetitionConfig::select_current(&configs, at(2026, 4, 1)).unwrap();
        assert_eq!(selected.id, "spring");

        let selected = CompetitionConfig::select_current(&configs, at(2026, 7, 1)).unwrap();
        assert_eq!(selected.id, "season");
    }

    #[test]
    fn test_inactive_configs_are_skipped() {
        let mut spring = config("spring", (2026, 3, 1), (2026, 5, 31));
        spring.active = false;
        let configs = vec![config("season", (2026, 1, 1), (2026, 12, 31)), spring];

        let selected = CompetitionConfig::select_current(&configs, at(2026, 4, 1)).unwrap();
        assert_eq!(selected.id, "season");
    }

    #[test]
    fn test_falls_back_to_upcoming_then_ended() {
        let configs = vec![
            config("old", (2025, 1, 1), (2025, 3, 1)),
            config("next", (2026, 9, 1), (2026, 10, 1)),
            config("later", (2027, 1, 1), (2027, 2, 1)),
        ];
        let selected = CompetitionConfig::select_current(&configs, at(2026, 6, 1)).unwrap();
        assert_eq!(selected.id, "next");

        let selected = CompetitionConfig::select_current(&configs, at(2027, 6, 1)).unwrap();
        assert_eq!(selected.id, "later");
    }

    #[test]
    fn test_no_configs() {
        assert!(CompetitionConfig::select_current(&[], at(2026, 1, 1)).is_none());
    }
}
