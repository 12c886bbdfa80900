// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity fixtures shared by the scoring unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Activity, HeartRateZones};
use crate::scoring::numeric::RawNumber;

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// A visible, in-window activity worth no points.
pub fn activity(id: u64, athlete_id: u64) -> Activity {
    Activity {
        id,
        athlete_id,
        name: format!("Test Activity {}", id),
        sport_type: Some("Run".to_string()),
        start_date: utc(2026, 1, 5, 8),
        distance_meters: 0.0,
        moving_time_seconds: 0.0,
        average_heartrate: None,
        max_heartrate: None,
        average_speed: None,
        total_elevation_gain: None,
        zone_points: None,
        in_competition_window: true,
        hidden: None,
        exclude_from_pace_analysis: false,
        heart_rate_zones: None,
    }
}

pub fn with_points(mut activity: Activity, points: impl Into<RawNumber>) -> Activity {
    activity.zone_points = Some(points.into());
    activity
}

pub fn with_zones(mut activity: Activity, zones: [f64; 5]) -> Activity {
    activity.heart_rate_zones = Some(HeartRateZones {
        zone_1: zones[0],
        zone_2: zones[1],
        zone_3: zones[2],
        zone_4: zones[3],
        zone_5: zones[4],
    });
    activity
}
