// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use zone_challenge::config::Config;
use zone_challenge::db::FirestoreDb;
use zone_challenge::models::{Activity, HeartRateZones};
use zone_challenge::routes::create_router;
use zone_challenge::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by an offline database.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        FirestoreDb::new_mock(),
    ));
    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
}

/// A visible, in-window activity with the given points.
#[allow(dead_code)]
pub fn make_activity(id: u64, athlete_id: u64, sport: Option<&str>, points: f64) -> Activity {
    Activity {
        id,
        athlete_id,
        name: format!("Test Activity {}", id),
        sport_type: sport.map(String::from),
        start_date: utc(2026, 1, 5),
        distance_meters: 1000.0,
        moving_time_seconds: 600.0,
        average_heartrate: Some(140.0),
        max_heartrate: Some(170.0),
        average_speed: Some(1.6),
        total_elevation_gain: None,
        zone_points: Some(points.into()),
        in_competition_window: true,
        hidden: None,
        exclude_from_pace_analysis: false,
        heart_rate_zones: Some(HeartRateZones {
            zone_1: 120.0,
            zone_2: 240.0,
            zone_3: 120.0,
            zone_4: 90.0,
            zone_5: 30.0,
        }),
    }
}
