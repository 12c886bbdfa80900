// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model for storage and scoring.
//!
//! Firestore documents are read as [`ActivityRecord`] and converted into the
//! normalized [`Activity`] before anything outside the `db` module sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::numeric::{lenient_f64, lenient_opt_f64, RawNumber};

/// Seconds spent in each of the five heart-rate zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZones {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub zone_1: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub zone_2: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub zone_3: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub zone_4: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub zone_5: f64,
}

/// Heart-rate zone breakdown as it may appear in storage.
///
/// Older sync jobs wrote the breakdown as a one-element array. Anything
/// else is kept as stored and read as no breakdown.
///
/// `List` must come first: a struct with defaulted fields also accepts
/// a sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredZones {
    List(Vec<HeartRateZones>),
    Single(HeartRateZones),
    Other(serde_json::Value),
}

impl StoredZones {
    /// Collapse either storage shape into zero-or-one breakdown.
    pub fn into_single(self) -> Option<HeartRateZones> {
        match self {
            StoredZones::List(list) => list.into_iter().next(),
            StoredZones::Single(zones) => Some(zones),
            StoredZones::Other(_) => None,
        }
    }
}

/// Activity document as stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Strava activity ID (also used as document ID)
    pub id: u64,
    /// Owning athlete
    pub athlete_id: u64,
    #[serde(default)]
    pub name: String,
    /// Sport type (Ride, Run, WeightTraining, etc.)
    #[serde(default)]
    pub sport_type: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance_meters: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub moving_time_seconds: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub average_heartrate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub max_heartrate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub average_speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub total_elevation_gain: Option<f64>,
    /// Pre-computed score; some sync paths wrote it as text
    #[serde(default)]
    pub zone_points: Option<RawNumber>,
    #[serde(default)]
    pub in_competition_window: bool,
    #[serde(default)]
    pub hidden: Option<bool>,
    #[serde(default)]
    pub exclude_from_pace_analysis: bool,
    #[serde(default)]
    pub heart_rate_zones: Option<StoredZones>,
}

/// Normalized activity used by the scoring engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: u64,
    pub athlete_id: u64,
    pub name: String,
    pub sport_type: Option<String>,
    pub start_date: DateTime<Utc>,
    pub distance_meters: f64,
    pub moving_time_seconds: f64,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
    pub average_speed: Option<f64>,
    pub total_elevation_gain: Option<f64>,
    pub zone_points: Option<RawNumber>,
    pub in_competition_window: bool,
    pub hidden: Option<bool>,
    pub exclude_from_pace_analysis: bool,
    pub heart_rate_zones: Option<HeartRateZones>,
}

impl Activity {
    /// Zone points as a number; anything unparsable counts as zero.
    pub fn points(&self) -> f64 {
        crate::scoring::numeric::parse_or_zero(self.zone_points.as_ref())
    }

    /// `None` and `Some(false)` both mean visible.
    pub fn is_hidden(&self) -> bool {
        self.hidden == Some(true)
    }
}

impl From<ActivityRecord> for Activity {
    fn from(record: ActivityRecord) -> Self {
        Self {
            id: record.id,
            athlete_id: record.athlete_id,
            name: record.name,
            sport_type: record.sport_type,
            start_date: record.start_date,
            distance_meters: record.distance_meters,
            moving_time_seconds: record.moving_time_seconds,
            average_heartrate: record.average_heartrate,
            max_heartrate: record.max_heartrate,
            average_speed: record.average_speed,
            total_elevation_gain: record.total_elevation_gain,
            zone_points: record.zone_points,
            in_competition_window: record.in_competition_window,
            hidden: record.hidden,
            exclude_from_pace_analysis: record.exclude_from_pace_analysis,
            heart_rate_zones: record.heart_rate_zones.and_then(StoredZones::into_single),
        }
    }
}

impl From<&Activity> for ActivityRecord {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            athlete_id: activity.athlete_id,
            name: activity.name.clone(),
            sport_type: activity.sport_type.clone(),
            start_date: activity.start_date,
            distance_meters: activity.distance_meters,
            moving_time_seconds: activity.moving_time_seconds,
            average_heartrate: activity.average_heartrate,
            max_heartrate: activity.max_heartrate,
            average_speed: activity.average_speed,
            total_elevation_gain: activity.total_elevation_gain,
            zone_points: activity.zone_points.clone(),
            in_competition_window: activity.in_competition_window,
            hidden: activity.hidden,
            exclude_from_pace_analysis: activity.exclude_from_pace_analysis,
            heart_rate_zones: activity.heart_rate_zones.map(StoredZones::Single),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(zones: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "athlete_id": 7,
            "name": "Morning Ride",
            "sport_type": "Ride",
            "start_date": "2026-01-05T08:00:00Z",
            "distance_meters": 20000.0,
            "moving_time_seconds": 3600.0,
            "zone_points": "12.5",
            "in_competition_window": true,
            "heart_rate_zones": zones
        })
    }

    #[test]
    fn test_single_zone_record_is_kept() {
        let json = record_json(serde_json::json!({
            "zone_1": 60.0, "zone_2": 120.0, "zone_3": 0.0, "zone_4": 30.0, "zone_5": 10.0
        }));
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        let activity = Activity::from(record);

        let zones = activity.heart_rate_zones.unwrap();
        assert_eq!(zones.zone_2, 120.0);
        assert_eq!(zones.zone_5, 10.0);
    }

    #[test]
    fn test_zone_list_collapses_to_first_element() {
        let json = record_json(serde_json::json!([
            { "zone_1": 5.0, "zone_2": 0.0, "zone_3": 0.0, "zone_4": 0.0, "zone_5": 1.0 }
        ]));
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        let activity = Activity::from(record);

        assert_eq!(activity.heart_rate_zones.unwrap().zone_5, 1.0);
    }

    #[test]
    fn test_empty_zone_list_means_no_breakdown() {
        let record: ActivityRecord =
            serde_json::from_value(record_json(serde_json::json!([]))).unwrap();
        assert!(Activity::from(record).heart_rate_zones.is_none());

        let record: ActivityRecord =
            serde_json::from_value(record_json(serde_json::Value::Null)).unwrap();
        assert!(Activity::from(record).heart_rate_zones.is_none());
    }

    #[test]
    fn test_text_zone_points_parse() {
        let record: ActivityRecord =
            serde_json::from_value(record_json(serde_json::Value::Null)).unwrap();
        assert_eq!(Activity::from(record).points(), 12.5);
    }

    #[test]
    fn test_missing_flags_default_to_visible_and_outside_window() {
        let json = serde_json::json!({
            "id": 2,
            "athlete_id": 7,
            "start_date": "2026-01-05T08:00:00Z"
        });
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        let activity = Activity::from(record);

        assert!(!activity.in_competition_window);
        assert!(!activity.is_hidden());
        assert!(!activity.exclude_from_pace_analysis);
        assert_eq!(activity.points(), 0.0);
        assert!(activity.sport_type.is_none());
    }

    #[test]
    fn test_text_zone_seconds_are_parsed() {
        let json = record_json(serde_json::json!({
            "zone_1": "60", "zone_2": " 120.5 ", "zone_3": "n/a", "zone_4": 30, "zone_5": true
        }));
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        let zones = Activity::from(record).heart_rate_zones.unwrap();

        assert_eq!(zones.zone_1, 60.0);
        assert_eq!(zones.zone_2, 120.5);
        assert_eq!(zones.zone_3, 0.0);
        assert_eq!(zones.zone_4, 30.0);
        assert_eq!(zones.zone_5, 0.0);
    }

    #[test]
    fn test_text_zone_seconds_inside_list() {
        let json = record_json(serde_json::json!([
            { "zone_1": "15", "zone_2": 0, "zone_3": 0, "zone_4": "4.5", "zone_5": null }
        ]));
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        let zones = Activity::from(record).heart_rate_zones.unwrap();

        assert_eq!(zones.zone_1, 15.0);
        assert_eq!(zones.zone_4, 4.5);
        assert_eq!(zones.zone_5, 0.0);
    }

    #[test]
    fn test_unrecognized_zone_value_means_no_breakdown() {
        let record: ActivityRecord =
            serde_json::from_value(record_json(serde_json::json!("n/a"))).unwrap();
        assert!(Activity::from(record).heart_rate_zones.is_none());
    }

    #[test]
    fn test_text_and_odd_numeric_fields_are_lenient() {
        let json = serde_json::json!({
            "id": 3,
            "athlete_id": 7,
            "start_date": "2026-01-05T08:00:00Z",
            "distance_meters": "5000",
            "moving_time_seconds": "1800 s",
            "average_heartrate": "142",
            "max_heartrate": null,
            "average_speed": false,
            "total_elevation_gain": " 12.5 ",
            "zone_points": true
        });
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        let activity = Activity::from(record);

        assert_eq!(activity.distance_meters, 5000.0);
        assert_eq!(activity.moving_time_seconds, 0.0);
        assert_eq!(activity.average_heartrate, Some(142.0));
        assert_eq!(activity.max_heartrate, None);
        assert_eq!(activity.average_speed, Some(0.0));
        assert_eq!(activity.total_elevation_gain, Some(12.5));
        assert_eq!(activity.points(), 0.0);
    }

    #[test]
    fn test_one_odd_document_does_not_fail_the_batch() {
        let json = serde_json::json!([
            record_json(serde_json::Value::Null),
            {
                "id": 2,
                "athlete_id": 7,
                "start_date": "2026-01-06T08:00:00Z",
                "moving_time_seconds": "1800",
                "zone_points": 4
            }
        ]);
        let records: Vec<ActivityRecord> = serde_json::from_value(json).unwrap();
        let activities: Vec<Activity> = records.into_iter().map(Activity::from).collect();

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[1].moving_time_seconds, 1800.0);
        assert_eq!(activities[0].points() + activities[1].points(), 16.5);
    }
}
