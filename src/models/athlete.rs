// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete model for storage and API.

use serde::{Deserialize, Serialize};

/// Athlete profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    /// Strava athlete ID (also used as document ID)
    pub id: u64,
    pub firstname: String,
    pub lastname: String,
    /// Profile picture URL
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Heart-rate zone settings used when zone points were computed
    #[serde(default)]
    pub heart_rate_zone_config: Option<HeartRateZoneConfig>,
}

impl Athlete {
    /// "First Last", trimmed when either part is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// Per-athlete heart-rate zone settings. Not interpreted by scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeartRateZoneConfig {
    #[serde(default)]
    pub max_hr: Option<u32>,
    #[serde(default)]
    pub resting_hr: Option<u32>,
    /// Upper bound (bpm) of zones 1-4
    #[serde(default)]
    pub zone_thresholds: Vec<u32>,
}
