// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod competition;

pub use activity::{Activity, ActivityRecord, HeartRateZones, StoredZones};
pub use athlete::{Athlete, HeartRateZoneConfig};
pub use competition::CompetitionConfig;
