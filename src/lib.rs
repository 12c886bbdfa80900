// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Zone Challenge: heart-rate zone points competition tracker.
//!
//! This crate provides the backend API for competition leaderboards,
//! athlete summaries, head-to-head comparisons and end-of-competition
//! projections. The `scoring` module holds the pure analytics engine; the
//! rest loads data from Firestore and serves it over HTTP.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::StandingsService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub standings: StandingsService,
}

impl AppState {
    pub fn new(config: Config, db: FirestoreDb) -> Self {
        Self {
            config,
            standings: StandingsService::new(db),
        }
    }
}
