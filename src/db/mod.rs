// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const ATHLETES: &str = "athletes";
    pub const ACTIVITIES: &str = "activities";
    /// Competition windows (name, start, end, active flag)
    pub const COMPETITIONS: &str = "competitions";
}
