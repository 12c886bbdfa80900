// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use zone_challenge::error::AppError;
use zone_challenge::scoring::ScoringError;

#[test]
fn test_scoring_not_found_maps_to_404() {
    let err = AppError::from(ScoringError::NotFound("athlete2".to_string()));
    assert!(matches!(err, AppError::NotFound(ref what) if what == "athlete2"));
    assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "not_found"));
}

#[test]
fn test_status_codes() {
    let cases = [
        (AppError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (
            AppError::Database("down".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::NotFound("Athlete 9 not found".to_string()),
            StatusCode::NOT_FOUND,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}
