// SPDX-License-Identifier: MIT

//! Error-to-status mapping tests.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use lingoleap::error::AppError;

#[test]
fn test_unauthorized_maps_to_401() {
    let response = AppError::Unauthorized.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = AppError::InvalidToken.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_conflict_maps_to_400() {
    // Duplicate registration is a 400 in the API contract, not a 409.
    let response = AppError::Conflict("Email already registered".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_bad_request_maps_to_400() {
    let response = AppError::BadRequest("bad".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_database_error_maps_to_500() {
    let response = AppError::Database("connection refused".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError::NotFound("user x".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
