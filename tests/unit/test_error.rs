use finnhub_client::error::{AppError, ErrorKind};
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_unknown_exchange() {
    let error = AppError::UnknownExchange("MARS".to_string());
    assert_eq!(error.to_string(), "unknown exchange: MARS");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad base url".to_string());
    assert_eq!(error.to_string(), "invalid input: bad base url");
}

// Note: reqwest::Error cannot be easily constructed in tests
// This conversion is tested through the client error tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(ref e) => assert!(app_error.source().is_some() && e.is_syntax()),
        _ => panic!("Expected Json error"),
    }
    assert_eq!(app_error.kind(), ErrorKind::Decode);
}

#[test]
fn test_app_error_kinds() {
    assert_eq!(AppError::Unauthorized.kind(), ErrorKind::Transport);
    assert_eq!(AppError::RateLimitExceeded.kind(), ErrorKind::Transport);
    assert_eq!(
        AppError::Unexpected(StatusCode::BAD_GATEWAY).kind(),
        ErrorKind::Transport
    );
    assert_eq!(
        AppError::UnknownExchange("X".to_string()).kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        AppError::InvalidInput("X".to_string()).kind(),
        ErrorKind::InvalidArgument
    );
    assert!(AppError::Unauthorized.source().is_none());
}
