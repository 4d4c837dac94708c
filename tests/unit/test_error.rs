use admin_http::error::AppError;
use admin_http::model::outcome::{Rejection, RequestError, TransportError, TransportErrorKind};
use admin_http::model::response::HttpResponse;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("timeout must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: timeout must be positive");
}

#[test]
fn test_app_error_display_shared_client() {
    assert_eq!(
        AppError::AlreadyInitialized.to_string(),
        "shared client already initialized"
    );
    assert_eq!(
        AppError::NotInitialized.to_string(),
        "shared client not initialized"
    );
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => assert!(app_error.source().is_some()),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("disk full").into();

    match &app_error {
        AppError::Io(_) => assert_eq!(app_error.to_string(), "io error: disk full"),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_transport_error_display() {
    let error = TransportError::new(TransportErrorKind::Timeout, "after 12s");
    assert_eq!(error.to_string(), "timeout error: after 12s");
    let error = TransportError::new(TransportErrorKind::Connect, "refused");
    assert_eq!(error.to_string(), "connect error: refused");
}

#[test]
fn test_transport_error_without_cause() {
    let error = TransportError::new(TransportErrorKind::Body, "truncated");
    assert!(std::error::Error::source(&error).is_none());
    assert!(error.reqwest_error().is_none());
    assert_eq!(error.clone(), error);
}

#[test]
fn test_rejection_display() {
    let rejection = Rejection::Status(HttpResponse::new(StatusCode::FORBIDDEN, Vec::new()));
    assert!(rejection.to_string().contains("403"));

    let rejection = Rejection::Request(RequestError::InvalidHeader("authorization".to_string()));
    assert_eq!(
        rejection.to_string(),
        "request not sent: invalid header: authorization"
    );

    assert_eq!(Rejection::Suppressed.to_string(), "suppressed while offline");
}

#[test]
fn test_rejection_status_only_for_responses() {
    let rejection = Rejection::Transport(TransportError::new(TransportErrorKind::Other, "x"));
    assert_eq!(rejection.status(), None);
    assert!(rejection.response().is_none());

    let rejection = Rejection::Status(HttpResponse::new(StatusCode::CONFLICT, Vec::new()));
    assert_eq!(rejection.status(), Some(StatusCode::CONFLICT));
}
