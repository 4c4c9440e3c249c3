//! Unit tests for domain error types

use mme_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("provider");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "provider"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("chunk size must be positive");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "chunk size must be positive"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_contract_violation_error() {
    let error = Error::contract_violation("expected 2 records, got 1");
    assert_eq!(
        error.to_string(),
        "Contract violation: expected 2 records, got 1"
    );
}

#[test]
fn test_empty_result_error() {
    let error = Error::empty_result("nothing came back");
    assert!(matches!(error, Error::EmptyResult { .. }));
    assert!(error.to_string().contains("nothing came back"));
}

#[test]
fn test_transport_error_with_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
    let error = Error::transport_with_source("request failed", io_error);

    assert!(error.is_transport());
    match &error {
        Error::Transport { message, source } => {
            assert_eq!(message, "request failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Transport error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("missing api_key");
    assert!(!error.is_transport());
    assert_eq!(error.to_string(), "Configuration error: missing api_key");
}

#[test]
fn test_json_error_conversion() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse_error.into();
    assert!(matches!(error, Error::Json { .. }));
}
