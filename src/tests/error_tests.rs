use crate::error::{ErrorContext, MondayError};
use crate::models::GraphQLError;
use crate::monday_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let monday_result = result.context("Failed to read config file");

    match monday_result {
        Err(MondayError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected MondayError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;

    match option.context("API token not found") {
        Err(MondayError::Unknown(msg)) => assert_eq!(msg, "API token not found"),
        _ => panic!("Expected MondayError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, MondayError> = Err(MondayError::Http {
        status: 502,
        body: "bad gateway".to_string(),
    });

    match result.with_context(|| format!("Fetching board {}", 42)) {
        Err(MondayError::Unknown(msg)) => {
            assert_eq!(msg, "Fetching board 42: HTTP error 502: bad gateway");
        }
        _ => panic!("Expected MondayError::Unknown"),
    }
}

#[test]
fn test_monday_error_macro() {
    match monday_error!(InvalidInput, "Bad column spec") {
        MondayError::InvalidInput(msg) => assert_eq!(msg, "Bad column spec"),
        _ => panic!("Expected MondayError::InvalidInput"),
    }

    match monday_error!(ConfigError, "Missing field: {}", "api_token") {
        MondayError::ConfigError(msg) => assert_eq!(msg, "Missing field: api_token"),
        _ => panic!("Expected MondayError::ConfigError"),
    }
}

#[test]
fn test_classification() {
    let api = MondayError::api(vec![GraphQLError::new("nope")], Some("1".to_string()));
    assert!(api.is_server_failure());
    assert!(!api.is_transport_fault());
    assert_eq!(api.server_errors()[0].message, "nope");
    assert_eq!(api.to_string(), "Monday API Error: nope");

    let http = MondayError::Http {
        status: 503,
        body: String::new(),
    };
    assert!(http.is_transport_fault());
    assert!(!http.is_server_failure());
    assert!(http.server_errors().is_empty());

    let exhausted = MondayError::RetriesExhausted {
        retries: 3,
        message: "timed out".to_string(),
    };
    assert_eq!(exhausted.to_string(), "Failed after 3 retries: timed out");
    assert!(exhausted.is_transport_fault());
    assert!(!exhausted.is_server_failure());
}

#[test]
fn test_api_error_without_messages_keeps_plain_text() {
    let api = MondayError::api(Vec::new(), None);
    assert_eq!(api.to_string(), "Monday API Error");
}

#[test]
fn test_context_keeps_server_messages() {
    let result: Result<(), MondayError> = Err(MondayError::api(
        vec![
            GraphQLError::new("Item not found"),
            GraphQLError::new("Board is archived"),
        ],
        Some("9876".to_string()),
    ));

    match result.with_context(|| "Fetching items 1, 2".to_string()) {
        Err(MondayError::Unknown(msg)) => assert_eq!(
            msg,
            "Fetching items 1, 2: Monday API Error: Item not found; Board is archived"
        ),
        _ => panic!("Expected MondayError::Unknown"),
    }
}
