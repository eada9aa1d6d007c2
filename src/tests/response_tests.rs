use serde_json::{json, Value};

use crate::models::{ApiOutcome, GraphQLError, RawResponse};

fn parse(body: Value) -> RawResponse {
    serde_json::from_value(body).unwrap()
}

#[test]
fn test_data_response() {
    let outcome = parse(json!({ "data": { "items": [] }, "account_id": 1 })).into_outcome();
    assert_eq!(outcome, ApiOutcome::Data(json!({ "items": [] })));
}

#[test]
fn test_error_response_keeps_details() {
    let response = parse(json!({
        "errors": [{
            "message": "Complexity budget exhausted",
            "locations": [{ "line": 1, "column": 3 }],
            "extensions": { "code": "ComplexityException" }
        }],
        "account_id": 12345
    }));

    match response.into_outcome() {
        ApiOutcome::Errors { errors, account_id } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "Complexity budget exhausted");
            assert_eq!(errors[0].details["extensions"]["code"], json!("ComplexityException"));
            assert_eq!(account_id.as_deref(), Some("12345"));
        }
        other => panic!("Expected errors, got {:?}", other),
    }
}

#[test]
fn test_account_id_as_string() {
    let response = parse(json!({ "data": null, "account_id": "abc" }));
    assert_eq!(response.account_id.as_deref(), Some("abc"));
}

#[test]
fn test_empty_error_list_counts_as_success() {
    let outcome = parse(json!({ "data": { "ok": true }, "errors": [] })).into_outcome();
    assert_eq!(outcome, ApiOutcome::Data(json!({ "ok": true })));
}

#[test]
fn test_empty_body_is_null_data() {
    assert_eq!(parse(json!({})).into_outcome(), ApiOutcome::Data(Value::Null));
}

#[test]
fn test_error_without_message() {
    let response = parse(json!({ "errors": [{ "code": "X" }] }));
    let errors = response.errors.unwrap();
    assert_eq!(errors[0], GraphQLError {
        message: String::new(),
        details: serde_json::from_value(json!({ "code": "X" })).unwrap(),
    });
}
