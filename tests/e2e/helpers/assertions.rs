use serde_json::Value;

use super::CONTEXT_PATH;

/// Checks the Open Banking envelope and returns its `errors` items
pub fn assert_error_envelope<'a>(body: &'a Value, expected_code: &str, expected_message: &str) -> &'a Vec<Value> {
    assert_eq!(
        body.get("code").and_then(|v| v.as_str()),
        Some(expected_code),
        "Envelope code mismatch: {body}"
    );
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some(expected_message),
        "Envelope message mismatch: {body}"
    );

    let errors = body
        .get("errors")
        .and_then(|v| v.as_array())
        .expect("Missing errors array");
    assert!(!errors.is_empty(), "Envelope has no errors");

    for item in errors {
        assert_eq!(
            item.get("path").and_then(|v| v.as_str()),
            Some(CONTEXT_PATH),
            "Error item path should be the context path"
        );
    }

    errors
}

pub fn assert_error_item(item: &Value, expected_error_code: &str, expected_message: &str) {
    assert_eq!(
        item.get("errorCode").and_then(|v| v.as_str()),
        Some(expected_error_code),
        "Error code mismatch: {item}"
    );
    assert_eq!(
        item.get("message").and_then(|v| v.as_str()),
        Some(expected_message),
        "Error message mismatch: {item}"
    );
}
