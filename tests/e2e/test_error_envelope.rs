use crate::e2e::helpers;

use helpers::api_client::CONFIRMATION_PATH;
use helpers::assertions::{assert_error_envelope, assert_error_item};
use helpers::{
    valid_request, TestContext, UnreachableUpstreamContext, FAILING_ACCOUNT, FINANCIAL_ID,
    PERSONAL_ACCOUNT,
};
use hyper::{Method, StatusCode};
use serde_json::json;
use test_context::test_context;

const JSON_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("x-fapi-financial-id", FINANCIAL_ID),
];

fn body(value: serde_json::Value) -> Option<Vec<u8>> {
    Some(serde_json::to_vec(&value).unwrap())
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_content_type(ctx: &TestContext) {
    let response = ctx
        .client
        .request(
            Method::POST,
            CONFIRMATION_PATH,
            &[("Content-Type", "text/plain"), ("x-fapi-financial-id", FINANCIAL_ID)],
            body(valid_request(PERSONAL_ACCOUNT, "Jane Doe", "Personal")),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "400", "Bad Request");
    assert_eq!(errors.len(), 1);
    assert_error_item(&errors[0], "HEADER_INVALID", "Bad Request");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unacceptable_accept_header(ctx: &TestContext) {
    let response = ctx
        .client
        .request(
            Method::POST,
            CONFIRMATION_PATH,
            &[
                ("Content-Type", "application/json"),
                ("Accept", "application/xml"),
                ("x-fapi-financial-id", FINANCIAL_ID),
            ],
            body(valid_request(PERSONAL_ACCOUNT, "Jane Doe", "Personal")),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_ACCEPTABLE)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "406", "Not Acceptable");
    assert_error_item(&errors[0], "HEADER_INVALID", "Not Acceptable");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_one_item_per_invalid_field(ctx: &TestContext) {
    let response = ctx
        .client
        .confirm(&json!({
            "data": {
                "schemeName": "IBAN",
                "accountType": "Personal",
                "identification": "20-00-00-55555555",
                "name": "Jane Doe"
            }
        }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "400", "Bad Request");
    assert_eq!(errors.len(), 2);
    assert_error_item(&errors[0], "INVALID_FIELD", "this field schemeName is invalid");
    assert_error_item(&errors[1], "INVALID_FIELD", "this field identification is invalid");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_missing_fields(ctx: &TestContext) {
    let response = ctx
        .client
        .confirm(&json!({
            "data": {
                "schemeName": "SortCodeAccountNumber",
                "identification": "20000055555555",
                "name": "  "
            }
        }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    let errors = assert_error_envelope(response.json(), "400", "Bad Request");
    assert_eq!(errors.len(), 2);
    assert_error_item(&errors[0], "INVALID_FIELD", "this field accountType is invalid");
    assert_error_item(&errors[1], "FIELD_MISSING", "this field name must not be blank");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_missing_payload_root(ctx: &TestContext) {
    let response = ctx.client.confirm(&json!({})).await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    let errors = assert_error_envelope(response.json(), "400", "Bad Request");
    assert_error_item(&errors[0], "FIELD_MISSING", "this field data must not be null");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_financial_id_header(ctx: &TestContext) {
    let response = ctx
        .client
        .request(
            Method::POST,
            CONFIRMATION_PATH,
            &[("Content-Type", "application/json")],
            body(valid_request(PERSONAL_ACCOUNT, "Jane Doe", "Personal")),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "400", "Bad Request");
    assert_eq!(errors.len(), 1);
    assert_error_item(&errors[0], "HEADER_MISSING", "Bad Request");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .request(
            Method::POST,
            CONFIRMATION_PATH,
            &JSON_HEADERS,
            Some(br#"{"data": {"schemeName": "#.to_vec()),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "400", "400");
    assert_eq!(errors.len(), 1);
    assert_error_item(&errors[0], "INVALID_FIELD", "400");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_wrong_json_types(ctx: &TestContext) {
    let response = ctx
        .client
        .request(
            Method::POST,
            CONFIRMATION_PATH,
            &JSON_HEADERS,
            body(json!({ "data": { "name": 42 } })),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    let errors = assert_error_envelope(response.json(), "400", "400");
    assert_error_item(&errors[0], "INVALID_FIELD", "400");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_method(ctx: &TestContext) {
    let response = ctx
        .client
        .request(Method::GET, CONFIRMATION_PATH, &[], None)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::METHOD_NOT_ALLOWED)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "405", "405");
    assert_error_item(&errors[0], "INVALID_FIELD", "405");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_prefer_method_not_allowed_over_accept_mismatch(ctx: &TestContext) {
    let response = ctx
        .client
        .request(Method::GET, CONFIRMATION_PATH, &[("Accept", "text/html")], None)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::METHOD_NOT_ALLOWED)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(response.json(), "405", "405");
    assert_eq!(errors.len(), 1);
    assert_error_item(&errors[0], "INVALID_FIELD", "405");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_hide_upstream_error_responses(ctx: &TestContext) {
    let response = ctx
        .client
        .confirm(&valid_request(FAILING_ACCOUNT, "Jane Doe", "Personal"))
        .await
        .unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let errors = assert_error_envelope(
        response.json(),
        "503",
        "Unable to reach remote server",
    );
    assert_error_item(&errors[0], "UNEXPECTED_ERROR", "Unable to reach remote server");
}

#[test_context(UnreachableUpstreamContext)]
#[tokio::test]
async fn it_should_report_unreachable_upstream(ctx: &UnreachableUpstreamContext) {
    let response = ctx
        .client
        .confirm(&valid_request(PERSONAL_ACCOUNT, "Jane Doe", "Personal"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .assert_header("content-type", "application/json");
    let errors = assert_error_envelope(
        response.json(),
        "503",
        "Unable to reach remote server",
    );
    assert_eq!(errors.len(), 1);
    assert_error_item(&errors[0], "UNEXPECTED_ERROR", "Unable to reach remote server");

    let raw = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert!(!raw.contains("127.0.0.1"), "Upstream address leaked: {raw}");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_concurrent_failures_independently(ctx: &TestContext) {
    let mut futures = Vec::new();
    for i in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move {
            if i % 2 == 0 {
                client.confirm(&json!({})).await
            } else {
                client
                    .request(Method::GET, CONFIRMATION_PATH, &[], None)
                    .await
            }
        });
    }

    let results = futures::future::join_all(futures).await;

    for (i, result) in results.into_iter().enumerate() {
        let response = result.unwrap();
        if i % 2 == 0 {
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_error_envelope(response.json(), "400", "Bad Request");
        } else {
            response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
            assert_error_envelope(response.json(), "405", "405");
        }
    }
}
