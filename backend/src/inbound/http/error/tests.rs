//! Tests for HTTP error mapping.

use super::*;
use crate::domain::TraceId;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn render(error: &Error) -> (StatusCode, Option<String>, ErrorResponse) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error envelope deserialises");
    (status, trace_id, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn not_found_renders_detail_message() {
    let (status, trace_id, body) = render(&Error::not_found("User not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(trace_id.is_none());
    assert_eq!(
        body,
        ErrorResponse {
            detail: "User not found".into(),
            details: None,
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async {
        Error::internal("mongo exploded: secret host").with_details(json!({"host": "db.internal"}))
    })
    .await;

    let (status, trace_id, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(body.detail, INTERNAL_ERROR_DETAIL);
    assert!(body.details.is_none());
}

#[rstest]
#[actix_web::test]
async fn validation_details_are_forwarded() {
    let error = Error::invalid_request("missing field `email`")
        .with_details(json!({"code": "invalid_body"}));

    let (status, _, body) = render(&error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.detail, "missing field `email`");
    assert_eq!(body.details, Some(json!({"code": "invalid_body"})));
}

#[rstest]
#[actix_web::test]
async fn errors_raised_in_scope_carry_the_scoped_trace_id() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::not_found("User not found") }).await;

    let (_, header, _) = render(&error).await;

    assert_eq!(header.as_deref(), Some(TRACE_ID));
}
