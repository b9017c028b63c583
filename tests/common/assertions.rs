//! Response assertions

use axum::http::StatusCode;

use super::app::TestResponse;

/// Assert a portal error response: status, kind and message
#[track_caller]
pub fn assert_error(response: &TestResponse, status: StatusCode, kind: &str, message: &str) {
    assert_eq!(response.status, status, "unexpected status, body: {:?}", response.body);
    assert_eq!(response.body["error"], kind, "body: {:?}", response.body);
    assert_eq!(response.body["message"], message, "body: {:?}", response.body);
    assert_eq!(response.body["status"], status.as_u16());
}

#[track_caller]
pub fn assert_ok(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::OK, "body: {:?}", response.body);
}
