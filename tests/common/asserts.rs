use axum::body::{Body, to_bytes};
use axum::http::{Response, StatusCode};

pub async fn body_string(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
    (status, body)
}

pub fn assert_no_leak(status: StatusCode, body: &str, secret: &str) {
    if status != StatusCode::OK {
        assert!(
            !body.contains(secret),
            "status was set to {status} but handler data leaked anyway: {body:?}",
        );
    }
}
