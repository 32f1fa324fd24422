use crate::request::MAX_BODY_BYTES;
use crate::router::handle;
use crate::tests::utils::{body_string, header, init_test_state};
use astra::Body;
use http::{Method, Request};

const ENDPOINT: &str = "/functions/send-booking-email";

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(ENDPOINT)
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

#[test]
fn preflight_returns_cors_headers() {
    let state = init_test_state();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(ENDPOINT)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Access-Control-Allow-Origin"), "*");
    assert!(header(&resp, "Access-Control-Allow-Headers").contains("content-type"));
    assert!(body_string(resp).is_empty());
}

#[test]
fn unconfigured_mail_reports_success_with_notice() {
    let state = init_test_state();
    let resp = handle(
        post_json(
            r#"{"guest_name":"Jo","guest_email":"jo@example.com","homestay_title":"Lakeside Cottage",
                "check_in":"2030-01-01","check_out":"2030-01-03","guests":2,"total_price":80}"#,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Access-Control-Allow-Origin"), "*");

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Booking saved. Email notification not configured yet."
    );
}

#[test]
fn malformed_payload_is_a_server_error() {
    let state = init_test_state();
    let resp = handle(post_json("{not json"), &state).unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(header(&resp, "Access-Control-Allow-Origin"), "*");

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].is_string());
}

#[test]
fn oversized_body_is_a_json_error_with_cors() {
    let state = init_test_state();
    let big = vec![b'x'; MAX_BODY_BYTES as usize + 6 * 1024];
    let req = Request::builder()
        .method(Method::POST)
        .uri(ENDPOINT)
        .header("Content-Type", "application/json")
        .body(Body::from(big))
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(header(&resp, "Access-Control-Allow-Origin"), "*");
    assert!(header(&resp, "Access-Control-Allow-Headers").contains("content-type"));
    assert!(header(&resp, "Content-Type").starts_with("application/json"));

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().contains("too large"));
}

#[test]
fn fractional_total_is_accepted() {
    let state = init_test_state();
    let resp = handle(
        post_json(
            r#"{"guest_name":"Jo","guest_email":"jo@example.com","homestay_title":"Lakeside Cottage",
                "check_in":"2030-01-01","check_out":"2030-01-03","guests":2,"total_price":120.5}"#,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["success"], true);
}
