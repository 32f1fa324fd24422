use crate::db::bookings::bookings_for_homestay;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_state, post_form};
use chrono::{Duration, Utc};

fn future(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn valid_booking_is_stored_and_confirmed() {
    let state = init_test_state();
    let form = format!(
        "guest_name=Ana+Lima&guest_email=ana%40example.com&check_in={}&check_out={}&guests=2&message=Late+arrival",
        future(10),
        future(13)
    );

    let resp = handle(post_form("/homestay/1/book", &form, None), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Booking Request Sent!"));
    assert!(body.contains("Your booking for 3 nights ($105) has been submitted."));
    // Form is cleared after success.
    assert!(!body.contains("value=\"Ana Lima\""));

    let rows = state
        .db
        .with_conn(|conn| bookings_for_homestay(conn, "1"))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].guest_name, "Ana Lima");
    assert_eq!(rows[0].total_price, 105);
    assert_eq!(rows[0].message.as_deref(), Some("Late arrival"));
    assert_eq!(rows[0].status, "pending");
}

#[test]
fn invalid_booking_rerenders_with_errors_and_values() {
    let state = init_test_state();
    let form = format!(
        "guest_name=Ana&guest_email=&check_in={}&check_out={}&guests=2",
        future(5),
        future(5)
    );

    let resp = handle(post_form("/homestay/2/book", &form, None), &state).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Check-out must be after check-in"));
    assert!(body.contains("Please enter your name and email"));
    assert!(body.contains("value=\"Ana\""));

    let rows = state
        .db
        .with_conn(|conn| bookings_for_homestay(conn, "2"))
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn too_many_guests_is_rejected() {
    let state = init_test_state();
    let form = format!(
        "guest_name=Ana&guest_email=ana%40example.com&check_in={}&check_out={}&guests=9",
        future(5),
        future(6)
    );

    let resp = handle(post_form("/homestay/3/book", &form, None), &state).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Choose between 1 and 3 guests"));
}

#[test]
fn booking_unknown_homestay_is_not_found() {
    let state = init_test_state();
    let resp = handle(post_form("/homestay/42/book", "guest_name=x", None), &state);
    assert!(matches!(resp, Err(ServerError::NotFound)));
}

#[test]
fn storage_failure_shows_retry_message() {
    let state = init_test_state();
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch("drop table bookings")
                .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();

    let form = format!(
        "guest_name=Ana&guest_email=ana%40example.com&check_in={}&check_out={}",
        future(5),
        future(7)
    );
    let resp = handle(post_form("/homestay/1/book", &form, None), &state).unwrap();
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("Booking failed. Please try again later."));
    assert!(body.contains("value=\"Ana\""));
}
