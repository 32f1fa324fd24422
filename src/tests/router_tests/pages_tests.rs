use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_state};

#[test]
fn home_lists_destinations() {
    let state = init_test_state();
    let resp = handle(get("/", None), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Where Will You Wander Next?"));
    assert!(body.contains("Santorini"));
    assert!(body.contains("Kyoto"));
}

#[test]
fn homestays_without_filter_lists_all() {
    let state = init_test_state();
    let body = body_string(handle(get("/homestays", None), &state).unwrap());

    assert!(body.contains("4 homestays found"));
    assert!(body.contains("href=\"/homestay/1\""));
    assert!(body.contains("href=\"/homestay/4\""));
}

#[test]
fn homestays_filter_by_query_and_price() {
    let state = init_test_state();

    let body = body_string(handle(get("/homestays?q=BALI", None), &state).unwrap());
    assert!(body.contains("1 homestays found"));
    assert!(body.contains("Coastal Paradise Home"));

    let body = body_string(handle(get("/homestays?min_price=30&max_price=40", None), &state).unwrap());
    assert!(body.contains("2 homestays found"));
    assert!(body.contains("Mountain Village Retreat"));
    assert!(body.contains("Lakeside Cottage"));
}

#[test]
fn homestays_empty_state_offers_clear_search() {
    let state = init_test_state();
    let body = body_string(handle(get("/homestays?q=atlantis", None), &state).unwrap());

    assert!(body.contains("0 homestays found"));
    assert!(body.contains("No homestays found matching your criteria"));
    assert!(body.contains("Clear Search"));
}

#[test]
fn details_page_shows_prices_and_guest_options() {
    let state = init_test_state();
    let body = body_string(handle(get("/homestay/3", None), &state).unwrap());

    assert!(body.contains("Traditional Village House"));
    assert!(body.contains("$28"));
    assert!(body.contains("₹2,338"));
    assert!(body.contains("<option value=\"3\""));
    assert!(!body.contains("<option value=\"4\""));
    assert!(body.contains("House Rules"));
}

#[test]
fn unknown_homestay_and_path_are_not_found() {
    let state = init_test_state();
    assert!(matches!(handle(get("/homestay/99", None), &state), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/nowhere", None), &state), Err(ServerError::NotFound)));
}

#[test]
fn stylesheet_is_served() {
    let state = init_test_state();
    let resp = handle(get("/static/main.css", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
}
