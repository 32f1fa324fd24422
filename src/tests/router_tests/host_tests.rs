use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_state, post_form, sign_in};

const VALID: &str = "property_name=Cedar+Ridge+Cabin&property_type=cabin\
&property_location=Manali%2C+India\
&property_description=A+warm+wooden+cabin+with+views+of+the+valley.\
&num_rooms=2&price_per_night=60&amenities=WiFi&amenities=Garden";

#[test]
fn become_host_requires_sign_in() {
    let state = init_test_state();

    let resp = handle(get("/become-host", None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/login");

    let resp = handle(post_form("/become-host", VALID, None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/login");
}

#[test]
fn valid_application_is_stored_and_listed() {
    let state = init_test_state();
    let session = sign_in(&state, "host@example.com");

    let resp = handle(post_form("/become-host", VALID, Some(&session)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Application Submitted!"));

    let body = body_string(handle(get("/become-host", Some(&session)), &state).unwrap());
    assert!(body.contains("Your Applications"));
    assert!(body.contains("Cedar Ridge Cabin"));
    assert!(body.contains("WiFi, Garden"));
    assert!(body.contains("pending"));
}

#[test]
fn invalid_application_keeps_values() {
    let state = init_test_state();
    let session = sign_in(&state, "host@example.com");

    let resp = handle(
        post_form(
            "/become-host",
            "property_name=Ab&property_type=castle&property_location=Goa&property_description=short&amenities=Pool",
            Some(&session),
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Property name must be at least 3 characters"));
    assert!(body.contains("Please select a property type"));
    assert!(body.contains("value=\"Ab\""));
    assert!(body.contains("value=\"Pool\" checked"));
}
