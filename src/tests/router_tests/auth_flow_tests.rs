use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, post_form};

#[test]
fn login_page_loads_successfully() {
    let state = init_test_state();

    let resp = handle(get("/login", None), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("action=\"/auth/request-link\""));
}

#[test]
fn request_link_renders_check_email_page() {
    let state = init_test_state();
    let email = "test@example.com";

    let resp = handle(
        post_form("/auth/request-link", &format!("email={email}"), None),
        &state,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Check your email"));
    assert!(body.contains(email));

    let stored: i64 = state
        .db
        .with_conn(|conn| {
            conn.query_row("select count(*) from magic_links", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(stored, 1);
}

#[test]
fn request_link_with_bad_email_shows_error() {
    let state = init_test_state();

    let resp = handle(post_form("/auth/request-link", "email=nope", None), &state).unwrap();
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Please enter a valid email address"));
}
