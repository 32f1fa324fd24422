use crate::db::contact_messages::count_contact_messages;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, post_form, sign_in};

#[test]
fn contact_page_renders_form() {
    let state = init_test_state();
    let body = body_string(handle(get("/contact", None), &state).unwrap());
    assert!(body.contains("Contact Us"));
    assert!(body.contains("action=\"/contact\""));
}

#[test]
fn valid_message_is_stored_anonymously() {
    let state = init_test_state();
    let resp = handle(
        post_form(
            "/contact",
            "name=Jo&email=jo%40example.com&subject=Group+stay&message=Do+you+host+groups+of+ten%3F",
            None,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Message Sent!"));

    let count = state.db.with_conn(|conn| count_contact_messages(conn)).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn signed_in_message_records_user() {
    let state = init_test_state();
    let session = sign_in(&state, "member@example.com");

    handle(
        post_form(
            "/contact",
            "name=Member&email=member%40example.com&subject=Refunds&message=How+do+refunds+work%3F",
            Some(&session),
        ),
        &state,
    )
    .unwrap();

    let user_email: String = state
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select u.email from contact_messages m join users u on u.id = m.user_id",
                [],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(user_email, "member@example.com");
}

#[test]
fn invalid_message_shows_field_errors() {
    let state = init_test_state();
    let resp = handle(
        post_form("/contact", "name=J&email=bad&subject=Hi&message=short", None),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Name must be at least 2 characters"));
    assert!(body.contains("Invalid email address"));
    assert_eq!(state.db.with_conn(|conn| count_contact_messages(conn)).unwrap(), 0);
}
