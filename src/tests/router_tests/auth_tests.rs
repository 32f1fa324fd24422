use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions::load_user_from_session;
use crate::errors::ServerError;
use crate::handlers::now_unix;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_state, post_form, sign_in};

#[test]
fn get_magic_consumes_link_and_sets_session() -> Result<(), Box<dyn std::error::Error>> {
    let state = init_test_state();

    let token = state.db.with_conn(|conn| -> Result<String, ServerError> {
        let svc = MagicLinkService::new(MagicLinkConfig::default());
        Ok(svc.request_link(conn, "c@d.com", now_unix())?.token)
    })?;

    let resp = handle(get(&format!("/auth/magic?token={token}"), None), &state)?;

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");
    let cookie = header(&resp, "Set-Cookie").to_string();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let session = cookie
        .trim_start_matches("session=")
        .split(';')
        .next()
        .unwrap_or("")
        .to_string();
    let user = state
        .db
        .with_conn(|conn| load_user_from_session(conn, &session, now_unix()))?;
    assert_eq!(user.map(|u| u.email).as_deref(), Some("c@d.com"));

    // Single use.
    let again = handle(get(&format!("/auth/magic?token={token}"), None), &state);
    assert!(matches!(again, Err(ServerError::Unauthorized(_))));

    Ok(())
}

#[test]
fn missing_token_is_bad_request() {
    let state = init_test_state();
    let resp = handle(get("/auth/magic", None), &state);
    assert!(matches!(resp, Err(ServerError::BadRequest(_))));
}

#[test]
fn signed_in_layout_shows_email_and_logout_revokes() {
    let state = init_test_state();
    let session = sign_in(&state, "guest@example.com");

    let body = body_string(handle(get("/", Some(&session)), &state).unwrap());
    assert!(body.contains("guest@example.com"));
    assert!(body.contains("action=\"/logout\""));

    let resp = handle(post_form("/logout", "", Some(&session)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));

    let body = body_string(handle(get("/", Some(&session)), &state).unwrap());
    assert!(!body.contains("guest@example.com"));
    assert!(body.contains("Sign In"));
}
