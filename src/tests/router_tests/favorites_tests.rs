use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_state, post_form, sign_in};

#[test]
fn anonymous_users_are_sent_to_login() {
    let state = init_test_state();

    let resp = handle(get("/favorites", None), &state).unwrap();
    assert_eq!(header(&resp, "Location"), "/login");

    let resp = handle(post_form("/homestay/1/favorite", "", None), &state).unwrap();
    assert_eq!(header(&resp, "Location"), "/login");
}

#[test]
fn toggle_adds_then_removes() {
    let state = init_test_state();
    let session = sign_in(&state, "fan@example.com");

    let body = body_string(handle(get("/favorites", Some(&session)), &state).unwrap());
    assert!(body.contains("You haven't saved any homestays yet."));

    for id in ["4", "2"] {
        let resp = handle(
            post_form(&format!("/homestay/{id}/favorite"), "", Some(&session)),
            &state,
        )
        .unwrap();
        assert_eq!(resp.status(), 302);
        assert_eq!(header(&resp, "Location"), format!("/homestay/{id}"));
    }

    let body = body_string(handle(get("/favorites", Some(&session)), &state).unwrap());
    let bali = body.find("Coastal Paradise Home").unwrap();
    let pokhara = body.find("Lakeside Cottage").unwrap();
    assert!(bali < pokhara, "favorites follow catalogue order");

    let body = body_string(handle(get("/homestay/4", Some(&session)), &state).unwrap());
    assert!(body.contains("♥ Saved"));

    handle(post_form("/homestay/4/favorite", "", Some(&session)), &state).unwrap();
    let body = body_string(handle(get("/favorites", Some(&session)), &state).unwrap());
    assert!(!body.contains("Lakeside Cottage"));
    assert!(body.contains("Coastal Paradise Home"));
}
