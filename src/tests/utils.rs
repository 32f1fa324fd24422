use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions::create_session;
use crate::db::connection::{init_db, Database};
use crate::handlers::now_unix;
use crate::logging::init_test_logging;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use rusqlite::Connection;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// In-memory connection with the production schema applied.
pub fn memory_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(include_str!("../../sql/schema.sql"))
        .unwrap();
    conn
}

/// Initialize a fresh test DB file using the production schema.
pub fn init_test_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "homestay_test_{}_{}_{}.sqlite",
        std::process::id(),
        nanos,
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));
    let db = Database::new(path);

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// App state over a fresh DB, with email delivery unconfigured.
pub fn init_test_state() -> AppState {
    init_test_logging();
    AppState::new(init_test_db(), None, "http://test.local")
}

/// Raw session token for a new signed-in user.
pub fn sign_in(state: &AppState, email: &str) -> String {
    state
        .db
        .with_conn(|conn| {
            let svc = MagicLinkService::new(MagicLinkConfig::default());
            let now = now_unix();
            let issued = svc.request_link(conn, email, now)?;
            let redeemed = svc.redeem(conn, &issued.token, now)?;
            create_session(conn, redeemed.user_id, now)
        })
        .unwrap()
}

pub fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
