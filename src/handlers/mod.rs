pub mod auth;
pub mod booking;
pub mod contact;
pub mod favorites;
pub mod functions;
pub mod host;
pub mod pages;

use crate::auth::sessions::{load_user_from_session, SessionUser, SESSION_COOKIE};
use crate::errors::ServerError;
use crate::request::cookie;
use crate::state::AppState;
use astra::Request;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// The signed-in user, if the request carries a live session cookie.
pub fn current_user(
    req: &Request,
    state: &AppState,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let Some(token) = cookie(req, SESSION_COOKIE).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    state
        .db
        .with_conn(|conn| load_user_from_session(conn, &token, now))
}
