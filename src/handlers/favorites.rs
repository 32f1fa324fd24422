use astra::Request;
use tracing::debug;

use crate::db::favorites::{favorite_ids, toggle_favorite};
use crate::domain::homestay::{catalog, find};
use crate::domain::Homestay;
use crate::errors::ServerError;
use crate::handlers::{current_user, now_unix};
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::favorites_page;

pub fn list(req: &Request, state: &AppState) -> ResultResp {
    let Some(viewer) = current_user(req, state, now_unix())? else {
        return redirect_response("/login");
    };
    let ids = state.db.with_conn(|conn| favorite_ids(conn, viewer.id))?;
    let favorites: Vec<&Homestay> = catalog()
        .iter()
        .filter(|h| ids.iter().any(|id| id == h.id))
        .collect();
    html_response(favorites_page(&viewer, &favorites))
}

pub fn toggle(req: &Request, state: &AppState, id: &str) -> ResultResp {
    let homestay = find(id).ok_or(ServerError::NotFound)?;
    let now = now_unix();
    let Some(viewer) = current_user(req, state, now)? else {
        return redirect_response("/login");
    };
    let saved = state
        .db
        .with_conn(|conn| toggle_favorite(conn, viewer.id, homestay.id, now))?;
    debug!(user_id = viewer.id, homestay = homestay.id, saved, "favorite toggled");

    redirect_response(&format!("/homestay/{}", homestay.id))
}
