use crate::errors::ServerError;
use crate::handlers::{auth, booking, contact, favorites, functions, host, pages};
use crate::responses::{stylesheet_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use tracing::debug;

/// Sub-routes under `/homestay/{id}`.
enum HomestayRoute<'a> {
    Details(&'a str),
    Book(&'a str),
    Favorite(&'a str),
}

fn homestay_route(path: &str) -> Option<HomestayRoute<'_>> {
    let rest = path.strip_prefix("/homestay/")?;
    let (id, action) = match rest.split_once('/') {
        Some((id, action)) => (id, Some(action)),
        None => (rest, None),
    };
    if id.is_empty() {
        return None;
    }
    match action {
        None => Some(HomestayRoute::Details(id)),
        Some("book") => Some(HomestayRoute::Book(id)),
        Some("favorite") => Some(HomestayRoute::Favorite(id)),
        Some(_) => None,
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => pages::home(&req, state),
        ("GET", "/homestays") => pages::homestays(&req, state),
        ("GET", "/static/main.css") => stylesheet_response(),

        ("GET", "/contact") => contact::show(&req, state),
        ("POST", "/contact") => contact::submit(req, state),

        ("GET", "/become-host") => host::show(&req, state),
        ("POST", "/become-host") => host::submit(req, state),

        ("GET", "/favorites") => favorites::list(&req, state),

        ("GET", "/login") => auth::login(&req, state),
        ("POST", "/auth/request-link") => auth::request_link(req, state),
        ("GET", "/auth/magic") => auth::magic(&req, state),
        ("POST", "/logout") => auth::logout(&req, state),

        ("OPTIONS", "/functions/send-booking-email") => functions::send_booking_email_preflight(),
        ("POST", "/functions/send-booking-email") => functions::send_booking_email(req, state),

        (method, path) => match (method, homestay_route(path)) {
            ("GET", Some(HomestayRoute::Details(id))) => booking::details(&req, state, id),
            ("POST", Some(HomestayRoute::Book(id))) => booking::book(req, state, id),
            ("POST", Some(HomestayRoute::Favorite(id))) => favorites::toggle(&req, state, id),
            _ => Err(ServerError::NotFound),
        },
    }
}
