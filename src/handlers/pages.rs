use crate::domain::homestay::{search, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::domain::SearchFilter;
use crate::handlers::{current_user, now_unix};
use crate::request::parse_query;
use crate::responses::{html_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{home_page, homestays_page};
use astra::Request;

pub fn home(req: &Request, state: &AppState) -> ResultResp {
    let viewer = current_user(req, state, now_unix())?;
    html_response(home_page(viewer.as_ref()))
}

/// Blank or unparsable bounds fall back to the default range.
fn search_filter(req: &Request) -> SearchFilter {
    let q = parse_query(req);
    let bound = |key: &str, default: i64| q.get(key).trim().parse().unwrap_or(default);
    SearchFilter {
        query: q.get("q").trim().to_string(),
        min_price: bound("min_price", DEFAULT_MIN_PRICE),
        max_price: bound("max_price", DEFAULT_MAX_PRICE),
    }
}

pub fn homestays(req: &Request, state: &AppState) -> ResultResp {
    let viewer = current_user(req, state, now_unix())?;
    let filter = search_filter(req);
    let results = search(&filter);
    html_response(homestays_page(viewer.as_ref(), &filter, &results))
}
