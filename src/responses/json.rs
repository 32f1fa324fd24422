use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Headers sent on every response of the public JSON function endpoint.
pub const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
];

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    CORS_HEADERS
        .iter()
        .fold(ResponseBuilder::new().status(status), |b, (k, v)| {
            b.header(*k, *v)
        })
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Empty 200 answer to a CORS preflight.
pub fn preflight_response() -> ResultResp {
    CORS_HEADERS
        .iter()
        .fold(ResponseBuilder::new().status(200), |b, (k, v)| {
            b.header(*k, *v)
        })
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
