use astra::Request;
use serde_json::json;
use tracing::warn;

use crate::mailer::{notify_booking, BookingNotice};
use crate::request::read_body;
use crate::responses::json::preflight_response;
use crate::responses::{json_response, ResultResp};
use crate::state::AppState;

pub fn send_booking_email_preflight() -> ResultResp {
    preflight_response()
}

/// JSON entry point used by external callers to forward a booking by email.
pub fn send_booking_email(mut req: Request, state: &AppState) -> ResultResp {
    let body = match read_body(&mut req) {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "send-booking-email: unreadable body");
            return json_response(500, &json!({ "error": err.to_string() }));
        }
    };
    let notice: BookingNotice = match serde_json::from_slice(&body) {
        Ok(notice) => notice,
        Err(err) => {
            warn!(error = %err, "send-booking-email: malformed payload");
            return json_response(500, &json!({ "error": err.to_string() }));
        }
    };

    match notify_booking(state.mailer.as_ref(), &notice) {
        Ok(outcome) => json_response(
            200,
            &json!({ "success": true, "message": outcome.message() }),
        ),
        Err(err) => json_response(500, &json!({ "error": err.to_string() })),
    }
}
