use astra::Request;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::auth::sessions::SessionUser;
use crate::db::bookings::insert_booking;
use crate::db::favorites::is_favorite;
use crate::domain::booking::{BookingForm, ValidBooking};
use crate::domain::homestay::find;
use crate::domain::{FieldErrors, Homestay};
use crate::errors::ServerError;
use crate::handlers::{current_user, now_unix};
use crate::mailer::{notify_booking, BookingNotice};
use crate::request::read_form;
use crate::responses::{html_response_with_status, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{homestay_details_page, DetailsVm};
use crate::templates::Flash;

fn render(
    state: &AppState,
    status: u16,
    viewer: Option<&SessionUser>,
    homestay: &Homestay,
    form: &BookingForm,
    errors: &FieldErrors,
    flash: Option<&Flash>,
) -> ResultResp {
    let is_favorite = match viewer {
        Some(user) => state
            .db
            .with_conn(|conn| is_favorite(conn, user.id, homestay.id))?,
        None => false,
    };
    html_response_with_status(
        status,
        homestay_details_page(&DetailsVm {
            viewer,
            homestay,
            form,
            errors,
            flash,
            is_favorite,
        }),
    )
}

pub fn details(req: &Request, state: &AppState, id: &str) -> ResultResp {
    let homestay = find(id).ok_or(ServerError::NotFound)?;
    let viewer = current_user(req, state, now_unix())?;
    render(
        state,
        200,
        viewer.as_ref(),
        homestay,
        &BookingForm::default(),
        &FieldErrors::new(),
        None,
    )
}

fn notice_for(homestay: &Homestay, booking: &ValidBooking) -> BookingNotice {
    BookingNotice {
        guest_name: booking.guest_name.clone(),
        guest_email: booking.guest_email.clone(),
        guest_phone: booking.guest_phone.clone(),
        homestay_title: homestay.title.to_string(),
        check_in: booking.check_in.format("%Y-%m-%d").to_string(),
        check_out: booking.check_out.format("%Y-%m-%d").to_string(),
        guests: booking.guests,
        total_price: Some(booking.total_price as f64),
        message: booking.message.clone(),
    }
}

pub fn book(mut req: Request, state: &AppState, id: &str) -> ResultResp {
    let homestay = find(id).ok_or(ServerError::NotFound)?;
    let now = now_unix();
    let viewer = current_user(&req, state, now)?;
    let form = BookingForm::from_form(&read_form(&mut req)?);

    let booking = match form.validate(homestay, Utc::now().date_naive()) {
        Ok(booking) => booking,
        Err(errors) => {
            let first = errors.first().unwrap_or("Invalid booking").to_string();
            let banner = Flash::error("Please check your booking", first);
            return render(state, 422, viewer.as_ref(), homestay, &form, &errors, Some(&banner));
        }
    };

    let stored = state
        .db
        .with_conn(|conn| insert_booking(conn, homestay, &booking, now));
    let booking_id = match stored {
        Ok(id) => id,
        Err(err) => {
            error!(error = %err, homestay = homestay.id, "booking insert failed");
            let banner = Flash::error("Booking failed", "Booking failed. Please try again later.");
            return render(
                state,
                500,
                viewer.as_ref(),
                homestay,
                &form,
                &FieldErrors::new(),
                Some(&banner),
            );
        }
    };
    info!(booking_id, homestay = homestay.id, nights = booking.nights, "booking stored");

    // The guest sees success either way; delivery problems stay in the log.
    match notify_booking(state.mailer.as_ref(), &notice_for(homestay, &booking)) {
        Ok(outcome) => info!(booking_id, outcome = outcome.message(), "booking notification"),
        Err(err) => warn!(booking_id, error = %err, "booking notification failed"),
    }

    let banner = Flash::success(
        "Booking Request Sent! 🎉",
        format!(
            "Your booking for {} nights (${}) has been submitted. You'll receive a confirmation soon.",
            booking.nights, booking.total_price
        ),
    );
    render(
        state,
        200,
        viewer.as_ref(),
        homestay,
        &BookingForm::default(),
        &FieldErrors::new(),
        Some(&banner),
    )
}
