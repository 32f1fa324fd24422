use chrono::NaiveDate;

use crate::domain::homestay::Homestay;
use crate::domain::validation::{is_valid_email, FieldErrors};
use crate::request::FormFields;

pub const DEFAULT_GUESTS: u32 = 2;

const MAX_NAME: usize = 100;
const MAX_EMAIL: usize = 255;
const MAX_PHONE: usize = 20;
const MAX_MESSAGE: usize = 500;

/// Raw booking form as submitted. Kept as strings so the page can be
/// re-rendered with exactly what the guest typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBooking {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub nights: i64,
    pub total_price: i64,
    pub message: Option<String>,
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Whole nights between the two dates; 0 unless check-out is after check-in.
pub fn nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(start), Some(end)) => (end - start).num_days().max(0),
        _ => 0,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

impl BookingForm {
    pub fn from_form(form: &FormFields) -> Self {
        Self {
            guest_name: form.get("guest_name").to_string(),
            guest_email: form.get("guest_email").to_string(),
            guest_phone: form.get("guest_phone").to_string(),
            check_in: form.get("check_in").to_string(),
            check_out: form.get("check_out").to_string(),
            guests: form.get("guests").to_string(),
            message: form.get("message").to_string(),
        }
    }

    pub fn nights(&self) -> i64 {
        nights(parse_date(&self.check_in), parse_date(&self.check_out))
    }

    /// Selected guest count for display; falls back to the default.
    pub fn guests_or_default(&self) -> u32 {
        self.guests.trim().parse().unwrap_or(DEFAULT_GUESTS)
    }

    pub fn validate(&self, homestay: &Homestay, today: NaiveDate) -> Result<ValidBooking, FieldErrors> {
        let mut errors = FieldErrors::new();

        let check_in = parse_date(&self.check_in);
        let check_out = parse_date(&self.check_out);
        if check_in.is_none() || check_out.is_none() {
            errors.add("check_in", "Please select dates");
        }
        if let Some(start) = check_in {
            if start < today {
                errors.add("check_in", "Check-in cannot be in the past");
            }
        }
        let nights = nights(check_in, check_out);
        if check_in.is_some() && check_out.is_some() && nights <= 0 {
            errors.add("check_out", "Check-out must be after check-in");
        }

        let guest_name = self.guest_name.trim();
        let guest_email = self.guest_email.trim();
        if guest_name.is_empty() {
            errors.add("guest_name", "Please enter your name and email");
        } else if guest_name.chars().count() > MAX_NAME {
            errors.add("guest_name", format!("Name must be at most {MAX_NAME} characters"));
        }
        if guest_email.is_empty() {
            errors.add("guest_email", "Please enter your name and email");
        } else if guest_email.chars().count() > MAX_EMAIL || !is_valid_email(guest_email) {
            errors.add("guest_email", "Please enter a valid email address");
        }

        let guest_phone = non_empty(&self.guest_phone);
        if guest_phone.as_deref().map_or(0, |p| p.chars().count()) > MAX_PHONE {
            errors.add("guest_phone", format!("Phone must be at most {MAX_PHONE} characters"));
        }

        let message = non_empty(&self.message);
        if message.as_deref().map_or(0, |m| m.chars().count()) > MAX_MESSAGE {
            errors.add("message", format!("Message must be at most {MAX_MESSAGE} characters"));
        }

        let guests = match self.guests.trim() {
            "" => Some(DEFAULT_GUESTS),
            raw => raw.parse::<u32>().ok(),
        };
        let guests = match guests {
            Some(n) if (1..=homestay.max_guests).contains(&n) => n,
            _ => {
                errors.add(
                    "guests",
                    format!("Choose between 1 and {} guests", homestay.max_guests),
                );
                0
            }
        };

        let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
            return Err(errors);
        };

        errors.into_result(ValidBooking {
            guest_name: guest_name.to_string(),
            guest_email: guest_email.to_string(),
            guest_phone,
            check_in,
            check_out,
            guests,
            nights,
            total_price: nights * homestay.price,
            message,
        })
    }
}
