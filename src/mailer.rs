// src/mailer.rs

use maud::{html, Markup};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::MailConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// Booking details forwarded to the site owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingNotice {
    pub guest_name: String,
    pub guest_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    pub homestay_title: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// External callers may send fractional totals.
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What happened to a booking notification. The booking itself is already
/// stored by the time any of these is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    /// The email API rejected the request.
    Pending,
    /// No API key configured; the notice was logged instead.
    NotConfigured,
}

impl NotifyOutcome {
    pub fn message(self) -> &'static str {
        match self {
            NotifyOutcome::Sent => "Booking confirmed and email sent!",
            NotifyOutcome::Pending => "Booking saved. Email delivery pending.",
            NotifyOutcome::NotConfigured => {
                "Booking saved. Email notification not configured yet."
            }
        }
    }
}

#[derive(Serialize)]
struct ResendPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: String,
    html: String,
}

pub struct ResendMailer {
    api_key: String,
    api_url: String,
    from: String,
    booking_recipients: Vec<String>,
    client: Client,
}

impl ResendMailer {
    /// `Ok(None)` when no API key is configured.
    pub fn from_config(cfg: &MailConfig) -> Result<Option<Self>, MailerError> {
        let Some(api_key) = cfg
            .resend_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
        else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MailerError::RequestFailed(format!("http client init failed: {e}")))?;

        Ok(Some(Self {
            api_key: api_key.to_string(),
            api_url: cfg.api_url.clone(),
            from: cfg.from.clone(),
            booking_recipients: cfg.booking_recipients.clone(),
            client,
        }))
    }

    pub fn send_booking_notification(&self, notice: &BookingNotice) -> Result<(), MailerError> {
        let payload = ResendPayload {
            from: &self.from,
            to: self.booking_recipients.iter().map(String::as_str).collect(),
            subject: booking_subject(notice),
            html: booking_email_html(notice).into_string(),
        };
        self.post(&payload)
    }

    pub fn send_magic_link(&self, recipient_email: &str, magic_link: &str) -> Result<(), MailerError> {
        let payload = ResendPayload {
            from: &self.from,
            to: vec![recipient_email],
            subject: "Your HomestayHub sign-in link".to_string(),
            html: magic_link_email_html(magic_link).into_string(),
        };
        self.post(&payload)
    }

    fn post(&self, payload: &ResendPayload<'_>) -> Result<(), MailerError> {
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(MailerError::ApiError(format!("{status} - {body}")));
        }
        Ok(())
    }
}

/// Best-effort notification: a missing key or an API rejection still counts
/// as a saved booking. Only transport failures surface as errors.
pub fn notify_booking(
    mailer: Option<&ResendMailer>,
    notice: &BookingNotice,
) -> Result<NotifyOutcome, MailerError> {
    let Some(mailer) = mailer else {
        let payload = serde_json::to_string(notice).unwrap_or_else(|_| format!("{notice:?}"));
        info!(booking = %payload, "RESEND_API_KEY not set, booking notification logged only");
        return Ok(NotifyOutcome::NotConfigured);
    };

    match mailer.send_booking_notification(notice) {
        Ok(()) => {
            info!(homestay = %notice.homestay_title, "booking notification sent");
            Ok(NotifyOutcome::Sent)
        }
        Err(MailerError::ApiError(body)) => {
            error!(error = %body, "email API rejected booking notification");
            Ok(NotifyOutcome::Pending)
        }
        Err(err) => {
            warn!(error = %err, "booking notification could not be sent");
            Err(err)
        }
    }
}

pub fn booking_subject(notice: &BookingNotice) -> String {
    format!(
        "New Booking: {} - {}",
        notice.homestay_title, notice.guest_name
    )
}

/// Whole amounts print without a fraction: `120.0` -> `"120"`, `120.5` -> `"120.5"`.
fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{}", total as i64)
    } else {
        format!("{total}")
    }
}

const LABEL: &str = "padding: 8px 0; font-weight: bold;";

pub fn booking_email_html(notice: &BookingNotice) -> Markup {
    html! {
        div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;" {
            h1 style="color: #2d8a7e; border-bottom: 2px solid #2d8a7e; padding-bottom: 10px;" {
                "🏡 New Booking Request!"
            }
            div style="background: #f8f9fa; padding: 20px; border-radius: 12px; margin: 20px 0;" {
                h2 style="margin-top: 0;" { "Homestay: " (notice.homestay_title) }
                table style="width: 100%; border-collapse: collapse;" {
                    tr { td style=(LABEL) { "Guest Name:" } td { (notice.guest_name) } }
                    tr { td style=(LABEL) { "Email:" } td { (notice.guest_email) } }
                    @if let Some(phone) = &notice.guest_phone {
                        tr { td style=(LABEL) { "Phone:" } td { (phone) } }
                    }
                    tr { td style=(LABEL) { "Check-in:" } td { (notice.check_in) } }
                    tr { td style=(LABEL) { "Check-out:" } td { (notice.check_out) } }
                    tr { td style=(LABEL) { "Guests:" } td { (notice.guests) } }
                    @if let Some(total) = notice.total_price.filter(|t| *t > 0.0) {
                        tr { td style=(LABEL) { "Total Price:" } td { "$" (format_total(total)) } }
                    }
                }
                @if let Some(message) = &notice.message {
                    div style="margin-top: 15px; padding: 15px; background: white; border-radius: 8px;" {
                        strong { "Message:" }
                        p { (message) }
                    }
                }
            }
            p style="color: #666; font-size: 14px;" { "This booking was submitted via HomestayHub." }
        }
    }
}

fn magic_link_email_html(magic_link: &str) -> Markup {
    html! {
        div style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;" {
            h2 { "Sign in to HomestayHub" }
            p { "Click the link below to sign in. It expires in 15 minutes." }
            p { a href=(magic_link) { "Sign in" } }
            p style="font-size: 0.8em; color: #999;" {
                "If you didn't request this link, you can safely ignore this email."
            }
        }
    }
}
