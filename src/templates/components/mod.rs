use crate::domain::currency::PriceLabel;
use crate::domain::FieldErrors;
use maud::{html, Markup};

pub mod homestay_card;

pub use homestay_card::homestay_card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-off banner shown above a form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub title: String,
    pub body: String,
}

impl Flash {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

pub fn flash(flash: &Flash) -> Markup {
    let class = match flash.kind {
        FlashKind::Success => "flash success",
        FlashKind::Error => "flash error",
    };
    html! {
        div class=(class) role="status" {
            strong { (flash.title) }
            @if !flash.body.is_empty() {
                p { (flash.body) }
            }
        }
    }
}

pub fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error" { (msg) }
        }
    }
}

pub fn price_per_night(label: &PriceLabel) -> Markup {
    html! {
        div {
            span class="price" { (label.usd) }
            span class="muted" { " /night" }
        }
        div class="muted" { (label.inr) " /night" }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
