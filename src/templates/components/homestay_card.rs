use crate::domain::currency::format_price;
use crate::domain::Homestay;
use maud::{html, Markup};

pub fn homestay_card(h: &Homestay) -> Markup {
    let price = format_price(h.price);
    html! {
        a href=(format!("/homestay/{}", h.id)) class="card homestay-card" {
            img src=(h.image) alt=(h.title);
            h3 { (h.title) }
            p class="muted" { (h.location) }
            p { "★ " (format!("{:.1}", h.rating)) " · Hosted by " (h.host) " · Up to " (h.max_guests) " guests" }
            div {
                @for amenity in h.amenities.iter().take(4) {
                    span class="badge" { (amenity) }
                }
            }
            p { strong { (price.usd) } " /night " span class="muted" { "(" (price.inr) ")" } }
        }
    }
}
