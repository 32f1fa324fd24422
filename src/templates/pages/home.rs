// templates/pages/home.rs

use crate::auth::sessions::SessionUser;
use crate::domain::destination::{featured, Destination};
use crate::domain::currency::format_price;
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn destination_card(d: &Destination, featured: bool) -> Markup {
    let class = if featured { "card destination featured" } else { "card destination" };
    html! {
        article class=(class) {
            img src=(d.image) alt=(d.name);
            h3 { (d.name) ", " (d.country) }
            p class="muted" { (d.description) }
            div {
                @for tag in d.tags {
                    span class="badge" { (tag) }
                }
            }
            p {
                (d.homestay_count) " homestays · from "
                strong { (format_price(d.starting_price).usd) } "/night"
            }
        }
    }
}

pub fn home_page(viewer: Option<&SessionUser>) -> Markup {
    let (lead, rest) = featured();
    desktop_layout(
        "Home",
        viewer,
        html! {
            section class="hero" {
                h1 { "Support Tourists with Homestays" }
                p { "Connecting travelers with homestay options and tourist attractions seamlessly" }
                a href="/homestays" class="button" { "Find Homestays" }
            }

            main class="container" {
                section {
                    h2 { "User Findings and Project Prototype" }
                    p class="muted" {
                        "Our platform connects travelers with homestay options and provides "
                        "information about nearby tourist attractions, offering personalized "
                        "recommendations and local insights to enhance your travel experience."
                    }
                    div class="grid" {
                        div class="card" { strong { "Personalized Recommendations" } }
                        div class="card" { strong { "Discover Nearby Places" } }
                    }
                }

                section {
                    h2 { "Where Will You Wander Next?" }
                    p class="muted" {
                        "Discover handpicked destinations with authentic homestays that immerse you in local culture"
                    }
                    (destination_card(lead, true))
                    div class="grid" {
                        @for d in rest {
                            (destination_card(d, false))
                        }
                    }
                }
            }
        },
    )
}
