use crate::auth::sessions::SessionUser;
use crate::domain::currency::format_price_range;
use crate::domain::{Homestay, SearchFilter};
use crate::templates::components::homestay_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn homestays_page(
    viewer: Option<&SessionUser>,
    filter: &SearchFilter,
    results: &[&Homestay],
) -> Markup {
    desktop_layout(
        "Find Homestays",
        viewer,
        html! {
            main class="container" {
                h1 { "Find Your Perfect Homestay" }
                p class="muted" { "Discover authentic accommodations around the world" }

                form method="get" action="/homestays" class="card search" {
                    div class="field" {
                        label for="q" { "Search" }
                        input
                            type="text"
                            id="q"
                            name="q"
                            value=(filter.query)
                            placeholder="Search by location or homestay name...";
                    }
                    div class="field" {
                        label for="min_price" { "Min price (USD)" }
                        input type="number" id="min_price" name="min_price" min="0" value=(filter.min_price);
                    }
                    div class="field" {
                        label for="max_price" { "Max price (USD)" }
                        input type="number" id="max_price" name="max_price" min="0" value=(filter.max_price);
                    }
                    button type="submit" { "Search" }
                    @if !filter.is_default() {
                        a href="/homestays" { "Reset filters" }
                    }
                }

                @let range = format_price_range(filter.min_price, filter.max_price);
                p class="muted results-count" {
                    (results.len()) " homestays found · " (range.usd) " (" (range.inr) ") per night"
                }

                @if results.is_empty() {
                    div class="empty" {
                        p { "No homestays found matching your criteria" }
                        a href="/homestays" class="button" { "Clear Search" }
                    }
                } @else {
                    div class="grid" {
                        @for h in results {
                            (homestay_card(h))
                        }
                    }
                }
            }
        },
    )
}
