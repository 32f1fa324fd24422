use crate::auth::sessions::SessionUser;
use crate::domain::Homestay;
use crate::templates::components::homestay_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn favorites_page(viewer: &SessionUser, favorites: &[&Homestay]) -> Markup {
    desktop_layout(
        "Favorites",
        Some(viewer),
        html! {
            main class="container" {
                h1 { "Your Favorites" }
                @if favorites.is_empty() {
                    div class="empty" {
                        p { "You haven't saved any homestays yet." }
                        a href="/homestays" class="button" { "Browse Homestays" }
                    }
                } @else {
                    div class="grid" {
                        @for h in favorites {
                            (homestay_card(h))
                        }
                    }
                }
            }
        },
    )
}
