use crate::auth::sessions::SessionUser;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, viewer: Option<&SessionUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | HomestayHub" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#2d8a7e"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "HomestayHub" }
                    }
                    nav {
                        ul {
                            li { a href="/homestays" { "Find Homestays" } }
                            li { a href="/favorites" { "Favorites" } }
                            li { a href="/contact" { "Contact" } }
                            li { a href="/become-host" { "Become a Host" } }
                        }
                    }
                    @match viewer {
                        Some(user) => {
                            form method="post" action="/logout" {
                                span class="muted" { (user.email) " " }
                                button type="submit" class="ghost" { "Sign out" }
                            }
                        }
                        None => a href="/login" class="button" { "Sign In" },
                    }
                }
                (content)
                footer class="site" {
                    p { strong { "HomestayHub" } }
                    p class="muted" { "© 2024 HomestayHub. Connecting travelers with authentic stays." }
                }
            }
        }
    }
}
