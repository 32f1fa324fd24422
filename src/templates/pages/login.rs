use crate::templates::desktop_layout;
use maud::{html, Markup};

/// `error` is shown above the form after a rejected submission.
pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Enter your email and we’ll send you a secure sign-in link."
                }

                @if let Some(msg) = error {
                    p class="field-error" { (msg) }
                }

                form method="post" action="/auth/request-link" class="card" {
                    div class="field" {
                        label for="email" { "Email address" }
                        input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@domain.com"
                            autocomplete="email"
                            required;
                    }
                    button type="submit" { "Send sign-in link" }
                    p class="muted" { "No password needed." }
                }
            }
        },
    )
}
