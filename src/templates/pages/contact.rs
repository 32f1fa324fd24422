use crate::auth::sessions::SessionUser;
use crate::domain::contact::ContactForm;
use crate::domain::FieldErrors;
use crate::templates::components::card;
use crate::templates::{desktop_layout, field_error};
use maud::{html, Markup};

fn info_cards() -> Markup {
    html! {
        div class="grid" {
            (card("Email Us", html! { p { "support@homestayhub.com" } }))
            (card("Call Us", html! { p { "+1 (555) 123-4567" } }))
            (card("Visit Us", html! { p { "123 Travel Street, Adventure City" } }))
        }
    }
}

pub fn contact_page(viewer: Option<&SessionUser>, form: &ContactForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        "Contact",
        viewer,
        html! {
            main class="container" {
                h1 { "Contact Us" }
                p class="muted" { "Have questions? We'd love to hear from you." }

                (info_cards())

                form method="post" action="/contact" class="card" {
                    div class="field" {
                        label for="name" { "Name" }
                        input type="text" id="name" name="name" value=(form.name) required;
                        (field_error(errors, "name"))
                    }
                    div class="field" {
                        label for="email" { "Email" }
                        input type="email" id="email" name="email" value=(form.email) required;
                        (field_error(errors, "email"))
                    }
                    div class="field" {
                        label for="subject" { "Subject" }
                        input type="text" id="subject" name="subject" value=(form.subject) required;
                        (field_error(errors, "subject"))
                    }
                    div class="field" {
                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" required { (form.message) }
                        (field_error(errors, "message"))
                    }
                    button type="submit" { "Send Message" }
                }
            }
        },
    )
}

pub fn contact_sent_page(viewer: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Message Sent",
        viewer,
        html! {
            main class="container narrow" {
                div class="card" {
                    h1 { "Message Sent!" }
                    p { "Thank you for contacting us. We'll get back to you soon." }
                    a href="/contact" class="button" { "Send Another Message" }
                }
            }
        },
    )
}
