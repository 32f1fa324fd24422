use crate::auth::sessions::SessionUser;
use crate::domain::booking::BookingForm;
use crate::domain::currency::format_price;
use crate::domain::{FieldErrors, Homestay};
use crate::templates::components::price_per_night;
use crate::templates::{desktop_layout, field_error, flash, Flash};
use maud::{html, Markup};

pub struct DetailsVm<'a> {
    pub viewer: Option<&'a SessionUser>,
    pub homestay: &'a Homestay,
    pub form: &'a BookingForm,
    pub errors: &'a FieldErrors,
    pub flash: Option<&'a Flash>,
    pub is_favorite: bool,
}

fn favorite_toggle(h: &Homestay, is_favorite: bool) -> Markup {
    let label = if is_favorite { "♥ Saved" } else { "♡ Save" };
    html! {
        form method="post" action={ "/homestay/" (h.id) "/favorite" } class="inline" {
            button type="submit" class="ghost" { (label) }
        }
    }
}

fn booking_form(vm: &DetailsVm) -> Markup {
    let h = vm.homestay;
    let form = vm.form;
    let errors = vm.errors;
    let selected_guests = form.guests_or_default();
    let nights = form.nights();

    html! {
        form method="post" action={ "/homestay/" (h.id) "/book" } class="card booking" {
            h2 { "Book this homestay" }
            (price_per_night(&format_price(h.price)))

            @if let Some(f) = vm.flash {
                (flash(f))
            }

            div class="grid" {
                div class="field" {
                    label for="check_in" { "Check-in" }
                    input type="date" id="check_in" name="check_in" value=(form.check_in);
                    (field_error(errors, "check_in"))
                }
                div class="field" {
                    label for="check_out" { "Check-out" }
                    input type="date" id="check_out" name="check_out" value=(form.check_out);
                    (field_error(errors, "check_out"))
                }
            }

            div class="field" {
                label for="guests" { "Guests" }
                select id="guests" name="guests" {
                    @for n in 1..=h.max_guests {
                        option value=(n) selected[n == selected_guests] {
                            (n) @if n == 1 { " guest" } @else { " guests" }
                        }
                    }
                }
                (field_error(errors, "guests"))
            }

            div class="field" {
                label for="guest_name" { "Full Name *" }
                input type="text" id="guest_name" name="guest_name" value=(form.guest_name) maxlength="100";
                (field_error(errors, "guest_name"))
            }
            div class="field" {
                label for="guest_email" { "Email *" }
                input type="email" id="guest_email" name="guest_email" value=(form.guest_email) maxlength="255";
                (field_error(errors, "guest_email"))
            }
            div class="field" {
                label for="guest_phone" { "Phone" }
                input type="tel" id="guest_phone" name="guest_phone" value=(form.guest_phone) maxlength="20";
                (field_error(errors, "guest_phone"))
            }
            div class="field" {
                label for="message" { "Message to host" }
                textarea id="message" name="message" rows="3" maxlength="500" { (form.message) }
                (field_error(errors, "message"))
            }

            @if nights > 0 {
                div class="breakdown" {
                    p {
                        "$" (h.price) " × " (nights) " nights"
                        span class="right" { "$" (h.price * nights) }
                    }
                    p {
                        strong { "Total" }
                        span class="right" { strong { "$" (h.price * nights) } }
                    }
                }
            }

            button type="submit" { "Request to Book" }
            p class="muted" { "You won't be charged yet" }
        }
    }
}

pub fn homestay_details_page(vm: &DetailsVm) -> Markup {
    let h = vm.homestay;

    desktop_layout(
        h.title,
        vm.viewer,
        html! {
            main class="container" {
                p { a href="/homestays" { "← Back to search" } }

                img class="hero-image" src=(h.image) alt=(h.title);

                div class="details" {
                    div {
                        h1 { (h.title) }
                        p class="muted" {
                            (h.location) " · ★ " (format!("{:.1}", h.rating)) " (" (h.reviews) " reviews)"
                        }
                        (favorite_toggle(h, vm.is_favorite))

                        p {
                            (h.max_guests) " guests · "
                            (h.bedrooms) " bedrooms · "
                            (h.bathrooms) " bathrooms"
                        }

                        section class="card" {
                            h2 { "Hosted by " (h.host) }
                            p class="muted" { "Superhost · Responds within an hour" }
                        }

                        section {
                            h2 { "About this place" }
                            p { (h.description) }
                        }

                        section {
                            h2 { "Amenities" }
                            ul class="amenities" {
                                @for a in h.amenities {
                                    li { (a) }
                                }
                            }
                        }

                        section {
                            h2 { "House Rules" }
                            ul {
                                @for rule in h.house_rules {
                                    li { (rule) }
                                }
                            }
                        }
                    }

                    (booking_form(vm))
                }
            }
        },
    )
}
