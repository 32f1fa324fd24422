use crate::auth::sessions::SessionUser;
use crate::domain::host_application::{HostApplicationForm, AMENITIES, PROPERTY_TYPES};
use crate::domain::FieldErrors;
use crate::templates::{desktop_layout, field_error};
use maud::{html, Markup};

/// What the become-host page shows for a signed-in user.
pub struct BecomeHostVm<'a> {
    pub viewer: &'a SessionUser,
    pub form: &'a HostApplicationForm,
    pub errors: &'a FieldErrors,
    /// `(property_name, status, amenities)` of earlier submissions.
    pub previous: &'a [(String, String, Vec<String>)],
}

pub fn become_host_page(vm: &BecomeHostVm) -> Markup {
    let form = vm.form;
    let errors = vm.errors;

    desktop_layout(
        "Become a Host",
        Some(vm.viewer),
        html! {
            main class="container" {
                h1 { "Become a Host" }
                p class="muted" { "Share your space with travelers from around the world" }

                form method="post" action="/become-host" class="card" {
                    div class="field" {
                        label for="property_name" { "Property Name" }
                        input
                            type="text"
                            id="property_name"
                            name="property_name"
                            value=(form.property_name)
                            placeholder="e.g., Cozy Mountain Retreat";
                        (field_error(errors, "property_name"))
                    }

                    div class="field" {
                        label for="property_type" { "Property Type" }
                        select id="property_type" name="property_type" {
                            option value="" selected[form.property_type.is_empty()] { "Select type" }
                            @for (value, label) in PROPERTY_TYPES {
                                option value=(value) selected[form.property_type == *value] { (label) }
                            }
                        }
                        (field_error(errors, "property_type"))
                    }

                    div class="field" {
                        label for="property_location" { "Location" }
                        input
                            type="text"
                            id="property_location"
                            name="property_location"
                            value=(form.property_location)
                            placeholder="City, Country";
                        (field_error(errors, "property_location"))
                    }

                    div class="field" {
                        label for="property_description" { "Description" }
                        textarea id="property_description" name="property_description" rows="5" {
                            (form.property_description)
                        }
                        (field_error(errors, "property_description"))
                    }

                    div class="grid" {
                        div class="field" {
                            label for="num_rooms" { "Number of Rooms" }
                            input type="number" id="num_rooms" name="num_rooms" min="1" max="50" value=(form.num_rooms);
                            (field_error(errors, "num_rooms"))
                        }
                        div class="field" {
                            label for="price_per_night" { "Price per Night (USD)" }
                            input type="number" id="price_per_night" name="price_per_night" min="1" max="10000" value=(form.price_per_night);
                            (field_error(errors, "price_per_night"))
                        }
                    }

                    fieldset {
                        legend { "Amenities" }
                        div class="grid" {
                            @for amenity in AMENITIES {
                                label {
                                    input type="checkbox" name="amenities" value=(amenity) checked[form.has_amenity(amenity)];
                                    " " (amenity)
                                }
                            }
                        }
                    }

                    button type="submit" { "Submit Application" }
                }

                @if !vm.previous.is_empty() {
                    section {
                        h2 { "Your Applications" }
                        ul {
                            @for (name, status, amenities) in vm.previous {
                                li {
                                    strong { (name) }
                                    " "
                                    span class="badge" { (status) }
                                    @if !amenities.is_empty() {
                                        span class="muted" { " · " (amenities.join(", ")) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn host_submitted_page(viewer: &SessionUser) -> Markup {
    desktop_layout(
        "Application Submitted",
        Some(viewer),
        html! {
            main class="container narrow" {
                div class="card" {
                    h1 { "Application Submitted!" }
                    p {
                        "Thank you for your interest in becoming a host. "
                        "We'll review your application and get back to you soon."
                    }
                    a href="/" class="button" { "Return Home" }
                }
            }
        },
    )
}
