use astra::Request;
use tracing::info;

use crate::db::contact_messages::insert_contact_message;
use crate::domain::contact::ContactForm;
use crate::domain::FieldErrors;
use crate::handlers::{current_user, now_unix};
use crate::request::read_form;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{contact_page, contact_sent_page};

pub fn show(req: &Request, state: &AppState) -> ResultResp {
    let viewer = current_user(req, state, now_unix())?;
    let form = ContactForm {
        email: viewer.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
        ..ContactForm::default()
    };
    html_response(contact_page(viewer.as_ref(), &form, &FieldErrors::new()))
}

pub fn submit(mut req: Request, state: &AppState) -> ResultResp {
    let now = now_unix();
    let viewer = current_user(&req, state, now)?;
    let form = ContactForm::from_form(&read_form(&mut req)?);

    if let Err(errors) = form.validate() {
        return html_response_with_status(422, contact_page(viewer.as_ref(), &form, &errors));
    }

    let user_id = viewer.as_ref().map(|u| u.id);
    let id = state
        .db
        .with_conn(|conn| insert_contact_message(conn, user_id, &form, now))?;
    info!(message_id = id, "contact message stored");

    html_response(contact_sent_page(viewer.as_ref()))
}
