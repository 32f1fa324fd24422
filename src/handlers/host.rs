use astra::Request;
use tracing::info;

use crate::auth::sessions::SessionUser;
use crate::db::host_applications::{applications_for_user, insert_host_application};
use crate::domain::host_application::HostApplicationForm;
use crate::domain::FieldErrors;
use crate::handlers::{current_user, now_unix};
use crate::request::read_form;
use crate::responses::{html_response, html_response_with_status, redirect_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{become_host_page, host_submitted_page, BecomeHostVm};

fn render(
    state: &AppState,
    status: u16,
    viewer: &SessionUser,
    form: &HostApplicationForm,
    errors: &FieldErrors,
) -> ResultResp {
    let previous = state
        .db
        .with_conn(|conn| applications_for_user(conn, viewer.id))?;
    html_response_with_status(
        status,
        become_host_page(&BecomeHostVm {
            viewer,
            form,
            errors,
            previous: &previous,
        }),
    )
}

pub fn show(req: &Request, state: &AppState) -> ResultResp {
    let Some(viewer) = current_user(req, state, now_unix())? else {
        return redirect_response("/login");
    };
    render(
        state,
        200,
        &viewer,
        &HostApplicationForm::default(),
        &FieldErrors::new(),
    )
}

pub fn submit(mut req: Request, state: &AppState) -> ResultResp {
    let now = now_unix();
    let Some(viewer) = current_user(&req, state, now)? else {
        return redirect_response("/login");
    };
    let form = HostApplicationForm::from_form(&read_form(&mut req)?);

    if let Err(errors) = form.validate() {
        return render(state, 422, &viewer, &form, &errors);
    }

    let id = state
        .db
        .with_conn(|conn| insert_host_application(conn, viewer.id, &form, now))?;
    info!(application_id = id, user_id = viewer.id, "host application stored");

    html_response(host_submitted_page(&viewer))
}
