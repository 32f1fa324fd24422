use astra::Request;
use tracing::{info, warn};

use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions::{
    clear_session_cookie, create_session, revoke_session, session_cookie, SESSION_COOKIE,
};
use crate::errors::ServerError;
use crate::handlers::{current_user, now_unix};
use crate::request::{cookie, parse_query, read_form};
use crate::responses::{
    html_response, html_response_with_status, redirect_response, redirect_with_cookie, ResultResp,
};
use crate::state::AppState;
use crate::templates::pages::{check_email_page, login_page};

pub fn login(req: &Request, state: &AppState) -> ResultResp {
    if current_user(req, state, now_unix())?.is_some() {
        return redirect_response("/");
    }
    html_response(login_page(None))
}

pub fn request_link(mut req: Request, state: &AppState) -> ResultResp {
    let form = read_form(&mut req)?;
    let svc = MagicLinkService::new(MagicLinkConfig::default());

    let issued = match state
        .db
        .with_conn(|conn| svc.request_link(conn, form.get("email"), now_unix()))
    {
        Ok(issued) => issued,
        Err(ServerError::BadRequest(_)) => {
            return html_response_with_status(
                422,
                login_page(Some("Please enter a valid email address")),
            );
        }
        Err(err) => return Err(err),
    };

    let link = state.absolute_url(&issued.link);
    match &state.mailer {
        Some(mailer) => {
            if let Err(err) = mailer.send_magic_link(&issued.email, &link) {
                warn!(error = %err, user_id = issued.user_id, "magic link email failed");
            }
        }
        None => info!(email = %issued.email, link = %link, "mail not configured, magic link logged"),
    }

    html_response(check_email_page(&issued.email))
}

pub fn magic(req: &Request, state: &AppState) -> ResultResp {
    let query = parse_query(req);
    let svc = MagicLinkService::new(MagicLinkConfig::default());
    let now = now_unix();

    let token = state.db.with_conn(|conn| {
        let redeemed = svc.redeem(conn, query.get("token"), now)?;
        info!(user_id = redeemed.user_id, email = %redeemed.email, "signed in");
        create_session(conn, redeemed.user_id, now)
    })?;

    redirect_with_cookie("/", &session_cookie(&token))
}

pub fn logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = cookie(req, SESSION_COOKIE).filter(|t| !t.is_empty()) {
        state
            .db
            .with_conn(|conn| revoke_session(conn, &token, now_unix()))?;
    }
    redirect_with_cookie("/", &clear_session_cookie())
}
