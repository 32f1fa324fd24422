use crate::config::Config;
use crate::db::init_db;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod logging;
mod mailer;
mod request;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    logging::init_logging(&config.log.filter);

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "mailer initialization failed");
            std::process::exit(1);
        }
    };
    if state.mailer.is_none() {
        info!("RESEND_API_KEY not set, emails will be logged instead of sent");
    }

    if let Err(e) = init_db(&state.db, &config.database.schema_path) {
        error!(error = %e, db = %state.db.path().display(), "database initialization failed");
        std::process::exit(1);
    }

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = config.server.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
