use crate::config::Config;
use crate::db::Database;
use crate::mailer::{MailerError, ResendMailer};

/// Everything a request handler needs; shared read-only across workers.
pub struct AppState {
    pub db: Database,
    pub mailer: Option<ResendMailer>,
    /// Public origin for absolute links, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(db: Database, mailer: Option<ResendMailer>, base_url: &str) -> Self {
        Self {
            db,
            mailer,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, MailerError> {
        let mailer = ResendMailer::from_config(&config.mail)?;
        Ok(Self::new(
            Database::new(config.database.path.clone()),
            mailer,
            &config.server.base_url,
        ))
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
