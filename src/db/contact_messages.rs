use rusqlite::{params, Connection};

use crate::domain::contact::ContactForm;
use crate::errors::ServerError;

pub fn insert_contact_message(
    conn: &Connection,
    user_id: Option<i64>,
    form: &ContactForm,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into contact_messages (user_id, name, email, subject, message, created_at)
         values (?, ?, ?, ?, ?, ?)",
        params![user_id, form.name, form.email, form.subject, form.message, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert contact message failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
pub fn count_contact_messages(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from contact_messages", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count contact messages failed: {e}")))
}
