// src/db/auth.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn user_email(conn: &Connection, user_id: i64) -> Result<String, ServerError> {
    conn.query_row(
        "select email from users where id = ?",
        params![user_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user email failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}

/// Insert a magic link row (token_hash should be SHA-256 bytes).
pub fn insert_magic_link(
    conn: &Connection,
    user_id: i64,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into magic_links (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert magic link failed: {e}")))?;
    Ok(())
}

/// Drop magic links and sessions whose expiry has passed.
/// Returns `(links, sessions)` removed.
pub fn prune_expired(conn: &Connection, now: i64) -> Result<(usize, usize), ServerError> {
    let links = conn
        .execute("delete from magic_links where expires_at <= ?", params![now])
        .map_err(|e| ServerError::DbError(format!("prune magic links failed: {e}")))?;
    let sessions = conn
        .execute("delete from sessions where expires_at <= ?", params![now])
        .map_err(|e| ServerError::DbError(format!("prune sessions failed: {e}")))?;
    Ok((links, sessions))
}

/// Consume a magic link by token hash. The link must exist, be unused and
/// unexpired (`expires_at > now`). On success `used_at` is set and the
/// owner's id returned; otherwise `Ok(None)`.
///
/// Runs in a transaction so a link can only be consumed once.
pub fn consume_magic_link(
    conn: &mut Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let row: Option<(i64, i64, i64, Option<i64>)> = tx
        .query_row(
            "select id, user_id, expires_at, used_at from magic_links where token_hash = ?",
            params![token_hash],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select magic link failed: {e}")))?;

    let Some((link_id, user_id, expires_at, used_at)) = row else {
        return Ok(None);
    };
    if used_at.is_some() || expires_at <= now {
        return Ok(None);
    }

    // Guard on used_at so only one consumer wins.
    let updated = tx
        .execute(
            "update magic_links set used_at = ? where id = ? and used_at is null",
            params![now, link_id],
        )
        .map_err(|e| ServerError::DbError(format!("update magic link used_at failed: {e}")))?;
    if updated != 1 {
        return Ok(None);
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(Some(user_id))
}
