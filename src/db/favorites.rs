use rusqlite::{params, Connection};

use crate::errors::ServerError;

/// Add or remove the homestay from the user's favorites.
/// Returns `true` when it is a favorite afterwards.
pub fn toggle_favorite(
    conn: &Connection,
    user_id: i64,
    homestay_id: &str,
    now: i64,
) -> Result<bool, ServerError> {
    let removed = conn
        .execute(
            "delete from favorites where user_id = ? and homestay_id = ?",
            params![user_id, homestay_id],
        )
        .map_err(|e| ServerError::DbError(format!("delete favorite failed: {e}")))?;

    if removed > 0 {
        return Ok(false);
    }

    conn.execute(
        "insert into favorites (user_id, homestay_id, created_at) values (?, ?, ?)",
        params![user_id, homestay_id, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert favorite failed: {e}")))?;
    Ok(true)
}

pub fn is_favorite(conn: &Connection, user_id: i64, homestay_id: &str) -> Result<bool, ServerError> {
    conn.query_row(
        "select exists(select 1 from favorites where user_id = ? and homestay_id = ?)",
        params![user_id, homestay_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("favorite lookup failed: {e}")))
}

pub fn favorite_ids(conn: &Connection, user_id: i64) -> Result<Vec<String>, ServerError> {
    let mut stmt = conn
        .prepare("select homestay_id from favorites where user_id = ? order by created_at, id")
        .map_err(|e| ServerError::DbError(format!("prepare favorites query failed: {e}")))?;

    let ids = stmt
        .query_map(params![user_id], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("query favorites failed: {e}")))?
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| ServerError::DbError(format!("read favorite row failed: {e}")))?;
    Ok(ids)
}
