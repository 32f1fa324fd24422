use rusqlite::{params, Connection};

use crate::domain::host_application::HostApplicationForm;
use crate::errors::ServerError;

pub fn insert_host_application(
    conn: &Connection,
    user_id: i64,
    form: &HostApplicationForm,
    now: i64,
) -> Result<i64, ServerError> {
    let amenities = serde_json::to_string(&form.amenities)
        .map_err(|e| ServerError::DbError(format!("encode amenities failed: {e}")))?;

    conn.execute(
        r#"
        insert into host_applications (
            user_id, property_name, property_type, property_location,
            property_description, num_rooms, price_per_night, amenities, created_at
        ) values (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            user_id,
            form.property_name,
            form.property_type,
            form.property_location,
            form.property_description,
            form.num_rooms,
            form.price_per_night,
            amenities,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert host application failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// `(property_name, status, amenities)` of a user's applications, newest first.
pub fn applications_for_user(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<(String, String, Vec<String>)>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select property_name, status, amenities from host_applications
             where user_id = ? order by id desc",
        )
        .map_err(|e| ServerError::DbError(format!("prepare applications query failed: {e}")))?;

    let rows = stmt
        .query_map(params![user_id], |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?, r.get::<_, String>(2)?))
        })
        .map_err(|e| ServerError::DbError(format!("query applications failed: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        let (name, status, amenities) =
            row.map_err(|e| ServerError::DbError(format!("read application row failed: {e}")))?;
        let amenities: Vec<String> = serde_json::from_str(&amenities)
            .map_err(|e| ServerError::DbError(format!("decode amenities failed: {e}")))?;
        out.push((name, status, amenities));
    }
    Ok(out)
}
