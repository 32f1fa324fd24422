#[cfg(test)]
use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::domain::booking::ValidBooking;
use crate::domain::Homestay;
use crate::errors::ServerError;

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: i64,
    pub homestay_id: String,
    pub homestay_title: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: i64,
    pub message: Option<String>,
    pub status: String,
    pub created_at: i64,
}

/// Store a booking request. Returns the new row id.
pub fn insert_booking(
    conn: &Connection,
    homestay: &Homestay,
    booking: &ValidBooking,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into bookings (
            homestay_id, homestay_title, guest_name, guest_email, guest_phone,
            check_in, check_out, guests, total_price, message, created_at
        ) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            homestay.id,
            homestay.title,
            booking.guest_name,
            booking.guest_email,
            booking.guest_phone,
            booking.check_in,
            booking.check_out,
            booking.guests,
            booking.total_price,
            booking.message,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert booking failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
pub fn bookings_for_homestay(
    conn: &Connection,
    homestay_id: &str,
) -> Result<Vec<BookingRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, homestay_id, homestay_title, guest_name, guest_email, guest_phone,
                   check_in, check_out, guests, total_price, message, status, created_at
            from bookings
            where homestay_id = ?
            order by id
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare bookings query failed: {e}")))?;

    let rows = stmt
        .query_map(params![homestay_id], |r| {
            Ok(BookingRow {
                id: r.get(0)?,
                homestay_id: r.get(1)?,
                homestay_title: r.get(2)?,
                guest_name: r.get(3)?,
                guest_email: r.get(4)?,
                guest_phone: r.get(5)?,
                check_in: r.get(6)?,
                check_out: r.get(7)?,
                guests: r.get(8)?,
                total_price: r.get(9)?,
                message: r.get(10)?,
                status: r.get(11)?,
                created_at: r.get(12)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("query bookings failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read booking row failed: {e}")))
}
