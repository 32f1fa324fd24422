pub mod auth;
pub mod bookings;
pub mod connection;
pub mod contact_messages;
pub mod favorites;
pub mod host_applications;

pub use connection::{init_db, Database};
