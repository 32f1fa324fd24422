pub mod booking;
pub mod contact;
pub mod currency;
pub mod destination;
pub mod homestay;
pub mod host_application;
pub mod validation;

pub use homestay::{Homestay, SearchFilter};
pub use validation::FieldErrors;
