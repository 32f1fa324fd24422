pub mod become_host;
pub mod check_email;
pub mod contact;
pub mod error;
pub mod favorites;
pub mod home;
pub mod homestay_details;
pub mod homestays;
pub mod login;

pub use become_host::{become_host_page, host_submitted_page, BecomeHostVm};
pub use check_email::check_email_page;
pub use contact::{contact_page, contact_sent_page};
pub use error::error_page;
pub use favorites::favorites_page;
pub use home::home_page;
pub use homestay_details::{homestay_details_page, DetailsVm};
pub use homestays::homestays_page;
pub use login::login_page;
