use crate::domain::validation::{check_length, is_valid_email, FieldErrors};
use crate::request::FormFields;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_form(form: &FormFields) -> Self {
        Self {
            name: form.get("name").trim().to_string(),
            email: form.get("email").trim().to_string(),
            subject: form.get("subject").trim().to_string(),
            message: form.get("message").trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_length(&mut errors, "name", "Name", &self.name, 2, 100);
        if !is_valid_email(&self.email) {
            errors.add("email", "Invalid email address");
        } else if self.email.chars().count() > 255 {
            errors.add("email", "Email must be at most 255 characters");
        }
        check_length(&mut errors, "subject", "Subject", &self.subject, 3, 200);
        check_length(&mut errors, "message", "Message", &self.message, 10, 2000);

        errors.into_result(())
    }
}
