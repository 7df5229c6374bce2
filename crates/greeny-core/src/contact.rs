//! Contact form validation and submission.
//!
//! There is no transport behind the contact form; a valid submission just
//! becomes a timestamped record the caller can log or display.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::user::valid_email;

/// Minimum message body length.
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactFieldError {
    #[error("Enter your full name (min 2 chars).")]
    Name,
    #[error("Enter a valid email address.")]
    Email,
    #[error("Select a subject.")]
    Subject,
    #[error("Enter a message (at least 10 characters).")]
    Message,
}

#[derive(Debug, thiserror::Error)]
#[error("contact form invalid ({} field(s))", .errors.len())]
pub struct ContactError {
    pub errors: Vec<ContactFieldError>,
}

/// Raw contact form input.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated, timestamped contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactForm {
    /// Collect every failing field, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();
        if self.name.trim().len() < 2 {
            errors.push(ContactFieldError::Name);
        }
        if !valid_email(&self.email) {
            errors.push(ContactFieldError::Email);
        }
        if self.subject.is_empty() {
            errors.push(ContactFieldError::Subject);
        }
        if self.message.trim().len() < MIN_MESSAGE_LEN {
            errors.push(ContactFieldError::Message);
        }
        errors
    }

    /// Validate and stamp the submission.
    pub fn submit(&self) -> Result<ContactMessage, ContactError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ContactError { errors });
        }
        let message = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.clone(),
            message: self.message.trim().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        tracing::info!(from = %message.name, subject = %message.subject, "contact form submitted");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactFieldError, ContactForm};

    fn good_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Order question".to_string(),
            message: "Where is my smoothie bundle?".to_string(),
        }
    }

    #[test]
    fn valid_form_submits_with_timestamp() {
        let msg = good_form().submit().unwrap();
        assert_eq!(msg.name, "Ada Lovelace");
        assert!(msg.timestamp.ends_with('Z'));
    }

    #[test]
    fn short_message_rejected() {
        let mut form = good_form();
        form.message = "too short".to_string();
        assert_eq!(form.validate(), vec![ContactFieldError::Message]);
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        assert_eq!(
            errors,
            vec![
                ContactFieldError::Name,
                ContactFieldError::Email,
                ContactFieldError::Subject,
                ContactFieldError::Message,
            ]
        );
    }
}
