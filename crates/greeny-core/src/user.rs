//! Registration: field validation, the stored user profile, and session
//! presence.
//!
//! A "session" is nothing more than the existence of a stored profile —
//! there is no credential check (login is a stubbed non-goal). The
//! password is validated for strength but never persisted.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError, USER_KEY};

/// The durable user record, camelCase to match the storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub newsletter: bool,
    pub registration_date: String,
}

/// Raw registration form input, pre-validation.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub password: String,
    pub confirm_password: String,
    pub newsletter: bool,
    pub accepted_terms: bool,
}

/// One failing registration field, carrying its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Full Name must be at least 2 characters and contain only letters")]
    FullName,
    #[error("Valid email address required")]
    Email,
    #[error("Phone number must be 10-15 digits")]
    Phone,
    #[error("Address must be at least 5 characters")]
    Address,
    #[error("City name is required")]
    City,
    #[error("Postal code is required")]
    PostalCode,
    #[error("Password must be at least 8 characters with uppercase, lowercase, and number")]
    Password,
    #[error("Passwords do not match")]
    ConfirmPassword,
    #[error("You must agree to Terms & Conditions")]
    Terms,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// Every failing field, collected in form order.
    #[error("registration form invalid ({} field(s))", .errors.len())]
    Invalid { errors: Vec<FieldError> },

    /// Unlike cart persistence, a failed profile write is surfaced.
    #[error("could not save registration data")]
    Storage(#[from] StorageError),
}

/// Password strength buckets for the registration form's meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

pub fn valid_full_name(name: &str) -> bool {
    let name = name.trim();
    name.len() >= 2 && name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: a nonempty
/// local part, exactly one `@`, and a domain with an interior dot. Not an
/// RFC parser, by design.
pub fn valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // the dot needs at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

pub fn valid_address(address: &str) -> bool {
    address.trim().len() >= 5
}

pub fn valid_city(city: &str) -> bool {
    city.trim().len() >= 2
}

pub fn valid_postal_code(code: &str) -> bool {
    code.trim().len() >= 3
}

pub fn valid_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Score a password for the strength meter: length, mixed case, digits,
/// and symbols each earn a point.
#[must_use]
pub fn password_strength(password: &str) -> Strength {
    let mut score = 0u8;
    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    match score {
        0 | 1 => Strength::Weak,
        2 | 3 => Strength::Medium,
        _ => Strength::Strong,
    }
}

// ---------------------------------------------------------------------------
// Form validation and persistence
// ---------------------------------------------------------------------------

impl RegistrationForm {
    /// Run every field check and collect all failures, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !valid_full_name(&self.full_name) {
            errors.push(FieldError::FullName);
        }
        if !valid_email(&self.email) {
            errors.push(FieldError::Email);
        }
        if !valid_phone(&self.phone) {
            errors.push(FieldError::Phone);
        }
        if !valid_address(&self.address) {
            errors.push(FieldError::Address);
        }
        if !valid_city(&self.city) {
            errors.push(FieldError::City);
        }
        if !valid_postal_code(&self.postal_code) {
            errors.push(FieldError::PostalCode);
        }
        if !valid_password(&self.password) {
            errors.push(FieldError::Password);
        }
        if self.confirm_password.is_empty() || self.confirm_password != self.password {
            errors.push(FieldError::ConfirmPassword);
        }
        if !self.accepted_terms {
            errors.push(FieldError::Terms);
        }
        errors
    }
}

/// Validate the form and, on success, persist the profile under
/// [`USER_KEY`]. The password never reaches storage.
pub fn register<S: KeyValueStore>(
    form: &RegistrationForm,
    storage: &mut S,
) -> Result<UserProfile, RegisterError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(RegisterError::Invalid { errors });
    }

    let profile = UserProfile {
        full_name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        address: form.address.trim().to_string(),
        city: form.city.trim().to_string(),
        postal_code: form.postal_code.trim().to_string(),
        newsletter: form.newsletter,
        registration_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let payload = serde_json::to_string(&profile).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize user profile");
        RegisterError::Storage(StorageError::Io(std::io::Error::other(e)))
    })?;
    storage.set(USER_KEY, &payload)?;
    tracing::info!(user = %profile.full_name, "registration stored");
    Ok(profile)
}

/// Whether a user record exists. Presence alone counts as "logged in".
pub fn session_present<S: KeyValueStore>(storage: &S) -> bool {
    matches!(storage.get(USER_KEY), Ok(Some(_)))
}

/// Read the stored profile; malformed or absent data reads as no profile.
pub fn load_profile<S: KeyValueStore>(storage: &S) -> Option<UserProfile> {
    let raw = storage.get(USER_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed user profile");
            None
        }
    }
}
