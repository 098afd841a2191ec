//! Registration form field rules.
//!
//! Every rule is a pure function over the raw input string. Whole-form validation runs all four
//! rules and reports every failing field rather than stopping at the first one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registration::RegistrationInput;
use crate::session::AttendeeStatus;

pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Inputs of the registration form, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Status,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Status];

    /// DOM id (and `name` attribute) of the input bound to this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Status => "status",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Field that receives focus when Enter is pressed inside this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Email),
            Self::Email => Some(Self::Phone),
            Self::Phone => Some(Self::Status),
            Self::Status => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameMissing,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailMissing,
    #[error("Please enter a valid email")]
    EmailMalformed,
    #[error("Phone number is required")]
    PhoneMissing,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneMalformed,
    #[error("Please select your status")]
    StatusMissing,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameMissing | Self::NameTooShort => Field::Name,
            Self::EmailMissing | Self::EmailMalformed => Field::Email,
            Self::PhoneMissing | Self::PhoneMalformed => Field::Phone,
            Self::StatusMissing => Field::Status,
        }
    }
}

/// Raw form values as read from the page, before any rule is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Option<String>,
}

impl RegistrationDraft {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Status => self.status.as_deref().unwrap_or(""),
        }
    }

    /// Store a raw value; an empty status means nothing is selected.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Status => self.status = Some(value).filter(|v| !v.is_empty()),
        }
    }
}

/// All field failures found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    errors: Vec<FieldError>,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|err| err.field() == field)
    }

    fn record<T>(&mut self, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }
}

/// Trimmed name with at least two characters.
///
/// # Errors
///
/// Returns [`FieldError::NameMissing`] or [`FieldError::NameTooShort`].
pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::NameMissing);
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(trimmed.to_string())
}

/// Trimmed email in `local@domain.tld` shape.
///
/// # Errors
///
/// Returns [`FieldError::EmailMissing`] or [`FieldError::EmailMalformed`].
pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmailMissing);
    }
    let matches = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(trimmed));
    if !matches {
        return Err(FieldError::EmailMalformed);
    }
    Ok(trimmed.to_string())
}

/// Trimmed phone whose digits number exactly ten; separators are allowed.
///
/// # Errors
///
/// Returns [`FieldError::PhoneMissing`] or [`FieldError::PhoneMalformed`].
pub fn validate_phone(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::PhoneMissing);
    }
    if phone_digits(trimmed).len() != PHONE_DIGITS {
        return Err(FieldError::PhoneMalformed);
    }
    Ok(trimmed.to_string())
}

/// # Errors
///
/// Returns [`FieldError::StatusMissing`] when nothing (or an unknown value) is selected.
pub fn validate_status(raw: Option<&str>) -> Result<AttendeeStatus, FieldError> {
    raw.and_then(AttendeeStatus::parse)
        .ok_or(FieldError::StatusMissing)
}

#[must_use]
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a single field, as done when an input loses focus.
///
/// # Errors
///
/// Returns the field's failure reason.
pub fn validate_field(field: Field, draft: &RegistrationDraft) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(&draft.name).map(drop),
        Field::Email => validate_email(&draft.email).map(drop),
        Field::Phone => validate_phone(&draft.phone).map(drop),
        Field::Status => validate_status(draft.status.as_deref()).map(drop),
    }
}

/// Run every rule and build the request payload when all of them pass.
///
/// # Errors
///
/// Returns a [`FormReport`] listing every failing field.
pub fn validate_form(draft: &RegistrationDraft) -> Result<RegistrationInput, FormReport> {
    let mut report = FormReport::default();
    let name = report.record(validate_name(&draft.name));
    let email = report.record(validate_email(&draft.email));
    let phone = report.record(validate_phone(&draft.phone));
    let status = report.record(validate_status(draft.status.as_deref()));

    match (name, email, phone, status) {
        (Some(name), Some(email), Some(phone), Some(status)) => Ok(RegistrationInput {
            name,
            email,
            phone,
            status,
        }),
        _ => Err(report),
    }
}
