//! Submit-time validation of the signup form.
//!
//! Both fields are checked on every call and all failures are reported
//! together. The password field carries one combined message; the itemized
//! per-rule list is exposed separately through [`crate::validate`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::validator::validate;

/// Message attached to a missing or malformed email.
pub const INVALID_EMAIL_MESSAGE: &str = "A valid email address is required";

/// `local@label(.label)+` with an RFC 5322 dot-atom local part and LDH labels.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Values captured by the form for one submission attempt.
#[derive(Debug)]
pub struct FormValues {
    pub email: String,
    pub password: SecretString,
}

impl FormValues {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            email: email.into(),
            password: SecretString::new(password.into_boxed_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Email,
    Password,
}

impl FieldName {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// `required/invalid-email`
    InvalidEmail,
    /// `password-policy-violation`
    PasswordPolicyViolation,
}

impl FieldErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldErrorKind::InvalidEmail => "required/invalid-email",
            FieldErrorKind::PasswordPolicyViolation => "password-policy-violation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Field name to error, ordered email first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(name, error)| (*name, error))
    }

    fn insert(&mut self, field: FieldName, kind: FieldErrorKind, message: String) {
        self.0.insert(field, FieldError { kind, message });
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<_> = self.0.keys().map(|name| name.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Form rejected, {0}")]
    Fields(FieldErrors),
    /// Validation could not run; no per-field detail is available.
    #[error("Form validation unavailable: {0}")]
    Unavailable(String),
}

fn email_error(email: &str) -> Result<Option<String>, FormError> {
    let re = match &*EMAIL_RE {
        Ok(re) => re,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Email grammar failed to compile: {}", e);
            return Err(FormError::Unavailable(e.to_string()));
        }
    };

    if !re.is_match(email) {
        return Ok(Some(INVALID_EMAIL_MESSAGE.to_string()));
    }
    Ok(None)
}

/// Validates the whole form, returning the values back on success.
///
/// # Errors
///
/// - [`FormError::Fields`] with every failing field
/// - [`FormError::Unavailable`] if the email grammar cannot be built
pub fn validate_form(values: FormValues) -> Result<FormValues, FormError> {
    let mut errors = FieldErrors::default();

    if let Some(message) = email_error(&values.email)? {
        errors.insert(FieldName::Email, FieldErrorKind::InvalidEmail, message);
    }

    if let Some(message) = validate(values.password.expose_secret()).combined_message() {
        errors.insert(
            FieldName::Password,
            FieldErrorKind::PasswordPolicyViolation,
            message,
        );
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(FormError::Fields(errors))
    }
}
