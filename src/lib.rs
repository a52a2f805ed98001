//! Signup password policy library
//!
//! This library provides the logic behind an email/password signup form:
//! a fixed password policy, submit-time form validation, and the live
//! checklist and strength feedback shown while the password is typed.
//!
//! # Features
//!
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_BLACKLIST_PATH`: Custom path to the common-password list
//!   used by the strength meter (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{validate, validate_form, FieldName, FormError, FormValues, RuleId};
//!
//! // Itemized feedback for the checklist
//! let outcome = validate("abcdefghij12");
//! assert!(outcome.violates(RuleId::HasUppercase));
//!
//! // One combined message per field at submit time
//! match validate_form(FormValues::new("a@b.com", "short1A!")) {
//!     Err(FormError::Fields(errors)) => {
//!         assert!(errors.contains(FieldName::Password));
//!         assert!(!errors.contains(FieldName::Email));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod blacklist;
mod form;
mod placement;
mod presenter;
mod rules;
mod strength;
mod validator;

// Public API
pub use blacklist::{
    blacklist_path, init_blacklist, init_blacklist_from_path, is_blacklisted, BlacklistError,
    BLACKLIST_PATH_ENV,
};
pub use form::{
    validate_form, FieldError, FieldErrorKind, FieldErrors, FieldName, FormError, FormValues,
    INVALID_EMAIL_MESSAGE,
};
pub use placement::{BelowReference, FloatingStyle, Positioner, Rect};
pub use presenter::{
    Checklist, ChecklistItem, ChecklistVisibility, LogSubmission, SignupForm, SubmitHandler,
    SubmitOutcome,
};
pub use rules::{rule, Rule, RuleId, UnknownRule, MAX_LENGTH, MIN_LENGTH, RULES};
pub use strength::{estimate_strength, StrengthLevel, StrengthReport};
pub use validator::{validate, ValidationOutcome, Violation};
