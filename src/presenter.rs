//! Signup form state and live password feedback
//!
//! [`SignupForm`] owns the field values of one mounted form. Every password
//! change synchronously re-runs the policy and republishes the checklist;
//! focus and blur only decide whether the checklist is shown.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{ChecklistVisibility, Rect, SignupForm, SubmitOutcome};
//!
//! let mut form = SignupForm::new();
//! form.on_password_focus(Rect { x: 0.0, y: 0.0, width: 300.0, height: 40.0 });
//! assert_eq!(form.visibility(), ChecklistVisibility::Visible);
//!
//! form.on_email_change("user@example.com");
//! form.on_password_change("Abcdefgh123!");
//! assert!(form.checklist().all_satisfied());
//!
//! let mut submitted = Vec::new();
//! let outcome = form.submit(&mut |values: pwd_policy::FormValues| submitted.push(values.email));
//! assert_eq!(outcome, SubmitOutcome::Submitted);
//! assert_eq!(submitted, vec!["user@example.com".to_string()]);
//! ```

use secrecy::{ExposeSecret, SecretString};

use crate::form::{validate_form, FieldError, FieldErrors, FieldName, FormError, FormValues};
use crate::placement::{BelowReference, FloatingStyle, Positioner, Rect};
use crate::rules::{RuleId, RULES};
use crate::strength::{estimate_strength, StrengthReport};
use crate::validator::{validate, ValidationOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecklistVisibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub rule_id: RuleId,
    pub label: &'static str,
    pub satisfied: bool,
}

/// One entry per policy rule, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// A rule is satisfied iff it is absent from `outcome`.
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        let items = RULES
            .iter()
            .map(|rule| ChecklistItem {
                rule_id: rule.id,
                label: rule.label,
                satisfied: !outcome.violates(rule.id),
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn is_satisfied(&self, id: RuleId) -> bool {
        self.items
            .iter()
            .any(|item| item.rule_id == id && item.satisfied)
    }

    pub fn all_satisfied(&self) -> bool {
        self.items.iter().all(|item| item.satisfied)
    }
}

/// Receives the validated values of an accepted submission.
pub trait SubmitHandler {
    fn on_submit(&mut self, values: FormValues);
}

impl<F: FnMut(FormValues)> SubmitHandler for F {
    fn on_submit(&mut self, values: FormValues) {
        self(values)
    }
}

/// Logs the submitted email and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmission;

impl SubmitHandler for LogSubmission {
    fn on_submit(&mut self, _values: FormValues) {
        #[cfg(feature = "tracing")]
        tracing::info!(email = %_values.email, "Signup submitted");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were handed to the submit handler.
    Submitted,
    /// At least one field is invalid; see [`SignupForm::field_error`].
    Rejected,
    /// Validation could not run; show a generic failure state.
    ValidationFailed,
}

type ChecklistListener = Box<dyn FnMut(&Checklist)>;

/// State of one mounted signup form.
pub struct SignupForm<P = BelowReference> {
    email: String,
    password: SecretString,
    outcome: ValidationOutcome,
    checklist: Checklist,
    strength: StrengthReport,
    visibility: ChecklistVisibility,
    placement: Option<FloatingStyle>,
    positioner: P,
    password_revealed: bool,
    errors: FieldErrors,
    validation_failed: bool,
    submit_attempted: bool,
    listeners: Vec<ChecklistListener>,
}

impl SignupForm<BelowReference> {
    pub fn new() -> Self {
        Self::with_positioner(BelowReference::default())
    }
}

impl Default for SignupForm<BelowReference> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Positioner> SignupForm<P> {
    pub fn with_positioner(positioner: P) -> Self {
        let outcome = validate("");
        Self {
            email: String::new(),
            password: SecretString::new("".into()),
            checklist: Checklist::from_outcome(&outcome),
            outcome,
            strength: estimate_strength(""),
            visibility: ChecklistVisibility::Hidden,
            placement: None,
            positioner,
            password_revealed: false,
            errors: FieldErrors::default(),
            validation_failed: false,
            submit_attempted: false,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback invoked with the checklist after every
    /// password change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Checklist) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn on_email_change(&mut self, value: &str) {
        self.email = value.to_string();
        self.revalidate();
    }

    /// Recomputes the policy outcome, checklist and strength for `value`
    /// before returning.
    pub fn on_password_change(&mut self, value: &str) {
        self.password = SecretString::new(value.into());
        self.outcome = validate(value);
        self.checklist = Checklist::from_outcome(&self.outcome);
        self.strength = estimate_strength(value);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            violations = self.outcome.violations().len(),
            "Password checklist recomputed"
        );

        for listener in &mut self.listeners {
            listener(&self.checklist);
        }
        self.revalidate();
    }

    /// Shows the checklist, anchored to the input's current bounds.
    pub fn on_password_focus(&mut self, input: Rect) {
        self.placement = Some(self.positioner.place(&input));
        self.visibility = ChecklistVisibility::Visible;
    }

    pub fn on_password_blur(&mut self) {
        self.visibility = ChecklistVisibility::Hidden;
    }

    pub fn toggle_password_reveal(&mut self) {
        self.password_revealed = !self.password_revealed;
    }

    /// Validates the form and, if valid, hands the values to `handler`.
    ///
    /// The handler is never called while any field is invalid.
    pub fn submit<H: SubmitHandler>(&mut self, handler: &mut H) -> SubmitOutcome {
        self.submit_attempted = true;
        let result = validate_form(self.values());
        self.complete_submit(result, handler)
    }

    fn complete_submit<H: SubmitHandler>(
        &mut self,
        result: Result<FormValues, FormError>,
        handler: &mut H,
    ) -> SubmitOutcome {
        match self.record(result) {
            Some(values) => {
                handler.on_submit(values);
                SubmitOutcome::Submitted
            }
            None if self.validation_failed => SubmitOutcome::ValidationFailed,
            None => SubmitOutcome::Rejected,
        }
    }

    /// After the first submit, inline errors follow every change.
    fn revalidate(&mut self) {
        if !self.submit_attempted {
            return;
        }
        let result = validate_form(self.values());
        self.record(result);
    }

    /// Stores the inline error state for `result`, returning the values
    /// only when every field is valid.
    fn record(&mut self, result: Result<FormValues, FormError>) -> Option<FormValues> {
        match result {
            Ok(values) => {
                self.errors = FieldErrors::default();
                self.validation_failed = false;
                Some(values)
            }
            Err(FormError::Fields(errors)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Signup rejected: {}", errors);
                self.errors = errors;
                self.validation_failed = false;
                None
            }
            Err(FormError::Unavailable(_reason)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Signup validation unavailable: {}", _reason);
                self.errors = FieldErrors::default();
                self.validation_failed = true;
                None
            }
        }
    }

    fn values(&self) -> FormValues {
        FormValues {
            email: self.email.clone(),
            password: SecretString::new(self.password.expose_secret().into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn strength(&self) -> &StrengthReport {
        &self.strength
    }

    pub fn visibility(&self) -> ChecklistVisibility {
        self.visibility
    }

    /// Checklist style, only while the checklist is visible.
    pub fn placement(&self) -> Option<FloatingStyle> {
        match self.visibility {
            ChecklistVisibility::Visible => self.placement,
            ChecklistVisibility::Hidden => None,
        }
    }

    pub fn is_password_revealed(&self) -> bool {
        self.password_revealed
    }

    /// The `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_revealed { "text" } else { "password" }
    }

    pub fn field_error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn validation_failed(&self) -> bool {
        self.validation_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldErrorKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn input_rect() -> Rect {
        Rect { x: 16.0, y: 200.0, width: 280.0, height: 36.0 }
    }

    #[test]
    fn test_initial_state() {
        let form = SignupForm::new();
        assert_eq!(form.visibility(), ChecklistVisibility::Hidden);
        assert_eq!(form.placement(), None);
        assert_eq!(form.checklist().items().len(), 7);
        assert!(!form.checklist().is_satisfied(RuleId::MinLength));
        assert!(form.checklist().is_satisfied(RuleId::NoSpaces));
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn test_focus_and_blur_toggle_visibility() {
        let mut form = SignupForm::new();
        form.on_password_focus(input_rect());
        assert_eq!(form.visibility(), ChecklistVisibility::Visible);
        let style = form.placement().expect("placed on focus");
        assert_eq!(style.width, 280.0);
        assert_eq!(style.top, 244.0);

        form.on_password_blur();
        assert_eq!(form.visibility(), ChecklistVisibility::Hidden);
        assert_eq!(form.placement(), None);
    }

    #[test]
    fn test_checklist_updates_while_hidden() {
        let mut form = SignupForm::new();
        form.on_password_change("abcdefghij12");
        assert_eq!(form.visibility(), ChecklistVisibility::Hidden);

        let unsatisfied: Vec<_> = form
            .checklist()
            .items()
            .iter()
            .filter(|item| !item.satisfied)
            .map(|item| item.rule_id)
            .collect();
        assert_eq!(unsatisfied, vec![RuleId::HasUppercase, RuleId::HasSymbol]);
    }

    #[test]
    fn test_checklist_mirrors_outcome() {
        let mut form = SignupForm::new();
        for pwd in ["", "Abcdefg 12345", "Abcdefgh123!", "x"] {
            form.on_password_change(pwd);
            for item in form.checklist().items() {
                assert_eq!(item.satisfied, !form.outcome().violates(item.rule_id));
            }
        }
    }

    #[test]
    fn test_listeners_notified_on_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut form = SignupForm::new();
        form.subscribe(move |checklist| sink.borrow_mut().push(checklist.all_satisfied()));
        form.on_password_change("Abcdefgh123");
        form.on_password_change("Abcdefgh123!");

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_submit_rejected_does_not_call_handler() {
        let mut form = SignupForm::new();
        form.on_email_change("not-an-email");
        form.on_password_change("Abcdefgh123!");

        let mut calls = 0;
        let outcome = form.submit(&mut |_values: FormValues| calls += 1);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(calls, 0);
        assert_eq!(
            form.field_error(FieldName::Email).map(|e| e.kind),
            Some(FieldErrorKind::InvalidEmail)
        );
        assert!(form.field_error(FieldName::Password).is_none());
    }

    #[test]
    fn test_submit_accepted_hands_values_over() {
        let mut form = SignupForm::new();
        form.on_email_change("a@b.com");
        form.on_password_change("Abcdefgh123!");

        let mut received = None;
        let outcome = form.submit(&mut |values: FormValues| {
            received = Some((values.email, values.password.expose_secret().to_string()))
        });

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(
            received,
            Some(("a@b.com".to_string(), "Abcdefgh123!".to_string()))
        );
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_errors_follow_changes_after_first_submit() {
        let mut form = SignupForm::new();
        form.on_email_change("a@b.com");
        form.on_password_change("short1A!");
        assert!(form.field_errors().is_empty());

        assert_eq!(form.submit(&mut LogSubmission), SubmitOutcome::Rejected);
        assert!(form.field_error(FieldName::Password).is_some());

        form.on_password_change("Abcdefgh123!");
        assert!(form.field_error(FieldName::Password).is_none());

        form.on_email_change("broken");
        assert!(form.field_error(FieldName::Email).is_some());
    }

    #[test]
    fn test_unavailable_validation_fails_without_calling_handler() {
        let mut form = SignupForm::new();
        form.on_email_change("broken");
        assert_eq!(form.submit(&mut LogSubmission), SubmitOutcome::Rejected);
        assert!(form.field_error(FieldName::Email).is_some());

        let mut calls = 0;
        let outcome = form.complete_submit(
            Err(FormError::Unavailable("email grammar failed".to_string())),
            &mut |_values: FormValues| calls += 1,
        );

        assert_eq!(outcome, SubmitOutcome::ValidationFailed);
        assert!(form.validation_failed());
        assert!(form.field_errors().is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_validation_failed_clears_on_next_success() {
        let mut form = SignupForm::new();
        form.record(Err(FormError::Unavailable("email grammar failed".to_string())));
        assert!(form.validation_failed());

        form.on_email_change("a@b.com");
        form.on_password_change("Abcdefgh123!");
        assert_eq!(form.submit(&mut LogSubmission), SubmitOutcome::Submitted);
        assert!(!form.validation_failed());
    }

    #[test]
    fn test_password_reveal_toggle() {
        let mut form = SignupForm::new();
        form.toggle_password_reveal();
        assert!(form.is_password_revealed());
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_reveal();
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn test_custom_positioner() {
        struct Fixed;
        impl Positioner for Fixed {
            fn place(&self, _reference: &Rect) -> FloatingStyle {
                FloatingStyle { top: 1.0, left: 2.0, width: 3.0 }
            }
        }

        let mut form = SignupForm::with_positioner(Fixed);
        form.on_password_focus(input_rect());
        assert_eq!(
            form.placement(),
            Some(FloatingStyle { top: 1.0, left: 2.0, width: 3.0 })
        );
    }

    #[test]
    fn test_strength_tracks_password() {
        let mut form = SignupForm::new();
        form.on_password_change("Abcdefgh123!");
        assert!(form.strength().score > 0);
        form.on_password_change("");
        assert_eq!(form.strength().score, 0);
    }
}
