//! Password policy validator - runs every rule and collects the failures.

use crate::rules::{RuleId, RULES};

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub rule_id: RuleId,
    pub message: &'static str,
}

/// Result of checking a password against the policy.
///
/// `Violations` always holds at least one entry, ordered as the rules are
/// declared in [`RULES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Compliant,
    Violations(Vec<Violation>),
}

impl ValidationOutcome {
    pub fn is_compliant(&self) -> bool {
        matches!(self, ValidationOutcome::Compliant)
    }

    /// Failed rules in declaration order; empty when compliant.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationOutcome::Compliant => &[],
            ValidationOutcome::Violations(violations) => violations,
        }
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.violations().iter().map(|v| v.rule_id)
    }

    /// Returns `true` if the rule `id` failed.
    pub fn violates(&self, id: RuleId) -> bool {
        self.rule_ids().any(|failed| failed == id)
    }

    /// All violation messages joined with `", "`, or `None` when compliant.
    pub fn combined_message(&self) -> Option<String> {
        match self {
            ValidationOutcome::Compliant => None,
            ValidationOutcome::Violations(violations) => Some(
                violations
                    .iter()
                    .map(|v| v.message)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// Checks `password` against every policy rule.
///
/// Total over all inputs: any string, including the empty one, yields an
/// outcome.
///
/// # Example
///
/// ```rust
/// use pwd_policy::{validate, RuleId};
///
/// assert!(validate("Abcdefgh123!").is_compliant());
///
/// let outcome = validate("abcdefghij12");
/// let failed: Vec<_> = outcome.rule_ids().collect();
/// assert_eq!(failed, vec![RuleId::HasUppercase, RuleId::HasSymbol]);
/// ```
pub fn validate(password: &str) -> ValidationOutcome {
    let violations: Vec<Violation> = RULES
        .iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .map(|rule| Violation {
            rule_id: rule.id,
            message: rule.message,
        })
        .collect();

    if violations.is_empty() {
        ValidationOutcome::Compliant
    } else {
        ValidationOutcome::Violations(violations)
    }
}
