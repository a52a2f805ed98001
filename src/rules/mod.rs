//! Password policy rules
//!
//! Each rule pairs a predicate over the raw password with the label shown in
//! the checklist and the message reported when the predicate fails.

mod length;
mod spaces;
mod variety;

pub use length::{MAX_LENGTH, MIN_LENGTH};
pub(crate) use variety::{has_digit, has_lowercase, has_uppercase, is_symbol};

use std::fmt;
use std::str::FromStr;

/// Machine-readable identifier of a policy rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    MinLength,
    MaxLength,
    HasUppercase,
    HasLowercase,
    HasSymbol,
    HasDigit,
    NoSpaces,
}

impl RuleId {
    /// Returns the kebab-case identifier, e.g. `min-length`.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleId::MinLength => "min-length",
            RuleId::MaxLength => "max-length",
            RuleId::HasUppercase => "has-uppercase",
            RuleId::HasLowercase => "has-lowercase",
            RuleId::HasSymbol => "has-symbol",
            RuleId::HasDigit => "has-digit",
            RuleId::NoSpaces => "no-spaces",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown password rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RULES
            .iter()
            .map(|rule| rule.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// A named predicate over a password plus its human-readable texts.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    /// Checklist label, phrased as the requirement.
    pub label: &'static str,
    /// Failure message, phrased as an instruction.
    pub message: &'static str,
    predicate: fn(&str) -> bool,
}

impl Rule {
    /// Returns `true` when `password` satisfies this rule.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

/// The complete policy, in evaluation and display order.
pub static RULES: [Rule; 7] = [
    Rule {
        id: RuleId::MinLength,
        label: "At least 12 characters",
        message: "Password must be at least 12 characters long",
        predicate: length::meets_min_length,
    },
    Rule {
        id: RuleId::MaxLength,
        label: "At most 20 characters",
        message: "Password must be at most 20 characters long",
        predicate: length::meets_max_length,
    },
    Rule {
        id: RuleId::HasUppercase,
        label: "One uppercase letter",
        message: "Password must contain an uppercase letter",
        predicate: variety::has_uppercase,
    },
    Rule {
        id: RuleId::HasLowercase,
        label: "One lowercase letter",
        message: "Password must contain a lowercase letter",
        predicate: variety::has_lowercase,
    },
    Rule {
        id: RuleId::HasSymbol,
        label: "One symbol",
        message: "Password must contain a symbol",
        predicate: variety::has_symbol,
    },
    Rule {
        id: RuleId::HasDigit,
        label: "One number",
        message: "Password must contain a number",
        predicate: variety::has_digit,
    },
    Rule {
        id: RuleId::NoSpaces,
        label: "No spaces",
        message: "Password must not contain spaces",
        predicate: spaces::has_no_spaces,
    },
];

/// Looks up the rule definition for `id`.
pub fn rule(id: RuleId) -> &'static Rule {
    // RULES holds exactly one entry per RuleId variant, in declaration order.
    &RULES[id as usize]
}
