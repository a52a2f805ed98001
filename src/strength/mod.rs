//! Password strength meter
//!
//! An informational 0-100 score shown next to the checklist. It never gates
//! submission; only the policy rules do.

mod patterns;

use std::collections::HashSet;

use crate::blacklist::is_blacklisted;
use crate::rules::{has_digit, has_lowercase, has_uppercase, is_symbol};

const COMMON_HINT: &str = "Password is one of the most common passwords";
const REPEAT_HINT: &str = "Password contains repetitive patterns";
const SEQUENCE_HINT: &str = "Password contains sequential patterns";

const HINT_PENALTY: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    /// Nothing typed yet.
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    fn from_score(score: u8) -> Self {
        match score {
            0..=49 => StrengthLevel::Weak,
            50..=69 => StrengthLevel::Medium,
            70..=89 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Always within `0..=100`.
    pub score: u8,
    pub level: StrengthLevel,
    /// Weaknesses found, each costing points.
    pub hints: Vec<String>,
}

impl StrengthReport {
    fn empty() -> Self {
        Self {
            score: 0,
            level: StrengthLevel::Empty,
            hints: Vec::new(),
        }
    }
}

/// Estimates the strength of `password`.
///
/// Points are awarded for length, character classes, symbol count and
/// distinct characters, then each hint subtracts a fixed penalty.
///
/// # Example
///
/// ```rust
/// use pwd_policy::{estimate_strength, StrengthLevel};
///
/// let report = estimate_strength("aaaa");
/// assert_eq!(report.level, StrengthLevel::Weak);
/// assert!(!report.hints.is_empty());
/// ```
pub fn estimate_strength(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::empty();
    }

    let chars: Vec<char> = password.chars().collect();
    let len = chars.len() as i64;

    let mut hints = Vec::new();
    if is_blacklisted(password) {
        hints.push(COMMON_HINT.to_string());
    }
    if patterns::has_repeated_run(&chars) {
        hints.push(REPEAT_HINT.to_string());
    }
    if patterns::has_sequential_run(&chars) {
        hints.push(SEQUENCE_HINT.to_string());
    }

    // Half a point per character, up to 20
    let mut score = (len / 2).min(20);

    let symbols = chars.iter().filter(|&&c| is_symbol(c)).count();
    let classes = [
        has_uppercase(password),
        has_lowercase(password),
        has_digit(password),
        symbols > 0,
    ];
    score += 15 * classes.iter().filter(|&&present| present).count() as i64;

    score += match len {
        17.. => 10,
        13..=16 => 5,
        _ => 0,
    };

    if symbols >= 2 {
        score += 5;
    }

    let unique = chars.iter().collect::<HashSet<_>>().len();
    score += match unique {
        16.. => 10,
        12..=15 => 5,
        _ => 0,
    };

    score -= HINT_PENALTY * hints.len() as i64;

    let score = score.clamp(0, 100) as u8;
    StrengthReport {
        score,
        level: StrengthLevel::from_score(score),
        hints,
    }
}
