//! Length rules - bounds on the number of characters.

/// Shortest accepted password, in characters.
pub const MIN_LENGTH: usize = 12;

/// Longest accepted password, in characters.
pub const MAX_LENGTH: usize = 20;

/// Length is counted in Unicode scalar values, not bytes.
pub(super) fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

pub(super) fn meets_max_length(password: &str) -> bool {
    password.chars().count() <= MAX_LENGTH
}
