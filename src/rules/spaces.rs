//! Whitespace rule.

pub(super) fn has_no_spaces(password: &str) -> bool {
    !password.chars().any(char::is_whitespace)
}
