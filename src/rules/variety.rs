//! Character variety rules - uppercase, lowercase, symbols, digits.

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(char::is_lowercase)
}

/// Anything that is not a letter, an ASCII digit or whitespace.
pub(crate) fn is_symbol(c: char) -> bool {
    !c.is_alphabetic() && !c.is_ascii_digit() && !c.is_whitespace()
}

pub(crate) fn has_symbol(password: &str) -> bool {
    password.chars().any(is_symbol)
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
