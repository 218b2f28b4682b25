//! Field validation rules shared by every form controller.
//!
//! Rules run entirely client-side: a form with any failing rule never
//! produces a network call.

use std::collections::BTreeMap;

/// Field name to inline error message. `BTreeMap` keeps rendering order
/// stable.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Required rule: trimmed non-empty. On failure records `message` for
/// `field`.
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

/// Shape check equivalent to the pattern `^\S+@\S+$`: no whitespace anywhere
/// and at least one `@` with a character on both sides.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .char_indices()
        .any(|(idx, ch)| ch == '@' && idx > 0 && idx + ch.len_utf8() < value.len())
}

pub fn require_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "Email is required".to_string());
    } else if !is_email_shaped(value) {
        errors.insert(field, "Invalid email address".to_string());
    }
}

/// Parse an integer field and check it against an inclusive range. Both
/// boundaries are accepted.
pub fn parse_in_range(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    min: u8,
    max: u8,
    required_message: &str,
) -> Option<u8> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.insert(field, required_message.to_string());
        return None;
    }
    match raw.parse::<i64>() {
        Ok(value) if value < i64::from(min) => {
            errors.insert(field, format!("Must be at least {min}"));
            None
        }
        Ok(value) if value > i64::from(max) => {
            errors.insert(field, format!("Must be {max} or younger"));
            None
        }
        Ok(value) => Some(value as u8),
        Err(_) => {
            errors.insert(field, "Must be a number".to_string());
            None
        }
    }
}

/// Required choice (select) rule.
pub fn require_choice<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<T>,
    message: &str,
) -> Option<T> {
    if value.is_none() {
        errors.insert(field, message.to_string());
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_accepts_minimal_addresses() {
        assert!(is_email_shaped("a@b"));
        assert!(is_email_shaped("user@example.org"));
        assert!(is_email_shaped("a@@b"));
    }

    #[test]
    fn email_shape_rejects_missing_sides_and_whitespace() {
        assert!(!is_email_shaped(""));
        assert!(!is_email_shaped("plain"));
        assert!(!is_email_shaped("@b"));
        assert!(!is_email_shaped("a@"));
        assert!(!is_email_shaped("a b@c"));
        assert!(!is_email_shaped("a@b c"));
    }

    #[test]
    fn range_accepts_both_boundaries() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            parse_in_range(&mut errors, "age", "16", 16, 35, "Age is required"),
            Some(16)
        );
        assert_eq!(
            parse_in_range(&mut errors, "age", "35", 16, 35, "Age is required"),
            Some(35)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn range_rejects_outside_values() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            parse_in_range(&mut errors, "age", "15", 16, 35, "Age is required"),
            None
        );
        assert_eq!(errors.get("age").map(String::as_str), Some("Must be at least 16"));

        errors.clear();
        assert_eq!(
            parse_in_range(&mut errors, "age", "36", 16, 35, "Age is required"),
            None
        );
        assert_eq!(
            errors.get("age").map(String::as_str),
            Some("Must be 35 or younger")
        );
    }

    #[test]
    fn range_requires_a_number() {
        let mut errors = FieldErrors::new();
        assert!(parse_in_range(&mut errors, "age", "abc", 16, 35, "Age is required").is_none());
        assert!(errors.contains_key("age"));
    }

    #[test]
    fn require_flags_blank_and_whitespace_values() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", "  ", "Name is required");
        assert!(errors.contains_key("name"));
    }
}
