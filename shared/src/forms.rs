//! Field-level validation for the signup form.
//!
//! The browser enforces `type="email" required` before a submit event can
//! fire. [`validate_email`] expresses the same gate in Rust so it can be
//! checked outside a browser. Submission handlers never call it themselves.

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email shape: non-empty, one `@`, non-empty local part, no whitespace.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Please fill out this field.");
    }

    if email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Email cannot contain spaces");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Please include an '@' in the email address.");
    };

    if local.is_empty() {
        return ValidationResult::err("Please enter a part followed by '@'.");
    }

    if domain.is_empty() {
        return ValidationResult::err("Please enter a part following '@'.");
    }

    if domain.contains('@') || domain.starts_with('.') || domain.ends_with('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(validate_email("user@localhost").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c").is_valid);
        assert!(!validate_email("a b@c.d").is_valid);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(validate_email("").error.as_deref(), Some("Please fill out this field."));
        assert!(validate_email("ok@fine.io").error.is_none());
    }
}
