//! Contact message model and validation boundary

use crate::domain::contact::{
    errors::{FieldViolation, ValidationError},
    value_objects::{EmailAddress, MessageBody, SenderName},
};

/// A validated contact message
///
/// An instance only exists past the validation boundary, so every field
/// satisfies its constraints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    /// The sender's name, trimmed, 1-100 characters
    pub name: SenderName,

    /// The sender's email address
    pub email: EmailAddress,

    /// The message text, trimmed, 5-1000 characters
    pub message: MessageBody,
}

impl ContactMessage {
    /// Validate a raw payload into a `ContactMessage`
    ///
    /// Whitespace is trimmed from each field before the constraints are
    /// checked. Every violated constraint is reported, not just the first.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name = SenderName::new(name)
            .map_err(|err| violations.push(FieldViolation::new("name", &err.to_string())))
            .ok();

        let email = EmailAddress::new(email)
            .map_err(|_| violations.push(FieldViolation::new("email", "Invalid email address")))
            .ok();

        let message = MessageBody::new(message)
            .map_err(|err| violations.push(FieldViolation::new("message", &err.to_string())))
            .ok();

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(ValidationError { violations }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_valid_payload_produces_trimmed_message() -> TestResult {
        let message = ContactMessage::new("  Jo  ", " jo@example.com ", " Hello there ")?;

        assert_eq!(message.name.as_str(), "Jo");
        assert_eq!(message.email.as_str(), "jo@example.com");
        assert_eq!(message.message.as_str(), "Hello there");

        Ok(())
    }

    #[test]
    fn test_all_violations_are_enumerated() {
        let error = ContactMessage::new("", "bad", "hi").unwrap_err();

        assert_eq!(
            error.violations,
            vec![
                FieldViolation::new("name", "Name is required"),
                FieldViolation::new("email", "Invalid email address"),
                FieldViolation::new("message", "Message must be at least 5 characters"),
            ]
        );
    }

    #[test]
    fn test_single_violation_reports_only_that_field() {
        let error = ContactMessage::new("Jo", "jo@example.com", "hi").unwrap_err();

        assert_eq!(error.violations.len(), 1);
        assert_eq!(error.violations[0].field, "message");
    }

    #[test]
    fn test_name_too_long_is_a_violation() {
        let error = ContactMessage::new(&"a".repeat(101), "jo@example.com", "Hello there")
            .unwrap_err();

        assert_eq!(
            error.violations,
            vec![FieldViolation::new("name", "Name too long")]
        );
    }

    #[test]
    fn test_message_too_long_is_a_violation() {
        let error =
            ContactMessage::new("Jo", "jo@example.com", &"a".repeat(1001)).unwrap_err();

        assert_eq!(
            error.violations,
            vec![FieldViolation::new("message", "Message too long")]
        );
    }

    #[test]
    fn test_empty_email_is_reported_as_invalid() {
        let error = ContactMessage::new("Jo", "", "Hello there").unwrap_err();

        assert_eq!(
            error.violations,
            vec![FieldViolation::new("email", "Invalid email address")]
        );
    }
}
