//! Message body

use std::fmt;

use thiserror::Error;

/// Minimum length of a message in characters
const MIN_LENGTH: usize = 5;

/// Maximum length of a message in characters
const MAX_LENGTH: usize = 1000;

/// An error that can occur when creating a message body
#[derive(Debug, Error)]
pub enum MessageBodyError {
    /// The message is too short
    #[error("Message must be at least 5 characters")]
    TooShort,

    /// The message is too long
    #[error("Message too long")]
    TooLong,
}

/// The free-text body of a contact form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    /// Create a new message body
    pub fn new(raw: &str) -> Result<Self, MessageBodyError> {
        let trimmed = raw.trim();

        if trimmed.chars().count() < MIN_LENGTH {
            return Err(MessageBodyError::TooShort);
        }

        if trimmed.chars().count() > MAX_LENGTH {
            return Err(MessageBodyError::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the message as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The message split into lines, for rendering with explicit breaks
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MessageBody> for String {
    fn from(message: MessageBody) -> Self {
        message.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_message_body_is_trimmed() -> TestResult {
        let message = MessageBody::new("  Hello there  ")?;

        assert_eq!(message.as_str(), "Hello there");

        Ok(())
    }

    #[test]
    fn test_message_body_too_short() {
        let result = MessageBody::new("hi");
        assert!(matches!(result, Err(MessageBodyError::TooShort)));
    }

    #[test]
    fn test_message_body_of_whitespace_is_too_short() {
        let result = MessageBody::new("          ");
        assert!(matches!(result, Err(MessageBodyError::TooShort)));
    }

    #[test]
    fn test_message_body_at_minimum_length() -> TestResult {
        let message = MessageBody::new("12345")?;

        assert_eq!(message.as_str(), "12345");

        Ok(())
    }

    #[test]
    fn test_message_body_too_long() {
        let result = MessageBody::new(&"a".repeat(1001));
        assert!(matches!(result, Err(MessageBodyError::TooLong)));
    }

    #[test]
    fn test_message_body_lines() -> TestResult {
        let message = MessageBody::new("first line\nsecond line")?;

        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines, vec!["first line", "second line"]);

        Ok(())
    }
}
