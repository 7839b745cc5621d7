//! Sender name

use std::fmt;

use thiserror::Error;

/// Maximum length of a sender name in characters
const MAX_LENGTH: usize = 100;

/// An error that can occur when creating a sender name
#[derive(Debug, Error)]
pub enum SenderNameError {
    /// The name is empty
    #[error("Name is required")]
    Empty,

    /// The name is too long
    #[error("Name too long")]
    TooLong,
}

/// The name the visitor signed the contact form with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenderName(String);

impl SenderName {
    /// Create a new sender name
    pub fn new(raw: &str) -> Result<Self, SenderNameError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SenderNameError::Empty);
        }

        if trimmed.chars().count() > MAX_LENGTH {
            return Err(SenderNameError::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SenderName> for String {
    fn from(name: SenderName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_sender_name_is_trimmed() -> TestResult {
        let name = SenderName::new("  Jo ")?;

        assert_eq!(name.as_str(), "Jo");

        Ok(())
    }

    #[test]
    fn test_empty_sender_name() {
        let result = SenderName::new("");
        assert!(matches!(result, Err(SenderNameError::Empty)));
    }

    #[test]
    fn test_whitespace_only_sender_name_is_empty() {
        let result = SenderName::new("   \t");
        assert!(matches!(result, Err(SenderNameError::Empty)));
    }

    #[test]
    fn test_sender_name_at_maximum_length() -> TestResult {
        let name = SenderName::new(&"a".repeat(100))?;

        assert_eq!(name.as_str().len(), 100);

        Ok(())
    }

    #[test]
    fn test_sender_name_too_long() {
        let result = SenderName::new(&"a".repeat(101));
        assert!(matches!(result, Err(SenderNameError::TooLong)));
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count_towards_length() -> TestResult {
        let padded = format!("  {}  ", "a".repeat(100));
        let name = SenderName::new(&padded)?;

        assert_eq!(name.as_str().len(), 100);

        Ok(())
    }
}
