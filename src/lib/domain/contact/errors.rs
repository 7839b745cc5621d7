//! Error types for the contact module

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::communication::mailer::MailerError, infrastructure::email::config::MailConfigError,
};

/// A single violated constraint on one contact form field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The form field the violation applies to
    pub field: String,

    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    /// Create a new field violation
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// The contact form payload violated one or more field constraints
#[derive(Debug, Error)]
#[error("invalid contact form data")]
pub struct ValidationError {
    /// Every violated constraint, not just the first
    pub violations: Vec<FieldViolation>,
}

/// Errors that can occur when relaying a contact message by email
#[derive(Debug, Error)]
pub enum SendMessageError {
    /// The server-side mail configuration is missing required values
    #[error(transparent)]
    Config(#[from] MailConfigError),

    /// The mail transport could not be verified
    #[error("the mail transport failed verification")]
    Transport(#[source] MailerError),

    /// The composed email could not be submitted to the relay
    #[error("the email could not be sent")]
    Send(#[source] MailerError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
