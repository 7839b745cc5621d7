//! Error types for the mail transport

use thiserror::Error;

/// Mail transport errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The relay could not be reached or refused the connection
    #[error("failed to connect to the mail relay: {0}")]
    Transport(String),

    /// The relay rejected the submission
    #[error("failed to submit the email to the relay: {0}")]
    Send(String),

    /// An address could not be parsed into a mailbox
    #[error("invalid mailbox address: {0}")]
    InvalidAddress(String),

    /// The message itself could not be assembled
    #[error("failed to build the email: {0}")]
    Build(String),
}
