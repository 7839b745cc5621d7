//! Mail transport abstraction

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub mod errors;
pub mod message;

pub use errors::MailerError;
pub use message::Email;

/// A mail transport
///
/// Implementations wrap one connection to an external relay. A transport is
/// constructed fresh for each dispatch and discarded afterwards.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Check that the transport can reach and authenticate with the relay
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] when the relay accepted the connection.
    async fn verify(&self) -> Result<(), MailerError>;

    /// Submit an email to the relay
    ///
    /// # Arguments
    /// * `email` - The composed [`Email`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure. No retry is attempted.
    async fn send(&self, email: &Email) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn verify(&self) -> Result<(), MailerError>;
        async fn send(&self, email: &Email) -> Result<(), MailerError>;
    }
}
