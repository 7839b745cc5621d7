//! Contact service backed by the SMTP relay

use async_trait::async_trait;

use crate::{
    domain::contact::{
        errors::SendMessageError,
        message::ContactMessage,
        service::{dispatch, ContactService},
    },
    infrastructure::email::{config::MailConfig, smtp::SmtpMailer},
};

/// Contact service that relays messages through the configured SMTP relay
///
/// Configuration is re-resolved and the transport rebuilt for every
/// message, so operators can correct relay settings without restarting
/// the server.
#[derive(Clone, Debug, Default)]
pub struct SmtpContactService;

impl SmtpContactService {
    /// Create a new SMTP contact service
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactService for SmtpContactService {
    async fn send_message(&self, message: &ContactMessage) -> Result<(), SendMessageError> {
        let config = MailConfig::from_env()?;

        let mailer = SmtpMailer::new(&config).map_err(SendMessageError::Transport)?;

        dispatch(&mailer, &config.recipient, message).await
    }
}
