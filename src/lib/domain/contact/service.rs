//! Contact dispatch service

use askama::Template;
use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::mailer::{Email, Mailer},
    contact::{
        emails::notification::ContactNotificationTemplate, errors::SendMessageError,
        message::ContactMessage, value_objects::EmailAddress,
    },
};

/// Contact service
///
/// The single entry point for relaying a validated contact message.
#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Relay a contact message to the portfolio owner by email
    ///
    /// # Arguments
    /// * `message` - The validated [`ContactMessage`] to relay.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the relay accepted the email.
    async fn send_message(&self, message: &ContactMessage) -> Result<(), SendMessageError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    #[async_trait]
    impl ContactService for ContactService {
        async fn send_message(&self, message: &ContactMessage) -> Result<(), SendMessageError>;
    }
}

/// The shared dispatch pipeline: verify the transport, compose the
/// notification, submit it.
///
/// Verification happens before anything is composed, so a misconfigured
/// relay never results in a send attempt.
pub async fn dispatch<M: Mailer>(
    mailer: &M,
    recipient: &EmailAddress,
    message: &ContactMessage,
) -> Result<(), SendMessageError> {
    mailer.verify().await.map_err(SendMessageError::Transport)?;

    let template = ContactNotificationTemplate::new(message);
    let html = template
        .render()
        .map_err(|err| SendMessageError::UnknownError(err.into()))?;
    let html =
        css_inline::inline(&html).map_err(|err| SendMessageError::UnknownError(err.into()))?;
    let plain = template.render_plain()?;

    let email = Email {
        to: recipient.clone(),
        reply_to: Some(message.email.clone()),
        subject: template.subject(),
        html_body: html,
        plain_body: plain,
    };

    mailer.send(&email).await.map_err(SendMessageError::Send)
}
