//! SMTP mail transport implementation

use std::fmt;

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    domain::communication::mailer::{Email, Mailer, MailerError},
    infrastructure::email::config::MailConfig,
};

/// SMTP mailer
///
/// Wraps a single lettre transport built from a freshly resolved
/// [`MailConfig`]. One instance serves one dispatch; nothing is pooled.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Build a transport from the resolved configuration
    ///
    /// Implicit TLS is used when the configuration asks for it, STARTTLS
    /// otherwise. No connection is opened yet.
    pub fn new(config: &MailConfig) -> Result<Self, MailerError> {
        let sender: Mailbox = config
            .sender
            .parse()
            .map_err(|_| MailerError::InvalidAddress(config.sender.clone()))?;

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|err| MailerError::Transport(err.to_string()))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }

    /// Assemble the lettre message for `email`
    fn build_message(&self, email: &Email) -> Result<Message, MailerError> {
        let to: Mailbox = email
            .to
            .as_str()
            .parse()
            .map_err(|_| MailerError::InvalidAddress(email.to.to_string()))?;

        let mut builder = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(email.subject.clone());

        if let Some(reply_to) = &email.reply_to {
            let mailbox: Mailbox = reply_to
                .as_str()
                .parse()
                .map_err(|_| MailerError::InvalidAddress(reply_to.to_string()))?;
            builder = builder.reply_to(mailbox);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                email.plain_body.clone(),
                email.html_body.clone(),
            ))
            .map_err(|err| MailerError::Build(err.to_string()))
    }
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), MailerError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailerError::Transport(
                "the mail relay did not accept the connection test".to_string(),
            )),
            Err(err) => Err(MailerError::Transport(err.to_string())),
        }
    }

    async fn send(&self, email: &Email) -> Result<(), MailerError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|err| MailerError::Send(err.to_string()))
    }
}
