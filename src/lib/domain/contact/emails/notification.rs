//! Contact notification template

use anyhow::Result;
use askama::Template;

use crate::domain::contact::message::ContactMessage;

/// The email sent to the portfolio owner for each contact form submission
#[derive(Debug, Template)]
#[template(path = "emails/contact/notification.html")]
pub struct ContactNotificationTemplate {
    /// The sender's name
    pub name: String,

    /// The sender's email address
    pub email: String,

    /// The message, split into lines so the template can insert breaks
    pub lines: Vec<String>,
}

impl ContactNotificationTemplate {
    /// Creates a new `ContactNotificationTemplate`
    pub fn new(message: &ContactMessage) -> Self {
        Self {
            name: message.name.to_string(),
            email: message.email.to_string(),
            lines: message.message.lines().map(String::from).collect(),
        }
    }

    /// The subject line for the notification
    pub fn subject(&self) -> String {
        format!("Portfolio Contact: Message from {}", self.name)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> Result<String> {
        Ok(format!(
            "New contact form submission\n\nName: {name}\nEmail: {email}\nMessage:\n{message}\n",
            name = self.name,
            email = self.email,
            message = self.lines.join("\n"),
        ))
    }
}
