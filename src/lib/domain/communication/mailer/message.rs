//! Email message

use crate::domain::contact::value_objects::EmailAddress;

/// A composed email, ready for submission to the relay
#[derive(Clone, Debug)]
pub struct Email {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The address replies should go to
    pub reply_to: Option<EmailAddress>,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}
