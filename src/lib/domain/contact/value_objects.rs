//! Validated field types for the contact form

pub mod email_address;
pub mod message_body;
pub mod sender_name;

pub use email_address::{EmailAddress, EmailAddressError};
pub use message_body::{MessageBody, MessageBodyError};
pub use sender_name::{SenderName, SenderNameError};
