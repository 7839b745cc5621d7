//! Contact form domain: the validated message, its value objects, and the
//! dispatch pipeline that relays it by email.

pub mod emails;
pub mod errors;
pub mod message;
pub mod service;
pub mod value_objects;

pub use errors::{FieldViolation, SendMessageError, ValidationError};
pub use message::ContactMessage;
pub use service::ContactService;
