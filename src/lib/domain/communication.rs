//! Outbound communication: the mail transport abstraction

pub mod mailer;
