//! Email templates for contact notifications

pub mod notification;
