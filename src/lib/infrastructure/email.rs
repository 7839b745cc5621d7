//! SMTP mail relay integration

pub mod config;
pub mod service;
pub mod smtp;
