//! Mail relay configuration
//!
//! Resolved from the environment on every request, never cached at
//! startup, so relay credentials can be rotated without a restart.

use std::env;

use thiserror::Error;

use crate::domain::contact::value_objects::EmailAddress;

/// Default SMTP submission port
const DEFAULT_PORT: u16 = 587;

/// Port on which relays expect implicit TLS
const SMTPS_PORT: u16 = 465;

/// Mail configuration errors
#[derive(Debug, Error)]
pub enum MailConfigError {
    /// One or more required keys are unset or blank
    #[error("Server email configuration is incomplete. Missing: {}", keys.join(", "))]
    Incomplete {
        /// Every missing key, in declaration order
        keys: Vec<&'static str>,
    },

    /// A key is set but its value cannot be used
    #[error("Server email configuration is invalid. Check: {key}")]
    Invalid {
        /// The offending key
        key: &'static str,
    },
}

/// Connection and addressing parameters for the mail relay
#[derive(Clone, Debug)]
pub struct MailConfig {
    /// The relay hostname
    pub host: String,

    /// The relay port
    pub port: u16,

    /// Use implicit TLS instead of STARTTLS
    pub secure: bool,

    /// The relay username
    pub username: String,

    /// The relay password
    pub password: String,

    /// The from-address for composed emails
    pub sender: String,

    /// The address contact messages are delivered to
    pub recipient: EmailAddress,
}

impl MailConfig {
    /// Resolve the configuration from the process environment
    pub fn from_env() -> Result<Self, MailConfigError> {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`
    ///
    /// Blank values count as missing. All four required keys are checked
    /// before the first error is returned, so the caller learns about every
    /// missing key at once.
    pub fn resolve<F>(lookup: F) -> Result<Self, MailConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = get("SMTP_HOST");
        let username = get("SMTP_USER");
        let password = get("SMTP_PASSWORD");
        let recipient = get("CONTACT_EMAIL");

        let missing: Vec<&'static str> = [
            ("SMTP_HOST", host.is_none()),
            ("SMTP_USER", username.is_none()),
            ("SMTP_PASSWORD", password.is_none()),
            ("CONTACT_EMAIL", recipient.is_none()),
        ]
        .into_iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(key, _)| key)
        .collect();

        let (Some(host), Some(username), Some(password), Some(recipient)) =
            (host, username, password, recipient)
        else {
            return Err(MailConfigError::Incomplete { keys: missing });
        };

        let port = match get("SMTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| MailConfigError::Invalid { key: "SMTP_PORT" })?,
            None => DEFAULT_PORT,
        };

        let secure = get("SMTP_SECURE").as_deref() == Some("true") || port == SMTPS_PORT;

        let sender = get("MAIL_FROM").unwrap_or_else(|| username.clone());

        let recipient = EmailAddress::new(&recipient)
            .map_err(|_| MailConfigError::Invalid { key: "CONTACT_EMAIL" })?;

        Ok(Self {
            host,
            port,
            secure,
            username,
            password,
            sender,
            recipient,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use testresult::TestResult;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USER", "relay@example.com"),
            ("SMTP_PASSWORD", "hunter2"),
            ("CONTACT_EMAIL", "owner@example.com"),
        ]
    }

    #[test]
    fn test_resolve_with_all_keys_unset_names_every_missing_key() {
        let error = MailConfig::resolve(lookup(&[])).unwrap_err();

        assert!(matches!(
            &error,
            MailConfigError::Incomplete { keys }
                if *keys == vec!["SMTP_HOST", "SMTP_USER", "SMTP_PASSWORD", "CONTACT_EMAIL"]
        ));
        assert_eq!(
            error.to_string(),
            "Server email configuration is incomplete. \
             Missing: SMTP_HOST, SMTP_USER, SMTP_PASSWORD, CONTACT_EMAIL"
        );
    }

    #[test]
    fn test_resolve_counts_blank_values_as_missing() {
        let mut vars = complete();
        vars[1] = ("SMTP_USER", "   ");

        let error = MailConfig::resolve(lookup(&vars)).unwrap_err();

        assert!(matches!(
            &error,
            MailConfigError::Incomplete { keys } if *keys == vec!["SMTP_USER"]
        ));
    }

    #[test]
    fn test_resolve_defaults() -> TestResult {
        let config = MailConfig::resolve(lookup(&complete()))?;

        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert!(!config.secure);
        assert_eq!(config.sender, "relay@example.com");
        assert_eq!(config.recipient.as_str(), "owner@example.com");

        Ok(())
    }

    #[test]
    fn test_resolve_explicit_secure_flag() -> TestResult {
        let mut vars = complete();
        vars.push(("SMTP_SECURE", "true"));

        let config = MailConfig::resolve(lookup(&vars))?;

        assert!(config.secure);

        Ok(())
    }

    #[test]
    fn test_resolve_port_465_implies_secure() -> TestResult {
        let mut vars = complete();
        vars.push(("SMTP_PORT", "465"));

        let config = MailConfig::resolve(lookup(&vars))?;

        assert_eq!(config.port, 465);
        assert!(config.secure);

        Ok(())
    }

    #[test]
    fn test_resolve_explicit_port_stays_plain() -> TestResult {
        let mut vars = complete();
        vars.push(("SMTP_PORT", "2525"));

        let config = MailConfig::resolve(lookup(&vars))?;

        assert_eq!(config.port, 2525);
        assert!(!config.secure);

        Ok(())
    }

    #[test]
    fn test_resolve_rejects_unparseable_port() {
        let mut vars = complete();
        vars.push(("SMTP_PORT", "smtp"));

        let error = MailConfig::resolve(lookup(&vars)).unwrap_err();

        assert!(matches!(
            error,
            MailConfigError::Invalid { key: "SMTP_PORT" }
        ));
    }

    #[test]
    fn test_resolve_sender_falls_back_to_username() -> TestResult {
        let mut vars = complete();
        vars.push(("MAIL_FROM", "Portfolio <noreply@example.com>"));

        let config = MailConfig::resolve(lookup(&vars))?;
        assert_eq!(config.sender, "Portfolio <noreply@example.com>");

        let config = MailConfig::resolve(lookup(&complete()))?;
        assert_eq!(config.sender, "relay@example.com");

        Ok(())
    }

    #[test]
    fn test_resolve_rejects_unparseable_recipient() {
        let mut vars = complete();
        vars[3] = ("CONTACT_EMAIL", "not an address");

        let error = MailConfig::resolve(lookup(&vars)).unwrap_err();

        assert!(matches!(
            error,
            MailConfigError::Invalid {
                key: "CONTACT_EMAIL"
            }
        ));
    }
}
