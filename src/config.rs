//! Site configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{var} is required when RESEND_API_KEY is set")]
    MissingVar { var: &'static str },
}

/// Where contact requests are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// `None` when `RESEND_API_KEY` is absent; contact delivery is then disabled.
    pub mail: Option<MailConfig>,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RESEND_API_KEY`: enables contact delivery
    ///
    /// Required when `RESEND_API_KEY` is set:
    /// - `CONTACT_EMAIL_FROM`: sender address (must be verified with Resend)
    /// - `CONTACT_EMAIL_TO`: inbox receiving contact requests
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or a mail
    /// variable is missing while the API key is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mail = match var("RESEND_API_KEY") {
            Some(api_key) => Some(MailConfig {
                api_key,
                from: var("CONTACT_EMAIL_FROM").ok_or(ConfigError::MissingVar { var: "CONTACT_EMAIL_FROM" })?,
                to: var("CONTACT_EMAIL_TO").ok_or(ConfigError::MissingVar { var: "CONTACT_EMAIL_TO" })?,
            }),
            None => None,
        };

        Ok(Self { port, mail })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
