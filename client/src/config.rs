//! Email relay configuration.
//!
//! The browser bundle has no process environment, so values are baked in at
//! build time from `PORTFOLIO_EMAILJS_*` variables. Parsing goes through a
//! lookup function so it can be tested with arbitrary inputs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send-form";

pub const ENDPOINT_VAR: &str = "PORTFOLIO_EMAILJS_ENDPOINT";
pub const SERVICE_ID_VAR: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing relay setting {var}")]
    MissingVar { var: &'static str },
    #[error("invalid relay endpoint '{0}' (expected an http(s) URL)")]
    InvalidEndpoint(String),
}

/// Where and as whom the contact form is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Build from the values captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if a required id is missing or the endpoint is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                ENDPOINT_VAR => option_env!("PORTFOLIO_EMAILJS_ENDPOINT"),
                SERVICE_ID_VAR => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_VAR => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
                PUBLIC_KEY_VAR => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Required: `PORTFOLIO_EMAILJS_SERVICE_ID`, `PORTFOLIO_EMAILJS_TEMPLATE_ID`,
    /// `PORTFOLIO_EMAILJS_PUBLIC_KEY`. Optional: `PORTFOLIO_EMAILJS_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required id is missing or blank, or if the
    /// endpoint is not an http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match non_blank(lookup(ENDPOINT_VAR)) {
            Some(raw) => parse_endpoint(&raw)?,
            None => DEFAULT_EMAILJS_ENDPOINT.to_owned(),
        };
        let require = |var: &'static str| non_blank(lookup(var)).ok_or(ConfigError::MissingVar { var });

        Ok(Self {
            endpoint,
            service_id: require(SERVICE_ID_VAR)?,
            template_id: require(TEMPLATE_ID_VAR)?,
            public_key: require(PUBLIC_KEY_VAR)?,
        })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    if raw.starts_with("https://") || raw.starts_with("http://") {
        Ok(raw.to_owned())
    } else {
        Err(ConfigError::InvalidEndpoint(raw.to_owned()))
    }
}
