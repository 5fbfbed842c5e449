//! Sender configuration.
//!
//! Configuration can be given in code or read from the environment:
//!
//! ```bash
//! export SENDGRID_API_KEY=SG.xxxxx          # required
//! export SENDGRID_ENDPOINT=http://localhost:3030/v3/mail/send
//! export SENDGRID_TIMEOUT_SECS=10
//! export SENDGRID_PRETTY_BODY=true          # indent request bodies
//! ```

use {
    crate::ConfigError,
    std::time::Duration,
    tracing::debug,
    url::Url,
};

/// Public v3 mail endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_KEY: &str = "SENDGRID_API_KEY";
pub const ENV_ENDPOINT: &str = "SENDGRID_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "SENDGRID_TIMEOUT_SECS";
pub const ENV_PRETTY_BODY: &str = "SENDGRID_PRETTY_BODY";

#[derive(Clone)]
pub struct SenderConfig {
    pub api_key: String,
    pub endpoint: Url,
    pub timeout: Duration,
    /// send minified request bodies instead of indented ones
    pub minified: bool,
}

impl std::fmt::Debug for SenderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .field("minified", &self.minified)
            .finish()
    }
}

impl SenderConfig {
    /// Configuration for the public endpoint with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            timeout: DEFAULT_TIMEOUT,
            minified: true,
        }
    }

    /// Reads the configuration from `SENDGRID_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SenderConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_API_KEY))?;
        let mut config = Self::new(api_key);

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.endpoint = Url::parse(&endpoint)?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let parsed = secs.parse::<u64>().map_err(|_| ConfigError::InvalidVar {
                name: ENV_TIMEOUT_SECS,
                value: secs.clone(),
            })?;
            config.timeout = Duration::from_secs(parsed);
        }

        if let Some(pretty) = lookup(ENV_PRETTY_BODY) {
            config.minified = !parse_flag(ENV_PRETTY_BODY, &pretty)?;
        }

        debug!(
            "sender configured from environment: endpoint={}, timeout={:?}, minified={}",
            config.endpoint, config.timeout, config.minified
        );
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_minified(mut self, minified: bool) -> Self {
        self.minified = minified;
        self
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url")
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SenderConfig::from_lookup(lookup(&[(ENV_API_KEY, "SG.key")])).unwrap();
        assert_eq!(config.api_key, "SG.key");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.minified);
    }

    #[test]
    fn test_missing_key() {
        let err = SenderConfig::from_lookup(lookup(&[(ENV_API_KEY, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_API_KEY)));
    }

    #[test]
    fn test_overrides() {
        let config = SenderConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "SG.key"),
            (ENV_ENDPOINT, "http://localhost:3030/v3/mail/send"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_PRETTY_BODY, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint.host_str(), Some("localhost"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.minified);
    }

    #[test]
    fn test_invalid_values() {
        let err = SenderConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "SG.key"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment variable SENDGRID_TIMEOUT_SECS has an invalid value 'soon'"
        );

        let err = SenderConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "SG.key"),
            (ENV_ENDPOINT, "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = SenderConfig::new("SG.secret");
        assert!(!format!("{:?}", config).contains("SG.secret"));
    }
}
