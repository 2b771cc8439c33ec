//! Configuration management for the portfolio MCP server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";
const DEFAULT_FROM_EMAIL: &str = "onboarding@resend.dev";
const DEFAULT_OWNER_EMAIL: &str = "hello@example.com";

/// Configuration for the portfolio MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider API base URL
    pub email_api_url: String,

    /// Email provider API key
    pub resend_api_key: String,

    /// Recipient of internal notifications
    pub contact_owner_email: EmailAddress,

    /// Sender address for both contact emails
    pub contact_from_email: EmailAddress,

    /// Address shown to users when email delivery fails (default: owner)
    pub fallback_contact_email: EmailAddress,

    /// Site name used in email subjects and bodies
    pub site_name: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Per-dispatch timeout in seconds enforced by the pipeline (default: 5)
    pub dispatch_timeout_secs: u64,

    /// Path to the case-study seed file
    pub case_studies_path: PathBuf,

    /// Catalog cache TTL in minutes (default: 30)
    pub catalog_cache_ttl_minutes: u64,

    /// Default number of related case studies (default: 3)
    pub max_related_results: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

/// The part of the configuration the contact pipeline and templates need.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub owner_email: EmailAddress,
    pub from_email: EmailAddress,
    pub fallback_email: EmailAddress,
    pub site_name: String,
    pub dispatch_timeout: Duration,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Config::default().contact_settings()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: Email provider API key
    /// - `CONTACT_OWNER_EMAIL`: Where internal notifications are sent
    ///
    /// Optional environment variables:
    /// - `EMAIL_API_BASE_URL`: Provider base URL (default: https://api.resend.com)
    /// - `CONTACT_FROM_EMAIL`: Sender address (default: onboarding@resend.dev)
    /// - `FALLBACK_CONTACT_EMAIL`: Direct contact address (default: owner email)
    /// - `SITE_NAME`: Site name (default: "Portfolio")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DISPATCH_TIMEOUT_SECS`: Per-email timeout in seconds (default: 5)
    /// - `CASE_STUDIES_PATH`: Catalog seed file (default: data/case_studies.json)
    /// - `CATALOG_CACHE_TTL_MINUTES`: Catalog cache TTL (default: 30)
    /// - `MAX_RELATED_RESULTS`: Related case studies returned (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY")
            .map_err(|_| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        if resend_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let owner = env::var("CONTACT_OWNER_EMAIL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_OWNER_EMAIL".to_string()))?;
        let contact_owner_email = Self::parse_email("CONTACT_OWNER_EMAIL", &owner)?;

        let email_api_url =
            env::var("EMAIL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_EMAIL_API_URL.to_string());
        if !email_api_url.starts_with("http://") && !email_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "EMAIL_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let contact_from_email = match env::var("CONTACT_FROM_EMAIL") {
            Ok(value) => Self::parse_email("CONTACT_FROM_EMAIL", &value)?,
            Err(_) => Self::parse_email("CONTACT_FROM_EMAIL", DEFAULT_FROM_EMAIL)?,
        };

        let fallback_contact_email = match env::var("FALLBACK_CONTACT_EMAIL") {
            Ok(value) => Self::parse_email("FALLBACK_CONTACT_EMAIL", &value)?,
            Err(_) => contact_owner_email.clone(),
        };

        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "Portfolio".to_string());
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let dispatch_timeout_secs = Self::parse_env_u64("DISPATCH_TIMEOUT_SECS", 5)?;
        if dispatch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DISPATCH_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let case_studies_path = env::var("CASE_STUDIES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/case_studies.json"));
        let catalog_cache_ttl_minutes = Self::parse_env_u64("CATALOG_CACHE_TTL_MINUTES", 30)?;

        let max_related_results = Self::parse_env_usize("MAX_RELATED_RESULTS", 3)?;
        if max_related_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_RELATED_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            email_api_url,
            resend_api_key,
            contact_owner_email,
            contact_from_email,
            fallback_contact_email,
            site_name,
            request_timeout,
            dispatch_timeout_secs,
            case_studies_path,
            catalog_cache_ttl_minutes,
            max_related_results,
            log_level,
        })
    }

    /// Timeout for a single provider HTTP call.
    ///
    /// Never longer than the pipeline's dispatch timeout, so a request the
    /// pipeline has given up on does not keep running in the background.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout.min(self.dispatch_timeout_secs))
    }

    pub fn catalog_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.catalog_cache_ttl_minutes.saturating_mul(60))
    }

    /// Settings handed to the contact pipeline.
    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            owner_email: self.contact_owner_email.clone(),
            from_email: self.contact_from_email.clone(),
            fallback_email: self.fallback_contact_email.clone(),
            site_name: self.site_name.clone(),
            dispatch_timeout: Duration::from_secs(self.dispatch_timeout_secs),
        }
    }

    fn parse_email(var_name: &str, value: &str) -> ConfigResult<EmailAddress> {
        EmailAddress::new(value).map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a valid email address, got: {}", value),
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let owner = EmailAddress::new(DEFAULT_OWNER_EMAIL).expect("default owner email is valid");
        Config {
            email_api_url: DEFAULT_EMAIL_API_URL.to_string(),
            resend_api_key: String::new(),
            contact_owner_email: owner.clone(),
            contact_from_email: EmailAddress::new(DEFAULT_FROM_EMAIL)
                .expect("default sender email is valid"),
            fallback_contact_email: owner,
            site_name: "Portfolio".to_string(),
            request_timeout: 10,
            dispatch_timeout_secs: 5,
            case_studies_path: PathBuf::from("data/case_studies.json"),
            catalog_cache_ttl_minutes: 30,
            max_related_results: 3,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    fn set_required(guard: &mut EnvGuard) {
        guard.set("RESEND_API_KEY", "re_test_123");
        guard.set("CONTACT_OWNER_EMAIL", "owner@example.com");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dispatch_timeout_secs, 5);
        assert_eq!(config.max_related_results, 3);
        assert_eq!(config.fallback_contact_email, config.contact_owner_email);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("SITE_NAME", "Jane Doe Consulting");
        guard.set("MAX_RELATED_RESULTS", "4");

        let config = Config::from_env().unwrap();
        assert_eq!(config.resend_api_key, "re_test_123");
        assert_eq!(config.contact_owner_email.as_str(), "owner@example.com");
        assert_eq!(config.fallback_contact_email.as_str(), "owner@example.com");
        assert_eq!(config.site_name, "Jane Doe Consulting");
        assert_eq!(config.max_related_results, 4);

        let settings = config.contact_settings();
        assert_eq!(settings.dispatch_timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_api_key() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("RESEND_API_KEY", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RESEND_API_KEY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_owner_email() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("CONTACT_OWNER_EMAIL", "owner-at-example");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CONTACT_OWNER_EMAIL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("EMAIL_API_BASE_URL", "api.resend.com");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "EMAIL_API_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_dispatch_timeout() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("DISPATCH_TIMEOUT_SECS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "DISPATCH_TIMEOUT_SECS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_http_timeout_is_capped_by_dispatch_timeout() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("REQUEST_TIMEOUT", "30");
        guard.set("DISPATCH_TIMEOUT_SECS", "4");

        let config = Config::from_env().unwrap();
        assert_eq!(config.http_timeout(), Duration::from_secs(4));

        guard.set("REQUEST_TIMEOUT", "2");
        let config = Config::from_env().unwrap();
        assert_eq!(config.http_timeout(), Duration::from_secs(2));
    }

    #[test]
    #[serial]
    fn test_catalog_cache_ttl_saturates() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("CATALOG_CACHE_TTL_MINUTES", "15");
        assert_eq!(
            Config::from_env().unwrap().catalog_cache_ttl(),
            Duration::from_secs(900)
        );

        guard.set("CATALOG_CACHE_TTL_MINUTES", &u64::MAX.to_string());
        assert_eq!(
            Config::from_env().unwrap().catalog_cache_ttl(),
            Duration::from_secs(u64::MAX)
        );
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        assert!(Config::parse_env_u64("TEST_U64_INVALID", 10).is_err());
        assert_eq!(Config::parse_env_u64("NONEXISTENT_U64", 10).unwrap(), 10);
    }
}
