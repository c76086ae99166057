//! Service configuration loaded from the environment

use anyhow::{Context, Result};
use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;

/// Runtime environment, controls cookie hardening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

/// Attributes applied to the `token` cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookiePolicy {
    /// Cross-site cookies in production, strict same-site otherwise
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => CookiePolicy {
                secure: true,
                same_site: SameSite::None,
            },
            Environment::Development => CookiePolicy {
                secure: false,
                same_site: SameSite::Strict,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    port: u16,
    app_env: String,
    access_token_secret: Option<String>,
    cors_origins: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
    pub environment: Environment,
    /// Secret used to sign identity tokens
    pub token_secret: String,
    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: listen port (default: 3000)
    /// - `APP_ENV`: `production` enables secure cookies (default: development)
    /// - `ACCESS_TOKEN_SECRET`: token signing secret (required)
    /// - `CORS_ORIGINS`: comma separated origin list (default: "http://localhost:5174")
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("port", 3000)?
            .set_default("app_env", "development")?
            .set_default("cors_origins", "http://localhost:5174")?
            .add_source(config::Environment::default())
            .build()
            .context("Failed to read configuration from environment")?;

        let raw: RawSettings = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        let token_secret = raw
            .access_token_secret
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| anyhow::anyhow!("ACCESS_TOKEN_SECRET environment variable not set"))?;

        let cors_origins = raw
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(AppConfig {
            port: raw.port,
            environment: Environment::parse(&raw.app_env),
            token_secret,
            cors_origins,
        })
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy::for_environment(self.environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("APP_ENV");
            std::env::remove_var("ACCESS_TOKEN_SECRET");
            std::env::remove_var("CORS_ORIGINS");
        }
    }

    #[test]
    #[serial]
    fn test_app_config_defaults() {
        clear_env();
        unsafe {
            std::env::set_var("ACCESS_TOKEN_SECRET", "test-secret");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.token_secret, "test-secret");
        assert_eq!(config.cors_origins, vec!["http://localhost:5174".to_string()]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_app_config_custom_values() {
        clear_env();
        unsafe {
            std::env::set_var("ACCESS_TOKEN_SECRET", "test-secret");
            std::env::set_var("PORT", "8080");
            std::env::set_var("APP_ENV", "production");
            std::env::set_var(
                "CORS_ORIGINS",
                "https://tutors.example.com, http://localhost:5174",
            );
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(
            config.cors_origins,
            vec![
                "https://tutors.example.com".to_string(),
                "http://localhost:5174".to_string()
            ]
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_app_config_requires_secret() {
        clear_env();
        assert!(AppConfig::from_env().is_err());
    }

    #[test]
    fn cookie_policy_follows_environment() {
        let production = CookiePolicy::for_environment(Environment::Production);
        assert!(production.secure);
        assert_eq!(production.same_site, SameSite::None);

        let development = CookiePolicy::for_environment(Environment::Development);
        assert!(!development.secure);
        assert_eq!(development.same_site, SameSite::Strict);
    }
}
