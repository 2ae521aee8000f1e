//! Configuration management for FastSewa Core

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Contact notification configuration
    pub notify: NotifyConfig,
    /// Superadmin seed configuration
    pub admin: AdminSeedConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub access_token_ttl_secs: i64,
}

/// Configuration for the outbound contact-enquiry notification.
/// When `api_key` or `mailbox` is absent, dispatch is disabled and
/// submissions are still accepted.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    /// Operator mailbox, used as both sender and recipient
    pub mailbox: Option<String>,
}

/// Credentials for the superadmin account created on first startup.
/// Seeding is skipped when either value is absent.
#[derive(Debug, Clone, Default)]
pub struct AdminSeedConfig {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").context("DATABASE_URL is required")?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .unwrap_or(2),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").context("JWT_SECRET is required")?,
                issuer: env::var("JWT_ISSUER")
                    .unwrap_or_else(|_| "https://fastsewa.app".to_string()),
                access_token_ttl_secs: env::var("JWT_ACCESS_TOKEN_TTL_SECS")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse()
                    .unwrap_or(86400),
            },
            notify: NotifyConfig {
                api_url: env::var("BREVO_API_URL")
                    .unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".to_string()),
                api_key: env::var("BREVO_API_KEY").ok(),
                mailbox: env::var("EMAIL_USER").ok(),
            },
            admin: AdminSeedConfig {
                email: env::var("SUPERADMIN_EMAIL").ok(),
                password: env::var("SUPERADMIN_PASSWORD").ok(),
            },
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_config() -> Config {
        Config {
            http_host: "127.0.0.1".to_string(),
            http_port: 5000,
            database: DatabaseConfig {
                url: "mysql://localhost/test".to_string(),
                max_connections: 10,
                min_connections: 2,
            },
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                issuer: "test".to_string(),
                access_token_ttl_secs: 3600,
            },
            notify: NotifyConfig::default(),
            admin: AdminSeedConfig::default(),
        }
    }

    #[test]
    fn test_config_address() {
        let config = test_config();
        assert_eq!(config.http_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_config_clone() {
        let config1 = test_config();
        let config2 = config1.clone();

        assert_eq!(config1.http_host, config2.http_host);
        assert_eq!(config1.database.url, config2.database.url);
        assert_eq!(config1.jwt.secret, config2.jwt.secret);
    }

    #[test]
    fn test_notify_config_default_disabled() {
        let notify = NotifyConfig::default();
        assert!(notify.api_key.is_none());
        assert!(notify.mailbox.is_none());
    }

    #[test]
    fn test_config_debug() {
        let config = test_config();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("127.0.0.1"));
    }
}
