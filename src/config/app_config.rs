use serde::Deserialize;

use crate::infrastructure::auth::DEFAULT_TOKEN_TTL_SECS;
use crate::infrastructure::user::DEFAULT_BCRYPT_COST;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Credential settings. Unlike the sections above this one has no
    /// default: a deployment without a signing secret must not start.
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Token signing secret (required)
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
    /// Bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_token_ttl_secs() -> i64 {
    DEFAULT_TOKEN_TTL_SECS
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and `APP__`-prefixed environment
    /// variables (e.g. `APP__AUTH__SECRET`). Fails when no signing secret
    /// is provided by any source.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);

        assert_eq!(default_token_ttl_secs(), 7 * 24 * 60 * 60);
        assert_eq!(default_bcrypt_cost(), 10);
    }

    #[test]
    fn test_auth_section_deserializes_with_defaults() {
        let auth: AuthConfig =
            serde_json::from_str(r#"{"secret": "dev-secret"}"#).unwrap();

        assert_eq!(auth.secret, "dev-secret");
        assert_eq!(auth.token_ttl_secs, 604_800);
        assert_eq!(auth.bcrypt_cost, 10);
    }

    #[test]
    fn test_auth_section_requires_secret() {
        let result: Result<AuthConfig, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
