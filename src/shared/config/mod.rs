//! Application configuration module
//!
//! The configuration is read once at process start and passed by reference
//! to the token service and the store connector.

use thiserror::Error;

/// Signing secret used when `JWT_SECRET` is unset. Only suitable for local
/// development.
pub const DEV_JWT_SECRET: &str = "dev-secret";

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// TCP port the HTTP server listens on
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            database_url: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read the configuration from the process environment
    ///
    /// Reads `JWT_SECRET`, `DATABASE_URL` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            builder = builder.jwt_secret(secret);
        }

        if let Some(url) = lookup("DATABASE_URL").filter(|s| !s.is_empty()) {
            builder = builder.database_url(url);
        }

        if let Some(raw) = lookup("PORT") {
            let port = raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
            builder = builder.port(port);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }
        Ok(())
    }

    /// Whether the signing secret is the development fallback
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the PostgreSQL connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.unwrap_or_else(|| DEV_JWT_SECRET.to_string()),
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
