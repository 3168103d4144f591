//! Application configuration loading
//!
//! Layers, lowest precedence first:
//! 1. defaults read from the plain environment variables (`DATABASE_URL`,
//!    `JWT_SECRET`, ...)
//! 2. an optional `config.<environment>.toml` file
//! 3. `HBNB__`-prefixed variables, e.g. `HBNB__SERVER__PORT=9090`

use config::{Config as ConfigBuilder, Environment as EnvironmentSource, File};
use thiserror::Error;

use hb_shared::config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("JWT_SECRET must be set to a non-default value in production")]
    DefaultSecretInProduction,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::from_env();
        let environment = defaults.environment;

        let settings = ConfigBuilder::builder()
            .add_source(ConfigBuilder::try_from(&defaults)?)
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(EnvironmentSource::with_prefix("HBNB").separator("__"))
            .build()?;

        Self::from_app_config(settings.try_deserialize()?)
    }

    /// Wrap an already assembled configuration, enforcing production rules
    pub fn from_app_config(app: AppConfig) -> Result<Self, ConfigError> {
        if app.environment.is_production() && app.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        Ok(Self { app })
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }
}
