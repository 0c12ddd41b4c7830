use std::env;

use auth::ValidityWindow;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Token signing secret. Required; there is deliberately no default.
    pub secret: String,

    /// Token validity window string, e.g. "7d" or "12h".
    #[serde(default = "default_expires_in")]
    pub expires_in: String,
}

fn default_expires_in() -> String {
    "7d".to_string()
}

impl AuthConfig {
    /// Parse the configured validity window.
    ///
    /// Unrecognized values fall back to the 7-day default.
    pub fn validity_window(&self) -> ValidityWindow {
        ValidityWindow::parse(&self.expires_in)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, AUTH__EXPIRES_IN, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Fails if the signing secret is absent or empty; the process must
    /// not start with an implicit secret.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.auth.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.secret must be set to a non-empty value".to_string(),
            ));
        }

        Ok(self)
    }
}
