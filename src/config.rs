//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub instance: InstanceConfig,
    pub profile: ProfileConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

/// Instance metadata
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceConfig {
    /// Display name of the deployment
    pub title: String,
}

/// Defaults applied to freshly signed-up profiles
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Bio given to new users
    pub default_bio: String,
    /// Avatar URL template; `{seed}` is replaced with the new user id
    pub avatar_url_template: String,
}

impl ProfileConfig {
    /// Render the avatar template for a given seed value
    pub fn avatar_url_for(&self, seed: u64) -> String {
        self.avatar_url_template
            .replace("{seed}", &seed.to_string())
    }
}

/// Seed fixture configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeedConfig {
    /// Path to a JSON fixture; the built-in fixture is used when unset
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (STYLATI_*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("instance.title", "ستايلاتي")?
            .set_default("profile.default_bio", "مرحباً! أنا عضو جديد في ستايلاتي.")?
            .set_default(
                "profile.avatar_url_template",
                "https://picsum.photos/seed/{seed}/200/200",
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (STYLATI_*)
            .add_source(
                Environment::with_prefix("STYLATI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub(crate) fn validate(&self) -> Result<(), crate::error::AppError> {
        if !self.profile.avatar_url_template.contains("{seed}") {
            return Err(crate::error::AppError::Config(
                "profile.avatar_url_template must contain a {seed} placeholder".to_string(),
            ));
        }

        let sample = self.profile.avatar_url_for(1);
        if url::Url::parse(&sample).is_err() {
            return Err(crate::error::AppError::Config(format!(
                "profile.avatar_url_template does not render a valid URL: {}",
                sample
            )));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(crate::error::AppError::Config(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }
}
