//! Registry configuration.
//!
//! Capacities for the two bounded caches. Configuration sources in order of
//! precedence (later sources override earlier):
//! 1. Bundled defaults (`guildstate.toml` shipped with the crate)
//! 2. User config in home directory (`~/.config/guildstate/guildstate.toml`)
//! 3. User config in current directory (`./guildstate.toml`)
//! 4. `GUILDSTATE_*` environment variables

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use guildstate_error::{
    BuilderError, BuilderErrorKind, CapacityError, ConfigError, GuildStateError, GuildStateResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Capacities of the bounded caches.
///
/// # Example
///
/// ```
/// use guildstate_registry::RegistryConfig;
///
/// let config = RegistryConfig::builder()
///     .max_messages(500_usize)
///     .build()
///     .unwrap();
/// assert_eq!(*config.max_messages(), 500);
/// assert_eq!(*config.max_dm_channels(), 100);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct RegistryConfig {
    /// Maximum number of cached messages
    #[serde(default = "default_max_messages")]
    #[builder(default = "default_max_messages()")]
    max_messages: usize,

    /// Maximum number of cached direct-message channels
    #[serde(default = "default_max_dm_channels")]
    #[builder(default = "default_max_dm_channels()")]
    max_dm_channels: usize,
}

fn default_max_messages() -> usize {
    100
}

fn default_max_dm_channels() -> usize {
    100
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
            max_dm_channels: default_max_dm_channels(),
        }
    }
}

impl RegistryConfigBuilder {
    /// Build the configuration, rejecting zero capacities.
    ///
    /// # Errors
    ///
    /// Returns an error if a capacity is zero.
    pub fn build(&self) -> GuildStateResult<RegistryConfig> {
        let config = self
            .build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

impl RegistryConfig {
    /// Creates a new config builder.
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Check that both capacities are positive.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] naming the first zero capacity.
    pub fn validate(&self) -> Result<(), CapacityError> {
        if self.max_messages == 0 {
            return Err(CapacityError::new("messages", self.max_messages));
        }
        if self.max_dm_channels == 0 {
            return Err(CapacityError::new("dm_channels", self.max_dm_channels));
        }
        Ok(())
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds a
    /// zero capacity.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GuildStateResult<Self> {
        debug!("Loading registry configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                GuildStateError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                GuildStateError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed or a capacity
    /// is zero.
    #[instrument]
    pub fn load() -> GuildStateResult<Self> {
        debug!("Loading registry configuration with layered sources");

        const DEFAULT_CONFIG: &str = include_str!("../guildstate.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/guildstate/guildstate.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("guildstate").required(false))
            .add_source(Environment::with_prefix("GUILDSTATE").try_parsing(true));

        let config: Self = builder
            .build()
            .map_err(|e| {
                GuildStateError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                GuildStateError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }
}
