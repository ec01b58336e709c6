//! # randbeans-config
//!
//! Layered configuration for the random population engine.
//!
//! Values are read, in increasing priority, from the built-in defaults, the `[populator]` table
//! of a `randbeans.toml` file in the project root and `RANDBEANS_` prefixed environment
//! variables.

#![warn(unused_crate_dependencies, unreachable_pub)]

#[macro_use]
extern crate tracing;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG_MSG};

/// The file name the config is read from.
pub const CONFIG_FILE: &str = "randbeans.toml";

/// The table inside [`CONFIG_FILE`] holding the populator settings.
pub const CONFIG_TABLE: &str = "populator";

/// The prefix of environment variables overriding file values.
pub const ENV_PREFIX: &str = "RANDBEANS_";

/// Settings of the random populator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulatorConfig {
    /// Optional seed for every random draw made by the populator.
    ///
    /// The same seed always produces the same object graph. When unset the generator is seeded
    /// from the operating system.
    pub seed: Option<u64>,
    /// How many map levels may be nested inside each other before inner maps are left empty.
    pub max_depth: usize,
    /// Upper bound (inclusive) of generated string lengths.
    pub max_string_length: usize,
}

impl Default for PopulatorConfig {
    fn default() -> Self {
        Self { seed: None, max_depth: 3, max_string_length: 32 }
    }
}

impl PopulatorConfig {
    /// Loads the config from the current working directory.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::load_with_root(".")
    }

    /// Loads the config, looking for [`CONFIG_FILE`] inside `root`.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        Self::from_provider(Self::figment_with_root(root))
    }

    /// Extracts a config from any figment provider.
    pub fn from_provider<T: figment::Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        let config = Figment::from(provider).extract::<Self>().map_err(ExtractConfigError::new)?;
        debug!(?config, "loaded populator config");
        Ok(config)
    }

    /// Returns the default [`Figment`] rooted at `root`.
    ///
    /// The returned figment can be extended before extraction:
    ///
    /// ```no_run
    /// use figment::providers::Serialized;
    /// use randbeans_config::PopulatorConfig;
    ///
    /// let figment = PopulatorConfig::figment_with_root(".").merge(Serialized::default("seed", 7));
    /// let config = PopulatorConfig::from_provider(figment).unwrap();
    /// ```
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        let file = Figment::from(Toml::file(root.as_ref().join(CONFIG_FILE))).focus(CONFIG_TABLE);
        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Returns the config with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
