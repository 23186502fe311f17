//! Encoder configuration for the command line.
//!
//! Sources are merged in this order, later ones taking precedence:
//! 1. [`EncoderConfig::default`]
//! 2. `rlpe.toml` in the current directory, or the file named by `RLPE_CONFIG`
//! 3. `RLPE_`-prefixed environment variables, e.g. `RLPE_ABSENT=empty-string`
//! 4. command-line flags

use eyre::{Result, WrapErr};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use rlp_encode::{AbsentPolicy, EncoderConfig};
use serde::Serialize;
use std::path::PathBuf;

/// The default configuration file name.
pub const FILE_NAME: &str = "rlpe.toml";

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "RLPE_CONFIG";

/// Settings passed on the command line. Unset fields leave lower layers untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absent: Option<AbsentPolicy>,
}

/// Returns the path of the configuration file to read.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(FILE_NAME), PathBuf::from)
}

/// Returns the merged configuration sources, without command-line overrides.
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(EncoderConfig::default()))
        .merge(Toml::file(config_path()))
        .merge(
            Env::prefixed("RLPE_")
                .ignore(&["CONFIG", "DEBUG"])
                .map(|key| key.as_str().replace('_', "-").into()),
        )
}

/// Loads the encoder configuration, applying `overrides` last.
pub fn load(overrides: &ConfigOverrides) -> Result<EncoderConfig> {
    let config: EncoderConfig = figment()
        .merge(Serialized::defaults(overrides))
        .extract()
        .wrap_err("failed to load configuration")?;
    debug!(absent = %config.absent, scratch_capacity = config.scratch_capacity, "loaded config");
    Ok(config)
}
