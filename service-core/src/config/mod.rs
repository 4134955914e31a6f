use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::de::DeserializeOwned;

/// Name of the optional configuration file looked up in the working directory
/// (`configuration.toml`, `configuration.yaml`, ...).
pub const CONFIG_FILE: &str = "configuration";

/// Load settings from `.env`, the optional configuration file and the
/// process environment, in that order of precedence (last wins).
pub fn load<T: DeserializeOwned>() -> Result<T, AppError> {
    dotenvy::dotenv().ok();
    from_environment(Environment::default())
}

/// Same as [`load`] without touching `.env`, reading variables from the given
/// environment source. Tests pass `Environment::default().source(..)`.
pub fn from_environment<T: DeserializeOwned>(environment: Environment) -> Result<T, AppError> {
    let config = Cfg::builder()
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(environment)
        .build()?;

    Ok(config.try_deserialize()?)
}
