//! Configuration of the demo, with overrides from environment variables.

use std::env::{self, VarError};

use log::LevelFilter;
use semver::Version;

use tessera_core::config::Config;
use tessera_core::error::{Context, Error, Result};

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "binary must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "binary must be compiled by Cargo");

/// Count of frames to run; `0` means run until every entity with lifetime has expired.
pub const FRAMES_VAR: &str = "TESSERA_FRAMES";
/// Maximum log level, such as `info` or `trace`.
pub const LOG_VAR: &str = "TESSERA_LOG";

/// Creates configuration of the demo, reading overrides from environment variables.
pub fn from_env() -> Result<Config> {
    let version = Version::parse(APP_VERSION_STR).context("invalid application version")?;
    let config = Config::new(APP_NAME.to_string(), version);
    apply_overrides(config, var(FRAMES_VAR)?.as_deref(), var(LOG_VAR)?.as_deref())
}

fn var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(error) => Err(error).with_context(|| format!("cannot read {}", name)),
    }
}

fn apply_overrides(mut config: Config, frames: Option<&str>, log: Option<&str>) -> Result<Config> {
    if let Some(frames) = frames {
        let frames = frames
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid {} value {:?}", FRAMES_VAR, frames))?;
        config = config.with_frames(if frames == 0 { None } else { Some(frames) });
    }
    if let Some(log) = log {
        let level = log
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| Error::msg(format!("invalid {} value {:?}", LOG_VAR, log)))?;
        config = config.with_log_level(level);
    }
    Ok(config)
}
