use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    env_subst::substitute_env,
    schema::{LoggingConfig, RtmConfig},
};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["rtm.toml", "rtm.yaml", "rtm.yml", "rtm.json"];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<RtmConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&substitute_env(&raw), path)
}

/// Outcome of searching the standard locations for a config file.
#[derive(Debug)]
pub enum Discovered {
    NotFound,
    Loaded { path: PathBuf, config: RtmConfig },
    Failed { path: PathBuf, error: anyhow::Error },
}

impl Discovered {
    /// Logging section of the loaded file, or defaults.
    ///
    /// Available before any subscriber exists, so telemetry can be set up
    /// from it before [`Discovered::into_config`] reports the outcome.
    pub fn logging(&self) -> LoggingConfig {
        match self {
            Self::Loaded { config, .. } => config.logging.clone(),
            Self::NotFound | Self::Failed { .. } => LoggingConfig::default(),
        }
    }

    /// Resolve to a config, falling back to defaults. A file that failed to
    /// load is reported with a warning.
    pub fn into_config(self) -> RtmConfig {
        match self {
            Self::NotFound => {
                debug!("no config file found, using defaults");
                RtmConfig::default()
            },
            Self::Loaded { path, config } => {
                debug!(path = %path.display(), "loaded config");
                config
            },
            Self::Failed { path, error } => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to load config, using defaults"
                );
                RtmConfig::default()
            },
        }
    }
}

/// Search the standard locations without logging anything.
///
/// Search order:
/// 1. `./rtm.{toml,yaml,yml,json}`
/// 2. `~/.config/rtm/rtm.{toml,yaml,yml,json}`
pub fn discover() -> Discovered {
    let mut dirs = vec![PathBuf::from(".")];
    dirs.extend(config_dir());
    discover_in(&dirs)
}

/// Load the first standard config file found in `dirs`, in order.
pub fn discover_in(dirs: &[PathBuf]) -> Discovered {
    let Some(path) = dirs.iter().find_map(|d| find_config_in(d)) else {
        return Discovered::NotFound;
    };
    match load_config(&path) {
        Ok(config) => Discovered::Loaded { path, config },
        Err(error) => Discovered::Failed { path, error },
    }
}

/// Discover and load config from standard locations.
///
/// Falls back to `RtmConfig::default()` when nothing is found or the file
/// can't be loaded. The warning for a broken file only reaches a subscriber
/// that is already installed; callers that configure logging from the file
/// should use [`discover`] instead.
pub fn discover_and_load() -> RtmConfig {
    discover().into_config()
}

/// First standard config file inside `dir`.
pub fn find_config_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

/// Returns the user-global config directory (`~/.config/rtm/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "rtm").map(|d| d.config_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<RtmConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}
