//! Configuration loading for RTM tools.
//!
//! Config files: `rtm.toml`, `rtm.yaml`/`rtm.yml`, or `rtm.json`,
//! searched in `./` then `~/.config/rtm/`.
//!
//! `${ENV_VAR}` placeholders are substituted before parsing.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{
        Discovered, config_dir, discover, discover_and_load, discover_in, find_config_in, load_config,
    },
    schema::{BotConfig, LoggingConfig, RtmConfig},
};
