use {
    rtm_channels::AccessConfig,
    serde::{Deserialize, Serialize},
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtmConfig {
    pub bot: BotConfig,
    pub access: AccessConfig,
    pub logging: LoggingConfig,
}

/// Identity of the bot account messages are interpreted for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// User id used for mention detection and own-message filtering.
    pub uid: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `rtm_protocol=debug`.
    pub level: Option<String>,
    /// Emit JSON log lines.
    pub json: bool,
}
