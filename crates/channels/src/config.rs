use serde::{Deserialize, Serialize};

use crate::gating::{ChannelPolicy, DmPolicy, MentionMode};

/// Access rules for a bot account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Direct message policy.
    pub dm_policy: DmPolicy,

    /// Channel policy.
    pub channel_policy: ChannelPolicy,

    /// Mention activation mode for channels.
    pub mention_mode: MentionMode,

    /// Sender uids allowed to DM the bot.
    pub allowlist: Vec<String>,

    /// `vchannel_id`s the bot listens in.
    pub channel_allowlist: Vec<String>,

    /// Drop messages sent by the bot itself (default: true).
    pub ignore_own_messages: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            dm_policy: DmPolicy::default(),
            channel_policy: ChannelPolicy::default(),
            mention_mode: MentionMode::default(),
            allowlist: Vec::new(),
            channel_allowlist: Vec::new(),
            ignore_own_messages: true,
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = AccessConfig::default();
        assert_eq!(cfg.dm_policy, DmPolicy::Open);
        assert_eq!(cfg.channel_policy, ChannelPolicy::Open);
        assert_eq!(cfg.mention_mode, MentionMode::Mention);
        assert!(cfg.allowlist.is_empty());
        assert!(cfg.ignore_own_messages);
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{
            "dm_policy": "allowlist",
            "mention_mode": "always",
            "allowlist": ["=bxcKY"]
        }"#;
        let cfg: AccessConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.dm_policy, DmPolicy::Allowlist);
        assert_eq!(cfg.mention_mode, MentionMode::Always);
        assert_eq!(cfg.allowlist, vec!["=bxcKY"]);
        // unspecified fields keep their defaults
        assert_eq!(cfg.channel_policy, ChannelPolicy::Open);
        assert!(cfg.ignore_own_messages);
    }
}
