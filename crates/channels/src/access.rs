use {
    rtm_protocol::{Message, MessageKind},
    serde::Serialize,
    tracing::debug,
};

use crate::{
    config::AccessConfig,
    gating::{self, ChannelPolicy, DmPolicy, MentionMode},
};

/// An inbound message the bot should act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inbound<'a> {
    pub kind: MessageKind,
    /// Sender uid, empty when the message has none.
    pub sender: &'a str,
    /// Text addressed to the bot: what follows its mention, or the whole
    /// text when no mention was needed.
    pub text: &'a str,
    pub mentioned: bool,
}

/// Reason an inbound message was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum AccessDenied {
    #[error("not a chat message")]
    NotChatMessage,
    #[error("message sent by the bot itself")]
    OwnMessage,
    #[error("DMs are disabled")]
    DmsDisabled,
    #[error("sender not on allowlist")]
    NotOnAllowlist,
    #[error("channels are disabled")]
    ChannelsDisabled,
    #[error("channel not on allowlist")]
    ChannelNotOnAllowlist,
    #[error("bot does not respond in channels")]
    MentionModeNone,
    #[error("bot was not mentioned")]
    NotMentioned,
}

/// Decide whether the bot identified by `bot_uid` should handle `message`.
pub fn check_access<'a>(
    config: &AccessConfig,
    message: &'a Message,
    bot_uid: &str,
) -> Result<Inbound<'a>, AccessDenied> {
    let kind = message.kind();
    let sender = message.uid().unwrap_or_default();

    let result = gate(config, message, bot_uid, sender);
    if let Err(reason) = &result {
        debug!(%kind, sender, %reason, "inbound message dropped");
    }
    result
}

fn gate<'a>(
    config: &AccessConfig,
    message: &'a Message,
    bot_uid: &str,
    sender: &'a str,
) -> Result<Inbound<'a>, AccessDenied> {
    if !message.is_chat_message() {
        return Err(AccessDenied::NotChatMessage);
    }
    if config.ignore_own_messages && message.is_from_uid(bot_uid) {
        return Err(AccessDenied::OwnMessage);
    }

    let kind = message.kind();
    if message.is_p2p() {
        check_dm_access(config, sender)?;
        return Ok(Inbound {
            kind,
            sender,
            text: message.text(),
            mentioned: true,
        });
    }

    check_channel_access(config, message.vchannel_id().unwrap_or_default())?;

    let (mentioned, rest) = message.parse_mention_uid(bot_uid);
    let text = match config.mention_mode {
        MentionMode::None => return Err(AccessDenied::MentionModeNone),
        MentionMode::Mention if !mentioned => return Err(AccessDenied::NotMentioned),
        MentionMode::Mention => rest,
        MentionMode::Always => {
            if mentioned {
                rest
            } else {
                message.text()
            }
        },
    };

    Ok(Inbound {
        kind,
        sender,
        text,
        mentioned,
    })
}

fn check_dm_access(config: &AccessConfig, sender: &str) -> Result<(), AccessDenied> {
    match config.dm_policy {
        DmPolicy::Disabled => Err(AccessDenied::DmsDisabled),
        DmPolicy::Open => Ok(()),
        // An explicit allowlist policy with no entries denies everyone.
        DmPolicy::Allowlist
            if !config.allowlist.is_empty() && gating::is_allowed(sender, &config.allowlist) =>
        {
            Ok(())
        },
        DmPolicy::Allowlist => Err(AccessDenied::NotOnAllowlist),
    }
}

fn check_channel_access(config: &AccessConfig, vchannel_id: &str) -> Result<(), AccessDenied> {
    match config.channel_policy {
        ChannelPolicy::Disabled => Err(AccessDenied::ChannelsDisabled),
        ChannelPolicy::Open => Ok(()),
        ChannelPolicy::Allowlist
            if !config.channel_allowlist.is_empty()
                && gating::is_allowed(vchannel_id, &config.channel_allowlist) =>
        {
            Ok(())
        },
        ChannelPolicy::Allowlist => Err(AccessDenied::ChannelNotOnAllowlist),
    }
}
