use serde::{Deserialize, Serialize};

/// Message type, derived from the `type` field of a message.
///
/// This is a plain tag. Behaviour that depends on the kind lives on
/// [`Message`](crate::Message).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Ping,
    Pong,
    /// Acknowledgement of a sent message.
    Reply,
    Ok,
    /// Direct message between two users.
    #[serde(rename = "message")]
    P2pMessage,
    #[serde(rename = "typing")]
    P2pTyping,
    ChannelMessage,
    ChannelTyping,
    UpdateUserConnection,
    UpdateAttachments,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MessageKind {
    pub const ALL: [Self; 11] = [
        Self::Unknown,
        Self::Ping,
        Self::Pong,
        Self::Reply,
        Self::Ok,
        Self::P2pMessage,
        Self::P2pTyping,
        Self::ChannelMessage,
        Self::ChannelTyping,
        Self::UpdateUserConnection,
        Self::UpdateAttachments,
    ];

    /// The wire value of the `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Ping => "ping",
            Self::Pong => "pong",
            Self::Reply => "reply",
            Self::Ok => "ok",
            Self::P2pMessage => "message",
            Self::P2pTyping => "typing",
            Self::ChannelMessage => "channel_message",
            Self::ChannelTyping => "channel_typing",
            Self::UpdateUserConnection => "update_user_connection",
            Self::UpdateAttachments => "update_attachments",
        }
    }

    /// Map a wire `type` value to a kind. Unrecognized values are `Unknown`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ping" => Self::Ping,
            "pong" => Self::Pong,
            "reply" => Self::Reply,
            "ok" => Self::Ok,
            "message" => Self::P2pMessage,
            "typing" => Self::P2pTyping,
            "channel_message" => Self::ChannelMessage,
            "channel_typing" => Self::ChannelTyping,
            "update_user_connection" => Self::UpdateUserConnection,
            "update_attachments" => Self::UpdateAttachments,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::from_wire(kind.as_str()), kind);
        }
    }

    #[test]
    fn unrecognized_is_unknown() {
        assert_eq!(MessageKind::from_wire(""), MessageKind::Unknown);
        assert_eq!(MessageKind::from_wire("Message"), MessageKind::Unknown);
        assert_eq!(MessageKind::from_wire("hello"), MessageKind::Unknown);
    }

    #[test]
    fn serde_matches_wire_names() {
        for kind in MessageKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        let kind: MessageKind = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(kind, MessageKind::Unknown);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(MessageKind::default(), MessageKind::Unknown);
        let kind: MessageKind = serde_json::from_str("\"update_attachments\"").unwrap();
        assert_eq!(kind, MessageKind::UpdateAttachments);
    }
}
