use {
    bytes::Bytes,
    rtm_model::User,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

use crate::{Error, MessageKind, Result};

/// Wire keys read or written by this crate.
pub mod keys {
    pub const TYPE: &str = "type";
    pub const TEXT: &str = "text";
    /// Sender.
    pub const UID: &str = "uid";
    /// Recipient of a direct message.
    pub const TO_UID: &str = "to_uid";
    pub const CHANNEL_ID: &str = "channel_id";
    /// Conversation routing id, shared by both ends of a DM or channel.
    pub const VCHANNEL_ID: &str = "vchannel_id";
    pub const KEY: &str = "key";
    /// Key of the message being quoted.
    pub const REFER_KEY: &str = "refer_key";
}

/// A single RTM message.
///
/// Fields live in an open JSON map; no key other than `type` is assumed to
/// exist and every accessor tolerates absence. The original bytes, when the
/// message was decoded off the wire, ride along separately so shape-specific
/// parsers can re-read them. They are never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(skip)]
    raw: Option<Bytes>,
}

impl Message {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields, raw: None }
    }

    /// Decode a wire payload, keeping the original bytes.
    pub fn decode(raw: impl Into<Bytes>) -> Result<Self> {
        let raw = raw.into();
        let fields: Map<String, Value> = serde_json::from_slice(&raw).map_err(Error::malformed)?;
        Ok(Self {
            fields,
            raw: Some(raw),
        })
    }

    /// Attach the original wire bytes to this message.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<Bytes>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A field's value, only if it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    // ── Classification ──────────────────────────────────────────────────────

    /// Recomputed from `type` on every call, since the map is mutable.
    pub fn kind(&self) -> MessageKind {
        self.get_str(keys::TYPE)
            .map_or(MessageKind::Unknown, MessageKind::from_wire)
    }

    /// Direct message or direct typing indicator.
    pub fn is_p2p(&self) -> bool {
        matches!(
            self.kind(),
            MessageKind::P2pMessage | MessageKind::P2pTyping
        )
    }

    /// Message carrying chat content. Typing indicators don't count.
    pub fn is_chat_message(&self) -> bool {
        matches!(
            self.kind(),
            MessageKind::P2pMessage | MessageKind::ChannelMessage
        )
    }

    pub fn is_from_user(&self, user: &User) -> bool {
        self.is_from_uid(&user.id)
    }

    /// Exact comparison against the sender; no normalization.
    pub fn is_from_uid(&self, uid: &str) -> bool {
        self.uid() == Some(uid)
    }

    /// The message text, or `""` when absent or not a string.
    pub fn text(&self) -> &str {
        self.get_str(keys::TEXT).unwrap_or_default()
    }

    pub fn uid(&self) -> Option<&str> {
        self.get_str(keys::UID)
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.get_str(keys::CHANNEL_ID)
    }

    pub fn vchannel_id(&self) -> Option<&str> {
        self.get_str(keys::VCHANNEL_ID)
    }

    pub fn key(&self) -> Option<&str> {
        self.get_str(keys::KEY)
    }

    // ── Derivation ──────────────────────────────────────────────────────────

    /// Build a reply in the same conversation.
    ///
    /// A reply to a direct message goes back to its sender; anything else is
    /// answered in the same channel. Routing fields absent from `self` are
    /// sent as `null`.
    #[must_use]
    pub fn reply(&self, text: impl Into<String>) -> Message {
        let mut reply = Message::new();
        reply.insert(keys::TEXT, text.into());
        reply.insert(keys::VCHANNEL_ID, self.field_or_null(keys::VCHANNEL_ID));

        if self.is_p2p() {
            reply.insert(keys::TYPE, MessageKind::P2pMessage.as_str());
            reply.insert(keys::TO_UID, self.field_or_null(keys::UID));
        } else {
            reply.insert(keys::TYPE, MessageKind::ChannelMessage.as_str());
            reply.insert(keys::CHANNEL_ID, self.field_or_null(keys::CHANNEL_ID));
        }

        reply
    }

    /// Like [`reply`](Self::reply), but linked to this message by its key.
    #[must_use]
    pub fn quote(&self, text: impl Into<String>) -> Message {
        let mut quote = self.reply(text);
        quote.insert(keys::REFER_KEY, self.field_or_null(keys::KEY));
        quote
    }

    fn field_or_null(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Null)
    }
}

impl From<Map<String, Value>> for Message {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}

impl TryFrom<Value> for Message {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        serde_json::from_value::<Map<String, Value>>(value)
            .map(Self::from_fields)
            .map_err(Error::malformed)
    }
}
