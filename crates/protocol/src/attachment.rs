//! Attached-file recovery from a message's raw payload.
//!
//! The same "file attached" event shows up in two shapes:
//!
//! - an `update_attachments` envelope whose `data.attachments[]` entries may
//!   each carry a `file`; the first entry wins
//! - a plain chat message with a top-level `file`
//!
//! Each shape has its own parser. Both read the original bytes, never the
//! decoded map, since decoding may have flattened nested structure.

use {rtm_model::AttachedFile, serde::Deserialize, tracing::debug};

use crate::{Error, Message, Result};

// Only the fields leading to a file are declared. Anything else in the
// payload is ignored, so its type can't fail the parse.

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<EnvelopeData>,
}

#[derive(Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    attachments: Option<Vec<Attachment>>,
}

#[derive(Deserialize)]
struct Attachment {
    #[serde(default)]
    file: Option<AttachedFile>,
}

#[derive(Deserialize)]
struct FileMessage {
    #[serde(default)]
    file: Option<AttachedFile>,
}

/// Take the first attachment's file from an `update_attachments` payload.
pub fn parse_update_attachments(raw: &[u8]) -> Result<AttachedFile> {
    let envelope: Envelope = serde_json::from_slice(raw).map_err(Error::malformed)?;

    let first = envelope
        .data
        .and_then(|data| data.attachments)
        .and_then(|attachments| attachments.into_iter().next())
        .ok_or_else(|| Error::no_attachment("attachment list is empty"))?;

    first
        .file
        .ok_or_else(|| Error::no_attachment("no file in first attachment"))
}

/// Take the top-level file from a chat message payload.
pub fn parse_message_file(raw: &[u8]) -> Result<AttachedFile> {
    let message: FileMessage = serde_json::from_slice(raw).map_err(Error::malformed)?;
    message
        .file
        .ok_or_else(|| Error::no_attachment("message has no file"))
}

impl Message {
    /// Recover the attached file from the raw payload.
    ///
    /// Tries the `update_attachments` shape first, then the plain message
    /// shape. When both fail, a "no attachment" error is preferred over a
    /// parse error so callers can tell a readable payload from garbage.
    pub fn parse_attached_file(&self) -> Result<AttachedFile> {
        let raw = self.raw().ok_or(Error::MissingRawPayload)?;

        let first = match parse_update_attachments(raw) {
            Ok(file) => return Ok(file),
            Err(e) => e,
        };
        debug!(error = %first, "no attachment envelope, trying message file");

        parse_message_file(raw).map_err(|second| {
            debug!(error = %second, "no message file either");
            if first.is_malformed() {
                second
            } else {
                first
            }
        })
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::keys, serde_json::json};

    fn raw(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn missing_raw_payload() {
        let mut m = Message::new();
        m.insert(keys::TYPE, "update_attachments");
        m.insert("data", json!({ "attachments": [{ "file": { "id": "=f" } }] }));
        assert!(matches!(
            m.parse_attached_file(),
            Err(Error::MissingRawPayload)
        ));
    }

    #[test]
    fn empty_attachment_list() {
        let bytes = raw(json!({ "type": "update_attachments", "data": { "attachments": [] } }));
        assert!(matches!(
            parse_update_attachments(&bytes),
            Err(Error::NoAttachmentPresent { .. })
        ));
        let m = Message::decode(bytes).unwrap();
        assert!(matches!(
            m.parse_attached_file(),
            Err(Error::NoAttachmentPresent { .. })
        ));
    }

    #[test]
    fn first_attachment_without_file() {
        let bytes = raw(json!({
            "data": { "attachments": [{ "text": "no file" }, { "file": { "id": "=f2" } }] }
        }));
        let err = parse_update_attachments(&bytes).unwrap_err();
        assert!(matches!(err, Error::NoAttachmentPresent { .. }));
    }

    #[test]
    fn null_attachments_and_file() {
        let bytes = raw(json!({ "data": { "attachments": null }, "file": null }));
        assert!(matches!(
            parse_update_attachments(&bytes),
            Err(Error::NoAttachmentPresent { .. })
        ));
        assert!(matches!(
            parse_message_file(&bytes),
            Err(Error::NoAttachmentPresent { .. })
        ));
    }

    #[test]
    fn takes_first_attachment() {
        let bytes = raw(json!({
            "data": { "attachments": [
                { "file": { "id": "=f1", "image_url": "https://files.example/1" } },
                { "file": { "id": "=f2", "image_url": "https://files.example/2" } }
            ] }
        }));
        let file = parse_update_attachments(&bytes).unwrap();
        assert_eq!(file.id, "=f1");
        assert_eq!(file.image_url, "https://files.example/1");
    }

    #[test]
    fn falls_back_to_message_file() {
        let bytes = raw(json!({
            "type": "message",
            "file": { "id": "=f", "image_url": "https://files.example/cat" }
        }));
        assert!(parse_update_attachments(&bytes).is_err());
        let file = Message::decode(bytes).unwrap().parse_attached_file().unwrap();
        assert_eq!(file.image_url, "https://files.example/cat");
    }

    #[test]
    fn garbage_is_malformed() {
        let m = Message::new().with_raw(&b"\x00\x01 not json"[..]);
        assert!(m.parse_attached_file().unwrap_err().is_malformed());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let m = Message::new().with_raw(raw(json!({ "data": "nope", "file": 3 })));
        assert!(m.parse_attached_file().unwrap_err().is_malformed());
    }

    #[test]
    fn readable_but_wrong_shape_reports_no_attachment() {
        let m = Message::new().with_raw(raw(json!({ "data": "nope" })));
        assert!(matches!(
            m.parse_attached_file(),
            Err(Error::NoAttachmentPresent { .. })
        ));
    }

    #[test]
    fn unrelated_fields_do_not_break_extraction() {
        let bytes = raw(json!({
            "type": "update_attachments",
            "ts": "1541339826.1",
            "data": {
                "key": 17,
                "is_channel": "yes",
                "attachments": [{ "type": [], "text": {}, "file": { "id": "=f1" } }]
            }
        }));
        assert_eq!(parse_update_attachments(&bytes).unwrap().id, "=f1");

        let bytes = raw(json!({ "key": false, "subtype": 4, "file": { "id": "=f2" } }));
        let file = Message::new().with_raw(bytes).parse_attached_file().unwrap();
        assert_eq!(file.id, "=f2");
    }

    #[test]
    fn ignores_decoded_fields() {
        let mut m = Message::decode(raw(json!({ "type": "message", "text": "hi" }))).unwrap();
        m.insert("file", json!({ "id": "=f", "image_url": "https://files.example/x" }));
        assert!(matches!(
            m.parse_attached_file(),
            Err(Error::NoAttachmentPresent { .. })
        ));
    }
}
