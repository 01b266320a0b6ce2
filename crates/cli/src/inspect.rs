use std::io::{BufRead, Write};

use {
    rtm_channels::{AccessConfig, AccessDenied, check_access},
    rtm_protocol::{AttachedFile, Message, MessageKind},
    serde::Serialize,
    tracing::{debug, warn},
};

/// Per-message facts printed by `rtm inspect`.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub line: usize,
    pub kind: MessageKind,
    pub p2p: bool,
    pub chat: bool,
    pub sender: Option<&'a str>,
    pub vchannel_id: Option<&'a str>,
    pub text: &'a str,
    pub mentioned_uids: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention: Option<MentionSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentSummary>,
}

#[derive(Debug, Serialize)]
pub struct MentionSummary<'a> {
    pub mentioned: bool,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessSummary<'a> {
    Accepted { text: &'a str },
    Denied { reason: AccessDenied },
}

#[derive(Debug, Serialize)]
pub struct AttachmentSummary {
    pub id: String,
    pub name: String,
    pub mime: String,
    pub image_url: String,
}

impl From<AttachedFile> for AttachmentSummary {
    fn from(file: AttachedFile) -> Self {
        Self {
            id: file.id,
            name: file.name,
            mime: file.mime,
            image_url: file.image_url,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub decoded: usize,
    pub skipped: usize,
}

pub fn summarize<'a>(
    line: usize,
    message: &'a Message,
    bot_uid: Option<&str>,
    access_config: &AccessConfig,
) -> Summary<'a> {
    let mention = bot_uid.map(|uid| {
        let (mentioned, text) = message.parse_mention_uid(uid);
        MentionSummary { mentioned, text }
    });

    let access = bot_uid.map(|uid| match check_access(access_config, message, uid) {
        Ok(inbound) => AccessSummary::Accepted { text: inbound.text },
        Err(reason) => AccessSummary::Denied { reason },
    });

    let attachment = match message.parse_attached_file() {
        Ok(file) => Some(file.into()),
        Err(e) => {
            debug!(line, error = %e, "no attached file");
            None
        },
    };

    Summary {
        line,
        kind: message.kind(),
        p2p: message.is_p2p(),
        chat: message.is_chat_message(),
        sender: message.uid(),
        vchannel_id: message.vchannel_id(),
        text: message.text(),
        mentioned_uids: message.mentioned_uids(),
        mention,
        access,
        attachment,
    }
}

/// Decode each non-blank input line as a message and write its summary as
/// one JSON line. Undecodable lines are logged and skipped.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    bot_uid: Option<&str>,
    access: &AccessConfig,
) -> anyhow::Result<Stats> {
    let mut stats = Stats::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let message = match Message::decode(line.into_bytes()) {
            Ok(m) => m,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping undecodable message");
                stats.skipped += 1;
                continue;
            },
        };
        stats.decoded += 1;

        let summary = summarize(line_no, &message, bot_uid, access);
        serde_json::to_writer(&mut output, &summary)?;
        writeln!(output)?;
    }

    output.flush()?;
    Ok(stats)
}
