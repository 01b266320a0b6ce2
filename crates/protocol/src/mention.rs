//! `@<==uid=> ` mention markers in channel message text.
//!
//! A marker is the literal `@<=`, the user id, `=>` and exactly one space.
//! The trailing space is part of the marker: `@<==1=>` at the end of a text
//! does not count as a mention.

use std::sync::LazyLock;

use {regex::Regex, rtm_model::User};

use crate::Message;

#[allow(clippy::expect_used)]
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@<=(=[A-Za-z0-9]+)=> ").expect("mention pattern is valid"));

/// Render the marker that mentions `uid`.
#[must_use]
pub fn marker(uid: &str) -> String {
    format!("@<={uid}=> ")
}

/// Find the first mention of `uid` in `text`.
///
/// Returns `(true, rest)` where `rest` is everything after that marker,
/// or `(false, text)` when `uid` is not mentioned. Mentions of other users,
/// before or after, don't affect the result.
pub fn find_mention<'a>(text: &'a str, uid: &str) -> (bool, &'a str) {
    MENTION_RE
        .captures_iter(text)
        .find(|caps| &caps[1] == uid)
        .and_then(|caps| caps.get(0))
        .map_or((false, text), |m| (true, &text[m.end()..]))
}

/// Every mentioned user id, in text order.
pub fn mentioned_uids(text: &str) -> Vec<&str> {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

impl Message {
    pub fn parse_mention_user(&self, user: &User) -> (bool, &str) {
        self.parse_mention_uid(&user.id)
    }

    /// Whether `uid` is addressed by this message, plus the text meant for
    /// them.
    ///
    /// Direct messages are always addressed to their recipient and carry no
    /// markers, so they return the whole text.
    pub fn parse_mention_uid(&self, uid: &str) -> (bool, &str) {
        let text = self.text();

        if self.is_p2p() {
            return (true, text);
        }

        if text.is_empty() {
            return (false, text);
        }

        find_mention(text, uid)
    }

    pub fn mentioned_uids(&self) -> Vec<&str> {
        mentioned_uids(self.text())
    }
}
