use serde::{Deserialize, Serialize};

/// Check `id` against an allowlist.
///
/// An empty allowlist allows everyone. Uids are opaque, so matching is
/// exact; entries may use `*` to match any run of characters.
pub fn is_allowed(id: &str, allowlist: &[String]) -> bool {
    if allowlist.is_empty() {
        return true;
    }
    allowlist.iter().any(|entry| wildcard_match(entry, id))
}

fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(head) = parts.next() else {
        return pattern == text;
    };
    let Some(mut rest) = text.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = parts.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No wildcard at all.
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

/// When the bot reacts to channel messages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MentionMode {
    /// Only when mentioned with a `@<==uid=> ` marker.
    #[default]
    Mention,
    /// Every channel message.
    Always,
    /// Never in channels.
    None,
}

/// Who may send the bot direct messages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DmPolicy {
    #[default]
    Open,
    /// Only senders on the allowlist.
    Allowlist,
    Disabled,
}

/// Which channels the bot listens in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChannelPolicy {
    #[default]
    Open,
    /// Only channels on the channel allowlist.
    Allowlist,
    Disabled,
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| (*e).to_string()).collect()
    }

    #[test]
    fn empty_allowlist_allows_everyone() {
        assert!(is_allowed("=bxcKY", &[]));
    }

    #[rstest]
    #[case(&["=bxcKY"], "=bxcKY", true)]
    #[case(&["=bxcKY"], "=BXCKY", false)]
    #[case(&["=BXCKY"], "=bxcKY", false)]
    #[case(&["=bx*"], "=BXcKY", false)]
    #[case(&["=bxcKY"], "=bxcKY2", false)]
    #[case(&["=bx*"], "=bxcKY", true)]
    #[case(&["=bx*"], "=abc", false)]
    #[case(&["*KY"], "=bxcKY", true)]
    #[case(&["*KY"], "=bxcKZ", false)]
    #[case(&["=b*c*Y"], "=bxcKY", true)]
    #[case(&["=b*c*Y"], "=bxKY", false)]
    #[case(&["*"], "anything", true)]
    #[case(&["=a", "=b"], "=b", true)]
    fn allowlist(#[case] entries: &[&str], #[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_allowed(id, &list(entries)), expected);
    }

    #[test]
    fn policies_deserialize_lowercase() {
        let mode: MentionMode = serde_json::from_str("\"always\"").unwrap_or_default();
        assert_eq!(mode, MentionMode::Always);
        let dm: DmPolicy = serde_json::from_str("\"allowlist\"").unwrap_or_default();
        assert_eq!(dm, DmPolicy::Allowlist);
        let channel: ChannelPolicy = serde_json::from_str("\"disabled\"").unwrap_or_default();
        assert_eq!(channel, ChannelPolicy::Disabled);
    }
}
