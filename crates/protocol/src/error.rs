/// Crate-wide result type for payload re-parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while re-deriving data from a message's raw payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The message was built without its original bytes.
    #[error("message carries no raw payload")]
    MissingRawPayload,

    /// The bytes are not a JSON object of the expected shape.
    #[error("malformed payload: {source}")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },

    /// The payload parsed but holds no attached file.
    #[error("no attachment present: {reason}")]
    NoAttachmentPresent { reason: &'static str },
}

impl Error {
    #[must_use]
    pub fn malformed(source: serde_json::Error) -> Self {
        Self::MalformedPayload { source }
    }

    #[must_use]
    pub fn no_attachment(reason: &'static str) -> Self {
        Self::NoAttachmentPresent { reason }
    }

    /// Whether the payload itself could not be parsed, as opposed to parsing
    /// fine but lacking the requested data.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload { .. })
    }
}
