use serde::{Deserialize, Serialize};

use crate::de::nullable;

/// A file attached to a message.
///
/// The server is inconsistent about `null` versus absent fields, so every
/// field falls back to its default rather than failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub team_id: String,
    /// Uploader.
    #[serde(default, deserialize_with = "nullable")]
    pub uid: String,
    /// Storage key of the file contents.
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,
    /// Broad category, e.g. `image`.
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    /// Extension-like type tag, e.g. `png`.
    #[serde(default, deserialize_with = "nullable", rename = "type")]
    pub file_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub mime: String,
    #[serde(default, deserialize_with = "nullable")]
    pub width: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub height: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub orientation: u32,
    /// Size in bytes.
    #[serde(default, deserialize_with = "nullable")]
    pub size: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub is_public: bool,
    /// `false` for derived renditions such as thumbnails.
    #[serde(default, deserialize_with = "nullable")]
    pub original: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub deleted: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub inactive: bool,
    /// Where the file came from, e.g. `internal`.
    #[serde(default, deserialize_with = "nullable")]
    pub source: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub preview_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub upload_zone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created: String,
    #[serde(default, deserialize_with = "nullable")]
    pub updated: String,
}

impl AttachedFile {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.category == "image"
    }
}
