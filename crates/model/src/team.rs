use serde::{Deserialize, Serialize};

use crate::de::nullable;

/// Team information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subdomain: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Owning user.
    #[serde(default, deserialize_with = "nullable", rename = "uid")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email_domain: String,
    #[serde(default, deserialize_with = "nullable")]
    pub inactive: bool,
    #[serde(default, deserialize_with = "nullable", rename = "created")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable", rename = "updated")]
    pub updated_at: String,
}

impl Team {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.inactive
    }
}

/// Channel information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub team_id: String,
    /// Creator of the channel.
    #[serde(default, deserialize_with = "nullable", rename = "uid")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub vchannel_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable", rename = "private")]
    pub is_private: bool,
    /// Whether this is the team's default channel.
    #[serde(default, deserialize_with = "nullable", rename = "general")]
    pub is_general: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub topic: String,
    #[serde(default, deserialize_with = "nullable", rename = "created")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable", rename = "updated")]
    pub updated_at: String,
}
