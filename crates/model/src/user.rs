use serde::{Deserialize, Serialize};

use crate::de::nullable;

/// Value of [`User::conn`] for a user with a live connection.
pub const CONN_CONNECTED: &str = "connected";

/// Role of a user inside a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Admin,
    Normal,
    Visitor,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Kind of account behind a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Normal,
    Assistant,
    /// Automated agent (bot) account.
    #[serde(rename = "hubot")]
    Bot,
    #[default]
    #[serde(other)]
    Unknown,
}

/// User information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub team_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub vchannel_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub role: UserRole,
    #[serde(default, deserialize_with = "nullable", rename = "type")]
    pub user_type: UserType,
    /// Live connection status as reported by the server.
    #[serde(default, deserialize_with = "nullable")]
    pub conn: String,
    #[serde(default, deserialize_with = "nullable", rename = "created")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable", rename = "updated")]
    pub updated_at: String,
}

impl User {
    /// Shorthand for a user known only by id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Whether the user currently holds a live connection.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.conn == CONN_CONNECTED
    }

    /// Whether this is a human team member (owner, admin or normal) rather
    /// than a visitor or an automated account.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.user_type == UserType::Normal && self.role != UserRole::Visitor
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn user(user_type: UserType, role: UserRole) -> User {
        User {
            user_type,
            role,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(UserType::Normal, UserRole::Owner, true)]
    #[case(UserType::Normal, UserRole::Admin, true)]
    #[case(UserType::Normal, UserRole::Normal, true)]
    #[case(UserType::Normal, UserRole::Visitor, false)]
    #[case(UserType::Assistant, UserRole::Normal, false)]
    #[case(UserType::Bot, UserRole::Normal, false)]
    #[case(UserType::Unknown, UserRole::Unknown, false)]
    fn is_normal(#[case] user_type: UserType, #[case] role: UserRole, #[case] expected: bool) {
        assert_eq!(user(user_type, role).is_normal(), expected);
    }

    #[test]
    fn online_only_when_connected() {
        let mut u = User::with_id("=1");
        assert!(!u.is_online());
        u.conn = "offline".into();
        assert!(!u.is_online());
        u.conn = CONN_CONNECTED.into();
        assert!(u.is_online());
    }

    #[test]
    fn deserialize_from_wire() {
        let json = r#"{
            "id": "=bxcKY",
            "team_id": "=bwECm",
            "name": "nanmu",
            "role": "admin",
            "type": "hubot",
            "conn": "connected"
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.role, UserRole::Admin);
        assert_eq!(u.user_type, UserType::Bot);
        assert!(u.is_online());
        assert!(!u.is_normal());
    }

    #[test]
    fn unrecognized_role_and_type_degrade() {
        let u: User = serde_json::from_str(r#"{"role": "guest", "type": "robot"}"#).unwrap();
        assert_eq!(u.role, UserRole::Unknown);
        assert_eq!(u.user_type, UserType::Unknown);
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let json = r#"{
            "id": "=bxcKY",
            "full_name": null,
            "email": null,
            "avatar_url": null,
            "role": null,
            "type": null,
            "conn": null
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.id, "=bxcKY");
        assert!(u.full_name.is_empty());
        assert_eq!(u.role, UserRole::Unknown);
        assert_eq!(u.user_type, UserType::Unknown);
        assert!(!u.is_online());
    }
}
