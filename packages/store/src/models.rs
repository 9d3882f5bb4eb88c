//! # User profile record
//!
//! [`UserInfo`] is the server-supplied identity attached to a session. The
//! server owns the schema; the client validates nothing and carries any
//! fields it does not know about in `extra` so they survive the
//! localStorage round trip.

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    /// Server fields the client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserInfo {
    /// Get display name, falling back to email if username is not set.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = r#"{"id":7,"email":"a@b.com","is_verified":true,"devices_count":3}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_verified);
        assert_eq!(user.extra["devices_count"], 3);

        let back = serde_json::to_string(&user).unwrap();
        let again: UserInfo = serde_json::from_str(&back).unwrap();
        assert_eq!(user, again);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserInfo {
            email: "a@b.com".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@b.com");

        user.username = Some("alice".into());
        assert_eq!(user.display_name(), "alice");
    }
}
