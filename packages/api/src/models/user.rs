//! # User model
//!
//! [`UserInfo`] is the client-safe projection of an account. It crosses the
//! server/client boundary through the server functions in this crate, so it is
//! `Serialize + Deserialize + PartialEq` and carries only display fields.
//!
//! - `id`, `name`, `email`, `avatar_url`: profile fields.
//! - `role`: [`Role::User`] or [`Role::Admin`], serialized as `"USER"` / `"ADMIN"`.
//! - `daily_generations_used` / `max_daily_generations`: today's usage counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub daily_generations_used: u32,
    #[serde(default)]
    pub max_daily_generations: u32,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Today's usage, formatted as `used / max`.
    pub fn usage_label(&self) -> String {
        format!(
            "{} / {}",
            self.daily_generations_used, self.max_daily_generations
        )
    }

    /// Avatar reference, or an empty string when the account has none.
    pub fn avatar(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_usage_label() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Mina",
            "email": "mina@example.com",
            "daily_generations_used": 3,
            "max_daily_generations": 10,
        }))
        .unwrap();

        assert_eq!(user.usage_label(), "3 / 10");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert_eq!(user.avatar(), "");
    }
}
