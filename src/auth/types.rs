//! Types for authentication and user management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// The account email
    pub email: String,

    /// The account password
    pub password: String,
}

impl Credentials {
    /// Create a new set of credentials
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT bearer token
    pub token: String,

    /// The token scheme, always "Bearer"
    #[serde(rename = "type")]
    pub token_type: String,

    /// Token lifetime in milliseconds
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,

    /// The authenticated user's role
    pub role: String,

    /// The authenticated user's email
    pub email: String,
}

/// User account data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// The user id, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The login name
    pub username: String,

    /// The account email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The account role; the backend defaults omitted roles to EXTERNO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Whether the account is active
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Roles known to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
    Externo,
}

impl UserRole {
    /// The wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Externo => "EXTERNO",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            "EXTERNO" => Ok(Self::Externo),
            other => Err(Error::auth(format!("unknown role: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [UserRole::Admin, UserRole::User, UserRole::Externo] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("ROOT".parse::<UserRole>().is_err());
    }

    #[test]
    fn user_serializes_without_empty_fields() {
        let user = User {
            username: "clara".to_string(),
            email: Some("clara@example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "clara");
        assert!(json.get("id").is_none());
        assert!(json.get("activo").is_none());
    }

    #[test]
    fn auth_response_uses_wire_names() {
        let json = r#"{
            "token": "jwt",
            "type": "Bearer",
            "expiresIn": 86400000,
            "role": "ADMIN",
            "email": "admin@example.com"
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 86_400_000);
    }
}
