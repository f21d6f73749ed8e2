use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/// Public part of the user returned to the client. Deliberately has no
/// password field, so the stored hash cannot leak through serialization.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_response_serializes_user_id_camel_case() {
        let json = serde_json::to_value(RegisterResponse {
            message: "User registered successfully",
            user_id: 7,
        })
        .unwrap();
        assert_eq!(json["userId"], 7);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn login_response_carries_public_user_without_password() {
        let json = serde_json::to_value(LoginResponse {
            message: "Login successful",
            user: PublicUser {
                id: 1,
                name: "Alice".into(),
                email: "a@x.com".into(),
                role: "buyer".into(),
            },
        })
        .unwrap();
        assert_eq!(json["user"]["email"], "a@x.com");
        assert!(json["user"].get("password").is_none());
    }
}
