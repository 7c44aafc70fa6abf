//! Request and response types for the auth API. Request payloads carry passwords,
//! so the password is held as a secret and only exposed while serializing the body.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl LoginRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl RegisterRequest {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Token issued by a successful login. Storage and expiry are up to the caller.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}

/// Register responses are passed through as-is; the service does not pin a shape.
pub type RegisterResponse = serde_json::Value;

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, RegisterRequest};
    use serde_json::json;

    #[test]
    fn login_request_serializes_expected_body() {
        let request = LoginRequest::new("a", "b");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"username": "a", "password": "b"}));
    }

    #[test]
    fn register_request_serializes_expected_body() {
        let request = RegisterRequest::new("writer", "writer@example.com", "password123");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "writer",
                "email": "writer@example.com",
                "password": "password123"
            })
        );
    }

    #[test]
    fn debug_output_redacts_password() {
        let request = LoginRequest::new("writer", "hunter22");
        let debug = format!("{request:?}");
        assert!(debug.contains("writer"));
        assert!(!debug.contains("hunter22"));
    }
}
