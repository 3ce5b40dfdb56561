use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SharedError};

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").unwrap();
}

/// Signed-in user from `/auth/user/me`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl UserDto {
    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// Request for login
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn validate_form(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }
}

/// Request for account registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1 to 150 characters"),
        regex(path = "USERNAME_REGEX", message = "Username may only contain letters, digits and @/./+/-/_")
    )]
    pub username: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password1: String,

    pub password2: String,
}

impl RegisterRequest {
    /// Field validation plus the password confirmation check.
    pub fn validate_form(&self) -> Result<()> {
        self.validate()?;
        if self.password1 != self.password2 {
            return Err(SharedError::Validation("Passwords do not match".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password2: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: "fan@example.com".to_string(),
            password1: "gridiron-2024".to_string(),
            password2: password2.to_string(),
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let ok = LoginRequest {
            email: "fan@example.com".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn validation_messages_are_listed_by_field() {
        let bad = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        match bad.validate_form() {
            Err(SharedError::Validation(message)) => {
                assert_eq!(message, "Enter a valid email address. Password is required")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn register_checks_passwords_match() {
        assert!(register("fan_01", "gridiron-2024").validate_form().is_ok());
        match register("fan_01", "gridiron-2025").validate_form() {
            Err(SharedError::Validation(message)) => assert_eq!(message, "Passwords do not match"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn register_rejects_spaces_in_username() {
        assert!(register("two words", "gridiron-2024").validate_form().is_err());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user: UserDto = serde_json::from_str(r#"{"email": "fan@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "fan@example.com");
    }
}
