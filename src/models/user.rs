use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validators::validate_phone;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Citizen,
    ServiceProvider,
    Administrator,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Citizen
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Session blob persisted client-side and read back before each authorized call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(custom(function = "validate_phone_field"))]
    pub phone: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn validate_phone_field(phone: &str) -> Result<(), validator::ValidationError> {
    if validate_phone(phone) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_phone"))
    }
}
