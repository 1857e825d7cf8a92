//! Command payload DTOs
//!
//! Filter values arrive as plain strings straight from the UI selects;
//! `"all"` (or empty) means "do not filter on this dimension".

use serde::{Deserialize, Serialize};

fn all() -> String {
    "all".to_string()
}

/// Kitchen board filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderFilterDto {
    #[serde(default = "all")]
    pub status: String,
    #[serde(default = "all")]
    pub kind: String,
}

impl Default for OrderFilterDto {
    fn default() -> Self {
        Self {
            status: all(),
            kind: all(),
        }
    }
}

/// User listing filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFilterDto {
    #[serde(default = "all")]
    pub status: String,
    #[serde(default = "all")]
    pub profile: String,
    /// Free text matched against name and e-mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for UserFilterDto {
    fn default() -> Self {
        Self {
            status: all(),
            profile: all(),
            search: None,
        }
    }
}

/// Registration form as typed by the user
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}
