//! Marketplace accounts and authentication payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub join_date: Option<NaiveDateTime>,
    pub profile_image: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Drop administrators from a user listing, as the moderation view does
pub fn without_admins(users: Vec<User>) -> Vec<User> {
    users.into_iter().filter(|u| !u.is_admin()).collect()
}

/// Case-insensitive match on name, email or phone
pub fn search_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return users.iter().collect();
    }
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&term)
                || u.email.to_lowercase().contains(&term)
                || u.phone.contains(&term)
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Partial profile update; unset fields are left untouched by the backend
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
