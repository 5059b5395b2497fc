//! Signed-in user returned by the login endpoint.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Identity of the employee using the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-side user id (number or string on the wire)
    pub id: UserId,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub role: Option<String>,

    /// Name used in journey plans' `primaryEmployee`
    #[serde(default)]
    pub primary_employee_name: Option<String>,
}

impl User {
    /// Upper-cased first letter of the username, `U` when the name is empty.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }

    /// Username for display, `User` when empty.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            "User"
        } else {
            &self.username
        }
    }

    /// Role for display, `Employee` when absent or empty.
    pub fn display_role(&self) -> &str {
        match self.role.as_deref() {
            Some(role) if !role.is_empty() => role,
            _ => "Employee",
        }
    }
}
