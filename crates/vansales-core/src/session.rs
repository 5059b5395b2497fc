//! In-memory session for the signed-in user.
//!
//! A [`Session`] exists only between a successful sign-in and sign-out.
//! Nothing is persisted: dropping or signing out of the session is the
//! whole teardown.

use log::info;

use crate::models::User;

/// Authenticated state for one signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
}

impl Session {
    pub(crate) fn new(user: User) -> Self {
        Self { user }
    }

    /// The signed-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Name matched against a plan's `primaryEmployee`.
    pub fn employee_name(&self) -> Option<&str> {
        self.user
            .primary_employee_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Ends the session and hands back the user it belonged to.
    pub fn sign_out(self) -> User {
        info!("Signed out {}", self.user.display_name());
        self.user
    }
}
