//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Customer, User, VisitOutcome};

/// Wrapper type for displaying a completed visit.
///
/// Leads with the confirmation for the outcome, followed by the customer as
/// the server now reports it.
pub struct VisitResult {
    pub customer: Customer,
    pub outcome: VisitOutcome,
}

impl VisitResult {
    pub fn new(customer: Customer, outcome: VisitOutcome) -> Self {
        Self { customer, outcome }
    }
}

impl fmt::Display for VisitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.outcome.confirmation())?;
        writeln!(f)?;
        write!(f, "{}", self.customer)
    }
}

/// Wrapper type for displaying the signed-in user's profile.
pub struct Profile<'a>(pub &'a User);

impl fmt::Display for Profile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a sign-out request.
pub enum SignOutNotice {
    /// The session of this user was closed and its journey data dropped
    SignedOut(User),
    NotSignedIn,
}

impl fmt::Display for SignOutNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignOutNotice::SignedOut(user) => {
                writeln!(f, "Signed out {}", user.display_name())
            }
            SignOutNotice::NotSignedIn => writeln!(f, "Not signed in, nothing to sign out"),
        }
    }
}
