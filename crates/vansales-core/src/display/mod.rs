//! Markdown display for journeys, customers and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! operation outcomes get newtype wrappers so the same data can read
//! differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Customer, ...) │───▶│ Journey Views   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: [`CustomerList`], the journey list cards
//! - [`journey`]: Display for [`JourneyView`](crate::journey::JourneyView)
//!   and [`TabCounts`](crate::journey::TabCounts)
//! - [`results`]: [`VisitResult`], [`Profile`] and [`SignOutNotice`]
//!
//! Missing text fields render as `N/A` everywhere; a missing average order
//! renders as `0.00`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use vansales_core::{
//!     display::{SignOutNotice, VisitResult},
//!     models::{Customer, VisitOutcome},
//! };
//!
//! let customer = Customer::new("42", "Sharma Traders");
//! let result = VisitResult::new(customer, VisitOutcome::Sale);
//! assert!(result.to_string().contains("Order placed and visit completed!"));
//!
//! let notice = SignOutNotice::NotSignedIn;
//! assert!(notice.to_string().starts_with("Not signed in"));
//! ```

pub mod collections;
pub mod journey;
pub mod models;
pub mod results;

pub use collections::CustomerList;
pub use results::{Profile, SignOutNotice, VisitResult};

/// Placeholder for a missing or empty text field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown in place of a missing average order figure.
pub const NO_AVERAGE_ORDER: &str = "0.00";

/// The value, or `N/A` when it is missing or empty.
pub(crate) fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}
