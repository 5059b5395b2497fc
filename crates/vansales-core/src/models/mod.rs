//! Data models for journey plans, customers and visits.
//!
//! These are the typed shapes of the journey plan API payloads. Each one is
//! parsed at the client boundary. List payloads are decoded element by
//! element through [`Record`]: a malformed element is skipped with a
//! warning unless it could be the signed-in employee's current plan. Display
//! implementations live in [`crate::display::models`].
//!
//! # Wire format
//!
//! Field names follow the API's camelCase (`validFrom`, `customerIds`,
//! `visitCompleted`, ...). Identifiers may arrive as numbers or strings and
//! are normalised by [`RecordId`]. Plan dates may arrive as plain dates or
//! as timestamps and are reduced to a UTC [`CalendarDay`].
//!
//! # Examples
//!
//! ```rust
//! use vansales_core::models::{CalendarDay, JourneyPlan, PlanStatus};
//!
//! let plan: JourneyPlan = serde_json::from_str(
//!     r#"{
//!         "primaryEmployee": "Asha Rao",
//!         "status": "Active",
//!         "validFrom": "2024-06-10T00:00:00.000Z",
//!         "validTo": "2024-06-12",
//!         "customerIds": [1, "2"]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(plan.status, PlanStatus::Active);
//! assert_eq!(plan.valid_from.as_str(), "2024-06-10");
//! assert!(plan.covers(&CalendarDay::parse("2024-06-11").unwrap()));
//! ```

pub mod customer;
pub mod date;
pub mod id;
pub mod options;
pub mod plan;
pub mod record;
pub mod tab;
pub mod user;
pub mod visit;

#[cfg(test)]
mod tests;

pub use customer::{Customer, OrderFigure};
pub use date::CalendarDay;
pub use id::{CustomerId, RecordId, UserId};
pub use options::JourneyOptions;
pub use plan::{JourneyPlan, PlanStatus};
pub use record::{keep_decoded, Record};
pub use tab::VisitTab;
pub use user::User;
pub use visit::{VisitOutcome, VisitUpdate, TAKE_ORDER_AMOUNT};
