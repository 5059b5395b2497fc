//! Journey plan selection and visit classification.
//!
//! This module holds all client-side decision logic of the journey list:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ plans +      │   │  selection   │   │  classify    │   │ JourneyView  │
//! │ customers    │──▶│ (current     │──▶│ (tab rules + │──▶│ (tab, counts,│
//! │ (remote)     │   │  plan, scope)│   │  search)     │   │  customers)  │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! - [`selection`]: picks the employee's current plan and scopes customers
//! - [`classify`]: the tab rules and their policies
//! - [`view`]: snapshots and classified views with per-tab counts
//! - [`board`]: state container that orders overlapping refreshes
//!
//! Everything here is pure and synchronous; network access lives in
//! [`crate::client`].
//!
//! # Examples
//!
//! ```rust
//! use vansales_core::journey::classify;
//! use vansales_core::models::{CalendarDay, Customer, JourneyPlan, PlanStatus, VisitTab};
//!
//! let plan = JourneyPlan {
//!     primary_employee: "Asha Rao".to_string(),
//!     status: PlanStatus::Active,
//!     valid_from: CalendarDay::parse("2024-06-10").unwrap(),
//!     valid_to: CalendarDay::parse("2024-06-12").unwrap(),
//!     customer_ids: vec!["1".into(), "2".into()],
//! };
//! let mut visited = Customer::new("2", "Bose Stores");
//! visited.visit_completed = true;
//! let customers = vec![Customer::new("1", "Ananda Traders"), visited];
//!
//! let today = CalendarDay::parse("2024-06-11").unwrap();
//! let pending = classify(&customers, Some(&plan), &today, &VisitTab::Pending, "");
//! assert_eq!(pending.len(), 1);
//! assert_eq!(pending[0].name, "Ananda Traders");
//! ```

pub mod board;
pub mod classify;
pub mod selection;
pub mod view;


pub use board::{JourneyBoard, RefreshTicket};
pub use classify::{
    classify, ClassifyPolicy, PlanWindow, UnknownTabPolicy, UnplannedPolicy, VisitClassifier,
};
pub use selection::{scope_customers, select_current_plan, usable_plans};
pub use view::{JourneySnapshot, JourneyView, TabCounts};
