//! Visit status classification.
//!
//! Decides which tab a plan-scoped customer is listed under. The rules are
//! evaluated per customer in this order:
//!
//! 1. The customer must be referenced by the current plan and must match
//!    the search query (name or customer code, case-insensitive).
//! 2. On the plan's first day only `PENDING` (visit not completed) and
//!    `VISITED` (visit completed) list anyone.
//! 3. Otherwise `PENDING` lists open visits while the plan is running,
//!    `MISSED` lists open visits once it has expired, `VISITED` lists every
//!    completed visit and `ZERO SALES` the completed visits with a sales
//!    amount of exactly zero.
//! 4. `UNPLANNED` and unrecognised tabs follow [`ClassifyPolicy`].

use crate::models::{CalendarDay, Customer, JourneyPlan, VisitTab};

/// What an unrecognised tab lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTabPolicy {
    /// Every customer passing the search is listed.
    #[default]
    DefaultInclude,
    /// Nothing is listed.
    Exclude,
}

/// What the `UNPLANNED` tab lists.
///
/// No data source populates unplanned visits yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum UnplannedPolicy {
    #[default]
    AlwaysEmpty,
}

/// Policies for the tabs whose behavior is not derived from visit data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyPolicy {
    pub unknown_tab: UnknownTabPolicy,
    pub unplanned: UnplannedPolicy,
}

/// Position of `today` relative to a plan's validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanWindow {
    /// `today` is the plan's first day
    pub starting_today: bool,
    /// `today` is after the plan's last day
    pub expired: bool,
}

impl PlanWindow {
    pub fn new(plan: &JourneyPlan, today: &CalendarDay) -> Self {
        Self {
            starting_today: today == &plan.valid_from,
            expired: today > &plan.valid_to,
        }
    }
}

/// Classifies customers into visit tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitClassifier {
    policy: ClassifyPolicy,
}

impl VisitClassifier {
    pub fn new(policy: ClassifyPolicy) -> Self {
        Self { policy }
    }

    /// Customers listed under `tab`, in input order.
    ///
    /// Without a current plan nothing is listed. Customers the plan does
    /// not reference are never listed, even if the caller passes them in.
    pub fn classify<'a>(
        &self,
        customers: &'a [Customer],
        plan: Option<&JourneyPlan>,
        today: &CalendarDay,
        tab: &VisitTab,
        query: &str,
    ) -> Vec<&'a Customer> {
        let Some(plan) = plan else {
            return Vec::new();
        };
        let window = PlanWindow::new(plan, today);

        customers
            .iter()
            .filter(|customer| plan.includes(&customer.id))
            .filter(|customer| customer.matches_search(query))
            .filter(|customer| self.qualifies(customer, window, tab))
            .collect()
    }

    /// Status rule for a single customer, ignoring plan scope and search.
    pub fn qualifies(&self, customer: &Customer, window: PlanWindow, tab: &VisitTab) -> bool {
        if window.starting_today {
            return match tab {
                VisitTab::Pending => !customer.visit_completed,
                VisitTab::Visited => customer.visit_completed,
                _ => false,
            };
        }

        match tab {
            VisitTab::Pending => !customer.visit_completed && !window.expired,
            VisitTab::Visited => customer.visit_completed,
            VisitTab::Missed => !customer.visit_completed && window.expired,
            VisitTab::ZeroSales => customer.is_zero_sale(),
            VisitTab::Unplanned => match self.policy.unplanned {
                UnplannedPolicy::AlwaysEmpty => false,
            },
            VisitTab::Unrecognized(_) => match self.policy.unknown_tab {
                UnknownTabPolicy::DefaultInclude => true,
                UnknownTabPolicy::Exclude => false,
            },
        }
    }
}

/// Classifies with the default policy.
pub fn classify<'a>(
    customers: &'a [Customer],
    plan: Option<&JourneyPlan>,
    today: &CalendarDay,
    tab: &VisitTab,
    query: &str,
) -> Vec<&'a Customer> {
    VisitClassifier::default().classify(customers, plan, today, tab, query)
}
