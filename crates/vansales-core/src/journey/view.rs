//! Classified snapshots of a day's journey.

use serde::Serialize;

use super::{scope_customers, select_current_plan, VisitClassifier};
use crate::models::{CalendarDay, Customer, JourneyPlan, VisitTab};

/// Result of one journey load: the current plan, if any, and the customers
/// it references.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JourneySnapshot {
    pub plan: Option<JourneyPlan>,
    pub customers: Vec<Customer>,
}

impl JourneySnapshot {
    /// Selects the employee's current plan and scopes the customer list to
    /// it. Without a matching plan the snapshot is empty.
    pub fn from_remote(
        plans: &[JourneyPlan],
        customers: Vec<Customer>,
        employee: Option<&str>,
        today: &CalendarDay,
    ) -> Self {
        match select_current_plan(plans, employee, today) {
            Some(plan) => Self {
                customers: scope_customers(customers, plan),
                plan: Some(plan.clone()),
            },
            None => Self::default(),
        }
    }

    /// Classifies the snapshot for one tab and search query.
    pub fn view(
        &self,
        classifier: &VisitClassifier,
        today: &CalendarDay,
        tab: &VisitTab,
        query: &str,
    ) -> JourneyView {
        let customers = classifier
            .classify(&self.customers, self.plan.as_ref(), today, tab, query)
            .into_iter()
            .cloned()
            .collect();

        JourneyView {
            plan: self.plan.clone(),
            today: today.clone(),
            tab: tab.clone(),
            query: query.to_string(),
            counts: TabCounts::compute(classifier, self, today, query),
            customers,
        }
    }
}

/// Number of customers listed under each of the five tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabCounts(pub Vec<(VisitTab, usize)>);

impl TabCounts {
    pub fn compute(
        classifier: &VisitClassifier,
        snapshot: &JourneySnapshot,
        today: &CalendarDay,
        query: &str,
    ) -> Self {
        let counts = VisitTab::ALL
            .into_iter()
            .map(|tab| {
                let count = classifier
                    .classify(&snapshot.customers, snapshot.plan.as_ref(), today, &tab, query)
                    .len();
                (tab, count)
            })
            .collect();
        Self(counts)
    }

    pub fn get(&self, tab: &VisitTab) -> usize {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == tab)
            .map_or(0, |(_, count)| *count)
    }
}

/// One tab of the journey list, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyView {
    pub plan: Option<JourneyPlan>,
    pub today: CalendarDay,
    pub tab: VisitTab,
    pub query: String,
    pub counts: TabCounts,
    pub customers: Vec<Customer>,
}
