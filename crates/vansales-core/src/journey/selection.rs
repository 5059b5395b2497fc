//! Current plan selection and plan scoping.

use log::warn;
use serde::Deserialize;

use crate::{
    error::{Result, VanSalesError},
    models::{CalendarDay, Customer, JourneyPlan, PlanStatus, Record},
};

/// The first plan, in server order, assigned to `employee`, active, and
/// covering `today`.
///
/// A user without an employee name has no plan.
pub fn select_current_plan<'a>(
    plans: &'a [JourneyPlan],
    employee: Option<&str>,
    today: &CalendarDay,
) -> Option<&'a JourneyPlan> {
    let employee = employee?;
    plans.iter().find(|plan| is_current(plan, employee, today))
}

fn is_current(plan: &JourneyPlan, employee: &str, today: &CalendarDay) -> bool {
    plan.primary_employee == employee && plan.status.is_active() && plan.covers(today)
}

/// The fields of a plan that decide whether it is a candidate, read from a
/// record that failed to decode as a whole.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanHeader {
    primary_employee: Option<String>,
    status: Option<String>,
}

fn is_candidate(raw: &serde_json::Value, employee: &str) -> bool {
    PlanHeader::deserialize(raw).is_ok_and(|header| {
        header.primary_employee.as_deref() == Some(employee)
            && header.status.as_deref().map(PlanStatus::from_wire) == Some(PlanStatus::Active)
    })
}

/// Plans from a list payload that can take part in selection, in server
/// order.
///
/// A malformed record is skipped with a warning, unless it is an `Active`
/// plan of `employee` reached before any plan was selected. Its decode
/// error is then returned. Records after the selected plan are never
/// inspected beyond their decode result.
///
/// # Errors
///
/// Returns `VanSalesError::Decode` for a malformed candidate plan.
pub fn usable_plans(
    records: Vec<Record<JourneyPlan>>,
    employee: Option<&str>,
    today: &CalendarDay,
) -> Result<Vec<JourneyPlan>> {
    let mut plans = Vec::with_capacity(records.len());
    let mut selected = false;

    for (index, record) in records.into_iter().enumerate() {
        match record {
            Record::Decoded(plan) => {
                selected |= employee.is_some_and(|name| is_current(&plan, name, today));
                plans.push(plan);
            }
            Record::Malformed { raw, error } => {
                if !selected && employee.is_some_and(|name| is_candidate(&raw, name)) {
                    return Err(VanSalesError::Decode {
                        what: "journey plans".to_string(),
                        source: error,
                    });
                }
                warn!("Skipping malformed journey plan at index {index}: {error}");
            }
        }
    }

    Ok(plans)
}

/// Customers referenced by the plan, in the order of `customers`.
pub fn scope_customers(customers: Vec<Customer>, plan: &JourneyPlan) -> Vec<Customer> {
    customers
        .into_iter()
        .filter(|customer| plan.includes(&customer.id))
        .collect()
}
