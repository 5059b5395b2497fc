//! Visit completion requests.

use serde::{Deserialize, Serialize};

/// Sales amount recorded when an order is taken.
///
/// Placeholder until the client captures real order totals; every order
/// is booked at this fixed amount.
pub const TAKE_ORDER_AMOUNT: f64 = 500.0;

/// Outcome chosen when completing a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitOutcome {
    /// An order was taken during the visit
    Sale,
    /// The visit ended without an order
    NoSale,
}

impl VisitOutcome {
    pub fn from_order_taken(order_taken: bool) -> Self {
        if order_taken {
            VisitOutcome::Sale
        } else {
            VisitOutcome::NoSale
        }
    }

    /// Amount sent to the server for this outcome.
    pub fn sales_amount(self) -> f64 {
        match self {
            VisitOutcome::Sale => TAKE_ORDER_AMOUNT,
            VisitOutcome::NoSale => 0.0,
        }
    }

    /// Confirmation shown once the server accepted the update.
    pub fn confirmation(self) -> &'static str {
        match self {
            VisitOutcome::Sale => "Order placed and visit completed!",
            VisitOutcome::NoSale => "Visit completed",
        }
    }
}

/// Body of `PATCH /api/journey-plans/customers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitUpdate {
    pub visited: bool,
    pub sales_amount: f64,
    pub visit_completed: bool,
}

impl From<VisitOutcome> for VisitUpdate {
    /// A completion always marks the visit as visited and completed,
    /// whatever the sale outcome.
    fn from(outcome: VisitOutcome) -> Self {
        Self {
            visited: true,
            sales_amount: outcome.sales_amount(),
            visit_completed: true,
        }
    }
}
