//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.

use std::fmt;

use super::{or_na, NO_AVERAGE_ORDER, NOT_AVAILABLE};
use crate::models::{Customer, JourneyPlan, OrderFigure, PlanStatus, User};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JourneyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Plan: {} ({}, {} to {})",
            self.primary_employee, self.status, self.valid_from, self.valid_to
        )?;
        writeln!(f, "- Customers on plan: {}", self.customer_ids.len())
    }
}

impl Customer {
    /// Compact card used in journey lists.
    pub(crate) fn fmt_card(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Zone: {}", or_na(self.zone.as_deref()))?;
        writeln!(f, "- Customer Code: {}", or_na(self.customer_code.as_deref()))?;
        writeln!(f, "- Contact No.: {}", or_na(self.contact_no.as_deref()))?;
        writeln!(f)
    }
}

/// Detail view of a single customer.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Customer Code: {}", or_na(self.customer_code.as_deref()))?;
        writeln!(f, "- Stockist Name: {}", or_na(self.stockist_name.as_deref()))?;
        writeln!(f, "- Sector: {}", or_na(self.zone.as_deref()))?;
        writeln!(f, "- Town Name: {}", or_na(self.town_name.as_deref()))?;
        writeln!(f, "- Dealer Category: {}", or_na(self.dealer_category.as_deref()))?;
        writeln!(f, "- Shop Category: {}", or_na(self.shop_category.as_deref()))?;
        writeln!(f, "- Visit Frequency: {}", or_na(self.visit_frequency.as_deref()))?;
        writeln!(f, "- Customer Contact: {}", or_na(self.contact_no.as_deref()))?;
        writeln!(f)?;

        writeln!(f, "## Orders")?;
        writeln!(f)?;
        writeln!(f, "- Last Order: INR {}", figure_or(self.last_order.as_ref(), NOT_AVAILABLE))?;
        writeln!(
            f,
            "- Average Order: INR {}",
            figure_or(self.avg_order.as_ref(), NO_AVERAGE_ORDER)
        )?;

        writeln!(f)?;
        if self.visit_completed {
            match self.sales_amount {
                Some(amount) => writeln!(f, "Visit completed (sales: {amount})"),
                None => writeln!(f, "Visit completed"),
            }
        } else {
            writeln!(f, "Visit not completed yet")
        }
    }
}

/// The figure, or `fallback` when it is missing, empty or zero.
fn figure_or(figure: Option<&OrderFigure>, fallback: &str) -> String {
    match figure {
        Some(OrderFigure::Text(text)) if text.is_empty() => fallback.to_string(),
        Some(OrderFigure::Amount(amount)) if *amount == 0.0 => fallback.to_string(),
        Some(figure) => figure.to_string(),
        None => fallback.to_string(),
    }
}

/// Profile view of the signed-in user.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# [{}] {}", self.initial(), self.display_name())?;
        writeln!(f)?;
        writeln!(f, "- Role: {}", self.display_role())?;
        writeln!(
            f,
            "- Employee: {}",
            or_na(self.primary_employee_name.as_deref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarDay, UserId};

    #[test]
    fn test_customer_detail_placeholders() {
        let mut customer = Customer::new("42", "Sharma Traders");
        customer.zone = Some(String::new());
        let output = customer.to_string();

        assert!(output.contains("# Sharma Traders"));
        assert!(output.contains("- Customer Code: N/A"));
        assert!(output.contains("- Sector: N/A"));
        assert!(output.contains("- Last Order: INR N/A"));
        assert!(output.contains("- Average Order: INR 0.00"));
        assert!(output.contains("Visit not completed yet"));
    }

    #[test]
    fn test_zero_order_figures_use_placeholders() {
        let mut customer = Customer::new("42", "Sharma Traders");
        customer.last_order = Some(OrderFigure::Amount(0.0));
        customer.avg_order = Some(OrderFigure::Amount(0.0));
        let output = customer.to_string();

        assert!(output.contains("- Last Order: INR N/A"));
        assert!(output.contains("- Average Order: INR 0.00"));
    }

    #[test]
    fn test_customer_detail_fields() {
        let mut customer = Customer::new("42", "Sharma Traders");
        customer.customer_code = Some("WBD001".to_string());
        customer.town_name = Some("Howrah".to_string());
        customer.last_order = Some(OrderFigure::Amount(1250.5));
        customer.avg_order = Some(OrderFigure::Text("980.00".to_string()));
        customer.visit_completed = true;
        customer.sales_amount = Some(500.0);
        let output = customer.to_string();

        assert!(output.contains("- Customer Code: WBD001"));
        assert!(output.contains("- Town Name: Howrah"));
        assert!(output.contains("- Last Order: INR 1250.5"));
        assert!(output.contains("- Average Order: INR 980.00"));
        assert!(output.contains("Visit completed (sales: 500)"));
    }

    #[test]
    fn test_plan_display() {
        let plan = JourneyPlan {
            primary_employee: "Ravi Kumar".to_string(),
            status: PlanStatus::Active,
            valid_from: CalendarDay::parse("2024-03-01").unwrap(),
            valid_to: CalendarDay::parse("2024-03-31").unwrap(),
            customer_ids: vec!["1".into(), "2".into()],
        };
        let output = plan.to_string();
        assert!(output.contains("Ravi Kumar (Active, 2024-03-01 to 2024-03-31)"));
        assert!(output.contains("Customers on plan: 2"));
    }

    #[test]
    fn test_profile_fallbacks() {
        let user = User {
            id: UserId::from(1u64),
            username: String::new(),
            role: None,
            primary_employee_name: None,
        };
        let output = user.to_string();
        assert!(output.contains("# [U] User"));
        assert!(output.contains("- Role: Employee"));
        assert!(output.contains("- Employee: N/A"));
    }
}
