#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::models::{
        keep_decoded, CalendarDay, Customer, CustomerId, JourneyPlan, OrderFigure, PlanStatus,
        Record, User, VisitOutcome, VisitTab, VisitUpdate, TAKE_ORDER_AMOUNT,
    };

    fn day(value: &str) -> CalendarDay {
        CalendarDay::parse(value).unwrap()
    }

    #[test]
    fn test_calendar_day_from_plain_date() {
        assert_eq!(day("2024-06-10").as_str(), "2024-06-10");
        assert_eq!(day("  2024-06-10 ").as_str(), "2024-06-10");
    }

    #[test]
    fn test_calendar_day_from_utc_timestamp() {
        assert_eq!(day("2024-06-10T00:00:00.000Z").as_str(), "2024-06-10");
        assert_eq!(day("2024-06-10T23:59:59Z").as_str(), "2024-06-10");
    }

    #[test]
    fn test_calendar_day_converts_offsets_to_utc() {
        // 00:30 in India is still the previous day in UTC
        assert_eq!(day("2024-06-10T00:30:00+05:30").as_str(), "2024-06-09");
        assert_eq!(day("2024-06-10T22:00:00-03:00").as_str(), "2024-06-11");
    }

    #[test]
    fn test_calendar_day_rejects_garbage() {
        for value in ["", "tomorrow", "2024-13-01", "10/06/2024", "2024-06-10Tnoon"] {
            let err = CalendarDay::parse(value).unwrap_err();
            assert!(
                err.to_string().contains("Invalid date"),
                "unexpected error for {value:?}: {err}"
            );
        }
    }

    #[test]
    fn test_calendar_day_ordering_matches_key_text() {
        assert!(day("2024-06-09") < day("2024-06-10"));
        assert!(day("2024-06-30") < day("2024-07-01"));
        assert!(day("2023-12-31") < day("2024-01-01"));
        assert_eq!(day("2024-06-10"), day("2024-06-10T12:00:00Z"));
    }

    #[test]
    fn test_calendar_day_from_timestamp_and_date() {
        let ts = Timestamp::from_second(1_718_064_000).unwrap(); // 2024-06-11 00:00:00 UTC
        assert_eq!(CalendarDay::from_timestamp(ts).as_str(), "2024-06-11");
        assert_eq!(CalendarDay::from_date(date(2024, 1, 5)).as_str(), "2024-01-05");
    }

    #[test]
    fn test_journey_plan_deserialization() {
        let plan: JourneyPlan = serde_json::from_str(
            r#"{
                "_id": "665f",
                "primaryEmployee": "Asha Rao",
                "status": "Active",
                "validFrom": "2024-06-10T00:00:00.000Z",
                "validTo": "2024-06-12T00:00:00.000Z",
                "customerIds": [1, "2", 3.0]
            }"#,
        )
        .unwrap();

        assert_eq!(plan.primary_employee, "Asha Rao");
        assert_eq!(plan.status, PlanStatus::Active);
        assert_eq!(plan.valid_from.as_str(), "2024-06-10");
        assert_eq!(plan.valid_to.as_str(), "2024-06-12");
        assert_eq!(
            plan.customer_ids,
            vec![CustomerId::from("1"), CustomerId::from("2"), CustomerId::from("3")]
        );
    }

    #[test]
    fn test_journey_plan_missing_customer_ids_is_empty() {
        let plan: JourneyPlan = serde_json::from_str(
            r#"{"primaryEmployee": "A", "status": "Active",
                "validFrom": "2024-06-10", "validTo": "2024-06-12", "customerIds": null}"#,
        )
        .unwrap();
        assert!(plan.customer_ids.is_empty());

        let plan: JourneyPlan = serde_json::from_str(
            r#"{"primaryEmployee": "A", "status": "Active",
                "validFrom": "2024-06-10", "validTo": "2024-06-12"}"#,
        )
        .unwrap();
        assert!(plan.customer_ids.is_empty());
    }

    #[test]
    fn test_journey_plan_rejects_malformed_dates() {
        let result: Result<JourneyPlan, _> = serde_json::from_str(
            r#"{"primaryEmployee": "A", "status": "Active",
                "validFrom": "soon", "validTo": "2024-06-12"}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid date 'soon'"));
    }

    #[test]
    fn test_journey_plan_covers_is_inclusive() {
        let plan = JourneyPlan {
            primary_employee: "A".to_string(),
            status: PlanStatus::Active,
            valid_from: day("2024-06-10"),
            valid_to: day("2024-06-12"),
            customer_ids: vec![],
        };

        assert!(!plan.covers(&day("2024-06-09")));
        assert!(plan.covers(&day("2024-06-10")));
        assert!(plan.covers(&day("2024-06-12")));
        assert!(!plan.covers(&day("2024-06-13")));
    }

    #[test]
    fn test_plan_status_is_case_sensitive() {
        assert_eq!(PlanStatus::from_wire("Active"), PlanStatus::Active);
        assert_eq!(PlanStatus::from_wire("Inactive"), PlanStatus::Inactive);
        assert_eq!(
            PlanStatus::from_wire("active"),
            PlanStatus::Other("active".to_string())
        );
        assert!(!PlanStatus::from_wire("ACTIVE").is_active());
        assert_eq!(PlanStatus::Other("Draft".to_string()).as_str(), "Draft");
    }

    #[test]
    fn test_plan_without_status_is_not_decoded() {
        let result = serde_json::from_str::<JourneyPlan>(
            r#"{"primaryEmployee": "Asha Rao", "validFrom": "2024-06-10",
                "validTo": "2024-06-12"}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("status"), "got {err}");
    }

    #[test]
    fn test_customer_deserialization_defaults() {
        let customer: Customer = serde_json::from_str(r#"{"id": 7, "name": "Shree Traders"}"#).unwrap();

        assert_eq!(customer.id, CustomerId::from("7"));
        assert!(!customer.visit_completed);
        assert_eq!(customer.sales_amount, None);
        assert_eq!(customer.customer_code, None);
    }

    #[test]
    fn test_customer_deserialization_full() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": "c-9",
                "name": "Shree Traders",
                "customerCode": "WBD001",
                "visitCompleted": null,
                "salesAmount": 0,
                "zone": "B Zone",
                "contactNo": "9800000000",
                "stockistName": "Kolkata Stockist",
                "townName": "Howrah",
                "dealerCategory": "Gold",
                "shopCategory": "Retail",
                "visitFrequency": "Weekly",
                "lastOrder": "N/A",
                "avgOrder": 1250.5
            }"#,
        )
        .unwrap();

        assert!(!customer.visit_completed);
        assert_eq!(customer.sales_amount, Some(0.0));
        assert_eq!(customer.last_order, Some(OrderFigure::Text("N/A".to_string())));
        assert_eq!(customer.avg_order, Some(OrderFigure::Amount(1250.5)));
        assert_eq!(customer.town_name.as_deref(), Some("Howrah"));
    }

    #[test]
    fn test_customer_rejects_non_boolean_completion() {
        let result: Result<Customer, _> =
            serde_json::from_str(r#"{"id": 1, "name": "A", "visitCompleted": "yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_customer_search_matches_name_or_code() {
        let mut customer = Customer::new("1", "Shree Traders");
        customer.customer_code = Some("WBD00022793".to_string());

        assert!(customer.matches_search(""));
        assert!(customer.matches_search("shree"));
        assert!(customer.matches_search("TRADERS"));
        assert!(customer.matches_search("wbd000"));
        assert!(!customer.matches_search("kolkata"));

        customer.customer_code = None;
        assert!(!customer.matches_search("wbd"));
    }

    #[test]
    fn test_customer_zero_sale() {
        let mut customer = Customer::new("1", "A");
        customer.sales_amount = Some(0.0);
        assert!(!customer.is_zero_sale());

        customer.visit_completed = true;
        assert!(customer.is_zero_sale());

        customer.sales_amount = None;
        assert!(!customer.is_zero_sale());

        customer.sales_amount = Some(500.0);
        assert!(!customer.is_zero_sale());
    }

    #[test]
    fn test_visit_tab_labels() {
        assert_eq!(VisitTab::from_label("pending"), VisitTab::Pending);
        assert_eq!(VisitTab::from_label("VISITED"), VisitTab::Visited);
        assert_eq!(VisitTab::from_label("zero-sales"), VisitTab::ZeroSales);
        assert_eq!(VisitTab::from_label("zero_sales"), VisitTab::ZeroSales);
        assert_eq!(VisitTab::from_label("ZERO SALES"), VisitTab::ZeroSales);
        assert_eq!(VisitTab::from_label("Unplanned"), VisitTab::Unplanned);
        assert_eq!(
            VisitTab::from_label("ALL"),
            VisitTab::Unrecognized("ALL".to_string())
        );
        assert_eq!(VisitTab::ZeroSales.to_string(), "ZERO SALES");
        assert_eq!(VisitTab::ALL.len(), 5);
    }

    #[test]
    fn test_visit_update_from_outcome() {
        let sale = VisitUpdate::from(VisitOutcome::Sale);
        assert!(sale.visited);
        assert!(sale.visit_completed);
        assert_eq!(sale.sales_amount, TAKE_ORDER_AMOUNT);

        let no_sale = VisitUpdate::from(VisitOutcome::NoSale);
        assert!(no_sale.visit_completed);
        assert_eq!(no_sale.sales_amount, 0.0);

        let body = serde_json::to_value(&sale).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"visited": true, "salesAmount": 500.0, "visitCompleted": true})
        );
    }

    #[test]
    fn test_visit_outcome_confirmation() {
        assert_eq!(
            VisitOutcome::from_order_taken(true).confirmation(),
            "Order placed and visit completed!"
        );
        assert_eq!(
            VisitOutcome::from_order_taken(false).confirmation(),
            "Visit completed"
        );
    }

    #[test]
    fn test_user_display_fallbacks() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "vansales_test01", "role": "Sales Rep",
                "primaryEmployeeName": "Asha Rao"}"#,
        )
        .unwrap();
        assert_eq!(user.initial(), 'V');
        assert_eq!(user.display_name(), "vansales_test01");
        assert_eq!(user.display_role(), "Sales Rep");

        let anonymous: User = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
        assert_eq!(anonymous.initial(), 'U');
        assert_eq!(anonymous.display_name(), "User");
        assert_eq!(anonymous.display_role(), "Employee");
        assert_eq!(anonymous.primary_employee_name, None);
    }

    #[test]
    fn test_customer_list_skips_malformed_elements() {
        let records: Vec<Record<Customer>> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Acme Mart"},
                {"id": 99},
                "not a customer",
                {"id": "2", "name": "Zen Stores"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 4);
        assert!(matches!(&records[1], Record::Malformed { raw, .. } if raw["id"] == 99));

        let customers = keep_decoded(records, "customer");
        let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Mart", "Zen Stores"]);
    }
}
