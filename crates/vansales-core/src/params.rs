//! Parameter structures for van sales operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation is
//! available behind the `schema` feature for the MCP server.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers define their own wrapper structs with clap or schemars
//! derives and convert into these with `From`:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct VisitArgs {
//!     pub id: String,
//!     #[arg(long)]
//!     pub order: bool,
//! }
//!
//! impl From<VisitArgs> for CompleteVisit {
//!     fn from(args: VisitArgs) -> Self {
//!         CompleteVisit { id: args.id, take_order: args.order }
//!     }
//! }
//!
//! // In the MCP server
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct CompleteVisitRequest(vansales_core::params::CompleteVisit);
//! ```

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VanSalesError},
    models::{CustomerId, VisitOutcome, VisitTab},
};

/// Credentials for `POST /api/journey-plans/login`.
///
/// Serialized as the request body, so field names match the wire format.
#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SignIn {
    /// Login name of the employee
    pub username: String,
    /// Password for the account
    pub password: String,
}

impl SignIn {
    /// Rejects empty credentials before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `VanSalesError::InvalidInput` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(VanSalesError::invalid_input("username").with_reason("must not be empty"));
        }
        if self.password.is_empty() {
            return Err(VanSalesError::invalid_input("password").with_reason("must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for SignIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignIn")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parameters for listing one tab of today's journey.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListJourney {
    /// Tab to list: PENDING (default), VISITED, MISSED, ZERO SALES or
    /// UNPLANNED
    #[serde(default)]
    pub tab: Option<String>,
    /// Case-insensitive filter on customer name or customer code
    #[serde(default)]
    pub search: Option<String>,
}

impl ListJourney {
    /// The requested tab, PENDING when none was given.
    pub fn tab(&self) -> VisitTab {
        self.tab
            .as_deref()
            .map(VisitTab::from_label)
            .unwrap_or_default()
    }

    /// The search query, empty when none was given.
    pub fn query(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

/// Parameters for operations on a single customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CustomerRef {
    /// Customer id as shown in the journey list
    pub id: String,
}

impl CustomerRef {
    pub fn customer_id(&self) -> Result<CustomerId> {
        parse_customer_id(&self.id)
    }
}

/// Parameters for completing a visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompleteVisit {
    /// Customer id as shown in the journey list
    pub id: String,
    /// Whether an order was taken. Orders are booked at a fixed amount;
    /// without one the visit is recorded with zero sales.
    #[serde(default)]
    pub take_order: bool,
}

impl CompleteVisit {
    pub fn customer_id(&self) -> Result<CustomerId> {
        parse_customer_id(&self.id)
    }

    pub fn outcome(&self) -> VisitOutcome {
        VisitOutcome::from_order_taken(self.take_order)
    }
}

fn parse_customer_id(raw: &str) -> Result<CustomerId> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(VanSalesError::invalid_input("id").with_reason("Customer ID is required"));
    }
    Ok(CustomerId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_validate() {
        let ok = SignIn {
            username: "vansales_test01".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_user = SignIn {
            username: "  ".to_string(),
            password: "password123".to_string(),
        };
        match no_user.validate().unwrap_err() {
            VanSalesError::InvalidInput { field, .. } => assert_eq!(field, "username"),
            other => panic!("Expected InvalidInput error, got {other}"),
        }

        let no_password = SignIn {
            username: "vansales_test01".to_string(),
            password: String::new(),
        };
        match no_password.validate().unwrap_err() {
            VanSalesError::InvalidInput { field, .. } => assert_eq!(field, "password"),
            other => panic!("Expected InvalidInput error, got {other}"),
        }
    }

    #[test]
    fn test_sign_in_debug_hides_password() {
        let params = SignIn {
            username: "vansales_test01".to_string(),
            password: "password123".to_string(),
        };
        let debug = format!("{params:?}");
        assert!(debug.contains("vansales_test01"));
        assert!(!debug.contains("password123"));
    }

    #[test]
    fn test_sign_in_wire_body() {
        let params = SignIn {
            username: "u".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"username": "u", "password": "p"})
        );
    }

    #[test]
    fn test_list_journey_defaults() {
        let params = ListJourney::default();
        assert_eq!(params.tab(), VisitTab::Pending);
        assert_eq!(params.query(), "");

        let params = ListJourney {
            tab: Some("zero sales".to_string()),
            search: Some("acme".to_string()),
        };
        assert_eq!(params.tab(), VisitTab::ZeroSales);
        assert_eq!(params.query(), "acme");
    }

    #[test]
    fn test_customer_id_parsing() {
        let params = CustomerRef {
            id: " 42 ".to_string(),
        };
        assert_eq!(params.customer_id().unwrap().as_str(), "42");

        let params = CustomerRef { id: String::new() };
        assert!(matches!(
            params.customer_id(),
            Err(VanSalesError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_complete_visit_outcome() {
        let params: CompleteVisit = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(params.outcome(), VisitOutcome::NoSale);

        let params: CompleteVisit =
            serde_json::from_str(r#"{"id": "7", "take_order": true}"#).unwrap();
        assert_eq!(params.outcome(), VisitOutcome::Sale);
    }
}
