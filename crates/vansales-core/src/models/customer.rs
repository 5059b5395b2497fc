//! Customer model definition.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::CustomerId;

/// Order figure shown on the customer detail view.
///
/// The server sends either an amount or a text marker such as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderFigure {
    Amount(f64),
    Text(String),
}

impl fmt::Display for OrderFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderFigure::Amount(amount) => write!(f, "{amount}"),
            OrderFigure::Text(text) => f.write_str(text),
        }
    }
}

/// A customer as returned by the journey plan API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,

    /// Display name (searched)
    pub name: String,

    /// Customer code (searched)
    #[serde(default)]
    pub customer_code: Option<String>,

    /// Whether the visit for the current cycle has been completed
    #[serde(default, deserialize_with = "null_as_false")]
    pub visit_completed: bool,

    /// Sales recorded with the completed visit; `0` marks a zero-sales visit
    #[serde(default)]
    pub sales_amount: Option<f64>,

    #[serde(default)]
    pub visited: Option<bool>,

    #[serde(default)]
    pub zone: Option<String>,

    #[serde(default)]
    pub contact_no: Option<String>,

    #[serde(default)]
    pub stockist_name: Option<String>,

    #[serde(default)]
    pub town_name: Option<String>,

    #[serde(default)]
    pub dealer_category: Option<String>,

    #[serde(default)]
    pub shop_category: Option<String>,

    #[serde(default)]
    pub visit_frequency: Option<String>,

    #[serde(default)]
    pub last_order: Option<OrderFigure>,

    #[serde(default)]
    pub avg_order: Option<OrderFigure>,
}

impl Customer {
    /// Minimal customer with only the fields the classifier reads.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            customer_code: None,
            visit_completed: false,
            sales_amount: None,
            visited: None,
            zone: None,
            contact_no: None,
            stockist_name: None,
            town_name: None,
            dealer_category: None,
            shop_category: None,
            visit_frequency: None,
            last_order: None,
            avg_order: None,
        }
    }

    /// Case-insensitive substring match against the name or customer code.
    /// An empty query matches every customer.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .customer_code
                .as_deref()
                .is_some_and(|code| code.to_lowercase().contains(&needle))
    }

    /// Completed visit recorded with a sales amount of exactly zero.
    pub fn is_zero_sale(&self) -> bool {
        self.visit_completed && self.sales_amount == Some(0.0)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
