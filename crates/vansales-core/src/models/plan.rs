//! Journey plan model definition.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{CalendarDay, CustomerId};

/// A time-boxed assignment of customers to one employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPlan {
    /// Employee name the plan is assigned to
    pub primary_employee: String,

    /// Plan state as reported by the server
    pub status: PlanStatus,

    /// First day the plan applies (inclusive)
    pub valid_from: CalendarDay,

    /// Last day the plan applies (inclusive)
    pub valid_to: CalendarDay,

    /// Customers in scope for this plan
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_ids: Vec<CustomerId>,
}

impl JourneyPlan {
    /// Whether `today` falls inside `[valid_from, valid_to]`.
    pub fn covers(&self, today: &CalendarDay) -> bool {
        &self.valid_from <= today && today <= &self.valid_to
    }

    /// Whether the plan references the given customer.
    pub fn includes(&self, id: &CustomerId) -> bool {
        self.customer_ids.contains(id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CustomerId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CustomerId>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Plan state. Only [`PlanStatus::Active`] plans are ever selected.
///
/// The wire value is matched case-sensitively; any value other than
/// `Active` or `Inactive` is kept verbatim in [`PlanStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStatus {
    Active,
    Inactive,
    Other(String),
}

impl PlanStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            PlanStatus::Active => "Active",
            PlanStatus::Inactive => "Inactive",
            PlanStatus::Other(value) => value,
        }
    }

    /// Maps a wire value onto a status.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Active" => PlanStatus::Active,
            "Inactive" => PlanStatus::Inactive,
            other => PlanStatus::Other(other.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PlanStatus::Active)
    }
}

impl FromStr for PlanStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

impl Serialize for PlanStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlanStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}
