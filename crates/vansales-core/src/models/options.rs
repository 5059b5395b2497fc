//! Lookup data served by the options endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration and lookup data from `GET /api/journey-plans/options`.
///
/// The payload is not interpreted by the client; it is passed through for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyOptions(pub Value);

impl JourneyOptions {
    /// Pretty-printed JSON of the payload.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
