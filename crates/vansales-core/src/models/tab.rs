//! Visit status tabs used to partition a plan's customers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the status buckets a plan's customers are listed under.
///
/// Labels are parsed leniently (case, `-`/`_`/space separators), and a
/// label that names none of the five buckets is kept as
/// [`VisitTab::Unrecognized`] so the classifier can apply its unknown-tab
/// policy to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VisitTab {
    #[default]
    Pending,
    Visited,
    Missed,
    ZeroSales,
    Unplanned,
    Unrecognized(String),
}

impl VisitTab {
    /// The five buckets, in display order.
    pub const ALL: [VisitTab; 5] = [
        VisitTab::Pending,
        VisitTab::Visited,
        VisitTab::Missed,
        VisitTab::ZeroSales,
        VisitTab::Unplanned,
    ];

    /// Upper-case label as shown on the tab bar.
    pub fn label(&self) -> &str {
        match self {
            VisitTab::Pending => "PENDING",
            VisitTab::Visited => "VISITED",
            VisitTab::Missed => "MISSED",
            VisitTab::ZeroSales => "ZERO SALES",
            VisitTab::Unplanned => "UNPLANNED",
            VisitTab::Unrecognized(label) => label,
        }
    }

    /// Maps a label onto a tab. Never fails.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_uppercase() })
            .collect();

        match normalized.as_str() {
            "PENDING" => VisitTab::Pending,
            "VISITED" => VisitTab::Visited,
            "MISSED" => VisitTab::Missed,
            "ZERO SALES" | "ZEROSALES" => VisitTab::ZeroSales,
            "UNPLANNED" => VisitTab::Unplanned,
            _ => VisitTab::Unrecognized(label.to_string()),
        }
    }
}

impl FromStr for VisitTab {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for VisitTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for VisitTab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VisitTab {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}
