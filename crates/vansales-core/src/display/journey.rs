//! Display for classified journey views.

use std::fmt;

use super::collections::CustomerList;
use crate::{
    journey::{JourneyView, TabCounts},
    models::VisitTab,
};

/// Message shown when the user has no plan covering today.
pub const NO_PLAN: &str = "No active journey plan for today.";

/// Tab bar with the count for each tab, the selected one in brackets.
struct TabBar<'a> {
    counts: &'a TabCounts,
    selected: &'a VisitTab,
}

impl fmt::Display for TabBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (tab, count) in &self.counts.0 {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            if tab == self.selected {
                write!(f, "**[{tab} ({count})]**")?;
            } else {
                write!(f, "{tab} ({count})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TabCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tab, count) in &self.0 {
            writeln!(f, "- {tab}: {count}")?;
        }
        Ok(())
    }
}

impl fmt::Display for JourneyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Journey for {}", self.today)?;
        writeln!(f)?;

        let Some(plan) = &self.plan else {
            return writeln!(f, "{NO_PLAN}");
        };
        write!(f, "{plan}")?;
        if !self.query.is_empty() {
            writeln!(f, "- Search: \"{}\"", self.query)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{}",
            TabBar {
                counts: &self.counts,
                selected: &self.tab,
            }
        )?;
        writeln!(f)?;

        writeln!(f, "## {}", self.tab)?;
        writeln!(f)?;
        write!(f, "{}", CustomerList(self.customers.clone()))
    }
}
