//! Collection wrapper types for displaying groups of customers.

use std::{fmt, ops::Index};

use crate::models::Customer;

/// Message shown for a tab with nothing to list.
pub const EMPTY_SECTION: &str = "No customers found in this section";

/// Newtype wrapper for displaying a journey list as customer cards.
///
/// # Examples
///
/// ```rust
/// use vansales_core::{display::CustomerList, models::Customer};
///
/// let list = CustomerList(vec![Customer::new("1", "Sharma Traders")]);
/// let output = list.to_string();
/// assert!(output.contains("### Sharma Traders (ID: 1)"));
/// assert!(output.contains("- Zone: N/A"));
///
/// let empty = CustomerList(vec![]);
/// assert!(empty.to_string().contains("No customers found in this section"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CustomerList(pub Vec<Customer>);

impl CustomerList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Customer> {
        self.0.iter()
    }
}

impl Index<usize> for CustomerList {
    type Output = Customer;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for CustomerList {
    type Item = Customer;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CustomerList {
    type Item = &'a Customer;
    type IntoIter = std::slice::Iter<'a, Customer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Customer>> for CustomerList {
    fn from(customers: Vec<Customer>) -> Self {
        Self(customers)
    }
}

impl fmt::Display for CustomerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{EMPTY_SECTION}");
        }
        for customer in &self.0 {
            customer.fmt_card(f)?;
        }
        Ok(())
    }
}
