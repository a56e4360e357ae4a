//! Customer list search and filtering.
//!
//! # Responsibility
//! - Combine free-text search with the customer-type / product /
//!   date-range filters of the customers screen.
//!
//! # Invariants
//! - An empty search and empty filter set match every customer.
//! - Input collection order is preserved in the result.
//! - The date range is inclusive on both ends; comparison is lexicographic
//!   on zero-padded ISO dates.

use crate::model::customer::{Customer, CustomerType};

/// Search and filter criteria for the customers list.
///
/// `Default` is the no-op filter that matches everything.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    /// Case-insensitive substring on the name, OR raw substring on the
    /// mobile number.
    pub search: String,
    /// Membership filter; empty means no type filter.
    pub customer_types: Vec<CustomerType>,
    /// Exact product match; `None` means no product filter.
    pub product: Option<String>,
    /// Inclusive lower bound on `next_visit_date`.
    pub date_from: Option<String>,
    /// Inclusive upper bound on `next_visit_date`.
    pub date_to: Option<String>,
}

impl CustomerFilter {
    pub fn matches(&self, customer: &Customer) -> bool {
        if !self.search.is_empty() {
            let name_hit = customer
                .customer_name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
            let mobile_hit = customer.mobile_number.contains(&self.search);
            if !name_hit && !mobile_hit {
                return false;
            }
        }

        if !self.customer_types.is_empty()
            && !self.customer_types.contains(&customer.customer_type)
        {
            return false;
        }

        if let Some(product) = &self.product {
            if &customer.product != product {
                return false;
            }
        }

        if let Some(from) = &self.date_from {
            if customer.next_visit_date < *from {
                return false;
            }
        }

        if let Some(to) = &self.date_to {
            if customer.next_visit_date > *to {
                return false;
            }
        }

        true
    }
}

/// Applies `filter` to `customers`, preserving order.
pub fn filter_customers<'a>(
    customers: &'a [Customer],
    filter: &CustomerFilter,
) -> Vec<&'a Customer> {
    customers.iter().filter(|c| filter.matches(c)).collect()
}
