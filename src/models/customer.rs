//! Customer model

use super::order::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer together with the orders it has placed
///
/// Address and contact fields are deliberately loose: postal codes may be
/// alphanumeric, the region may be missing entirely, and phone numbers are
/// free-form strings that may or may not carry a parenthesised operator code.
/// The data-issue query surfaces these as business conditions, never as
/// parse failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Short customer code (e.g., "ALFKI")
    pub customer_id: String,
    /// Company display name
    pub company_name: String,
    pub country: String,
    pub city: String,
    /// Region is absent for most European customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub postal_code: String,
    pub phone: String,
    /// Orders placed by this customer; may be empty
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Sum of all present order totals
    ///
    /// Orders with an absent total are excluded rather than counted as zero.
    /// A customer with no orders has a spend of zero.
    pub fn total_spend(&self) -> Decimal {
        self.orders.iter().filter_map(|o| o.total).sum()
    }

    /// Largest present order total, if any order carries one
    pub fn largest_order(&self) -> Option<Decimal> {
        self.orders.iter().filter_map(|o| o.total).max()
    }
}
