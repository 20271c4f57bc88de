//! Order model

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single order placed by a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Total monetary amount; absent for edge-case records. When present the
    /// value is non-negative (enforced at load time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    /// Calendar date the order was placed
    pub order_date: NaiveDate,
}

impl Order {
    /// Calendar year of the order date
    pub fn year(&self) -> i32 {
        self.order_date.year()
    }

    /// Calendar month of the order date (1-12)
    pub fn month(&self) -> u32 {
        self.order_date.month()
    }
}
