//! Supplier model

use serde::{Deserialize, Serialize};

/// A supplier, independent of customers and orders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    /// Short supplier code (e.g., "EXOTIC")
    pub supplier_id: String,
    pub supplier_name: String,
    pub country: String,
    pub city: String,
}
