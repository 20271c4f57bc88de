//! Product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalogue product
///
/// `unit_price` uses exact decimal arithmetic because the price-band and
/// price-grouping queries key on exact equality; floating point would make
/// products priced at the band boundaries (15, 20) drift in or out of bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub units_in_stock: u32,
}
