//! DataSource loading
//!
//! Builds the immutable in-memory snapshot every query consumes. The snapshot
//! is loaded once (from JSON) before any query runs and is never mutated
//! afterwards; queries borrow it read-only.

use crate::models::{Customer, Product, Supplier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Embedded Northwind-flavoured sample dataset
const SAMPLE_FIXTURE: &str = include_str!("fixture.json");

/// Error while loading a DataSource snapshot
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Order total for customer {customer_id} is negative: {total}")]
    NegativeOrderTotal {
        customer_id: String,
        total: Decimal,
    },
}

/// The fixed in-memory dataset: customers (with their orders), suppliers,
/// and products
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSource {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl DataSource {
    /// Parse a snapshot from JSON and validate its invariants
    ///
    /// The only enforced invariant is that present order totals are
    /// non-negative. Oddities like non-numeric postal codes are data
    /// conditions surfaced by the data-issue query, not load failures.
    pub fn from_json(json: &str) -> Result<Self, DataSourceError> {
        let source: DataSource = serde_json::from_str(json)?;
        for customer in &source.customers {
            for order in &customer.orders {
                if let Some(total) = order.total {
                    if total < Decimal::ZERO {
                        return Err(DataSourceError::NegativeOrderTotal {
                            customer_id: customer.customer_id.clone(),
                            total,
                        });
                    }
                }
            }
        }
        debug!(
            customers = source.customers.len(),
            suppliers = source.suppliers.len(),
            products = source.products.len(),
            "loaded data source snapshot"
        );
        Ok(source)
    }

    /// Load the embedded sample dataset
    pub fn sample() -> Result<Self, DataSourceError> {
        Self::from_json(SAMPLE_FIXTURE)
    }
}
