//! Query registry
//!
//! A plain enumerable table of every query, for harnesses that want to run
//! the whole collection without knowing each query's record type. Each entry
//! serializes its result records to `serde_json::Value` rows; formatting and
//! printing stay with the caller.

use super::{customers, orders, products};
use crate::datasource::DataSource;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Spend thresholds the exercise runs the high-spend query with
pub const DEFAULT_SPEND_THRESHOLDS: [Decimal; 3] = [dec!(20000.5), dec!(1500), dec!(1000)];
/// Order-total thresholds the exercise runs the max-order query with
pub const DEFAULT_MAX_ORDER_THRESHOLDS: [Decimal; 3] = [dec!(1000.5), dec!(5000), dec!(15000)];

/// One registered query: a stable name, a human-readable description, and a
/// runner producing uniform JSON rows
pub struct QueryDef {
    pub name: &'static str,
    pub description: &'static str,
    runner: fn(&DataSource) -> Result<Vec<Value>>,
}

impl QueryDef {
    /// Run the query against a snapshot, returning one JSON value per result
    /// record
    pub fn run(&self, source: &DataSource) -> Result<Vec<Value>> {
        let rows = (self.runner)(source)?;
        debug!(query = self.name, rows = rows.len(), "query executed");
        Ok(rows)
    }
}

fn rows<T: Serialize>(records: Vec<T>) -> Result<Vec<Value>> {
    records
        .into_iter()
        .map(|r| serde_json::to_value(r).context("serializing query result record"))
        .collect()
}

static ALL: Lazy<Vec<QueryDef>> = Lazy::new(|| {
    vec![
        QueryDef {
            name: "high-spend-customers",
            description: "Customers whose total order sum exceeds each threshold",
            runner: |s| rows(customers::high_spend_customers(s, &DEFAULT_SPEND_THRESHOLDS)),
        },
        QueryDef {
            name: "customers-with-local-suppliers",
            description: "Suppliers sharing each customer's exact country and city",
            runner: |s| rows(customers::customers_with_local_suppliers(s)),
        },
        QueryDef {
            name: "customers-by-max-order",
            description: "Customers with at least one order above each threshold",
            runner: |s| {
                rows(customers::customers_by_max_order(
                    s,
                    &DEFAULT_MAX_ORDER_THRESHOLDS,
                ))
            },
        },
        QueryDef {
            name: "customer-first-order-dates",
            description: "Month and year each customer first ordered",
            runner: |s| rows(customers::customer_first_order_dates(s)),
        },
        QueryDef {
            name: "customers-sorted-by-enrollment",
            description: "Customers ordered by first-order year, month, and total spend",
            runner: |s| rows(customers::customers_sorted_by_enrollment(s)),
        },
        QueryDef {
            name: "customers-with-data-issues",
            description: "Customers with non-numeric postcodes, missing regions, or bare phones",
            runner: |s| rows(customers::customers_with_data_issues(s)),
        },
        QueryDef {
            name: "products-by-category-and-stock",
            description: "Products grouped by category and stock count, priciest first",
            runner: |s| rows(products::products_by_category_and_stock(s)),
        },
        QueryDef {
            name: "products-by-price-band",
            description: "Products partitioned into cheap, standard, and expensive bands",
            runner: |s| {
                let bands = products::products_by_price_band(s);
                Ok(vec![serde_json::to_value(bands)
                    .context("serializing query result record")?])
            },
        },
        QueryDef {
            name: "city-averages",
            description: "Average order total and order count per customer city",
            runner: |s| rows(customers::city_averages(s)),
        },
        QueryDef {
            name: "order-counts-by-month",
            description: "Order counts grouped by calendar month",
            runner: |s| rows(orders::order_counts_by_month(s)),
        },
        QueryDef {
            name: "order-counts-by-year",
            description: "Order counts grouped by calendar year",
            runner: |s| rows(orders::order_counts_by_year(s)),
        },
        QueryDef {
            name: "order-counts-by-year-and-month",
            description: "Order counts grouped by year and month together",
            runner: |s| rows(orders::order_counts_by_year_and_month(s)),
        },
    ]
});

/// Every registered query, in the exercise's presentation order
pub fn all() -> &'static [QueryDef] {
    &ALL
}

/// Look up a query by its registered name
pub fn find(name: &str) -> Option<&'static QueryDef> {
    ALL.iter().find(|q| q.name == name)
}
