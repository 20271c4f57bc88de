//! Query library
//!
//! Pure, stateless query functions over the DataSource snapshot:
//! - `customers`: spend thresholds, supplier co-location, first-order dates,
//!   enrollment sorting, data-issue scanning, per-city averages
//! - `products`: category/stock grouping and price banding
//! - `orders`: order counts by month, year, and (year, month)
//! - `registry`: an enumerable name -> runner table for "run everything"
//!   harnesses
//!
//! Every function takes the snapshot by reference, never mutates it, and
//! returns owned result records. Re-running any query on the same snapshot
//! yields identical output.

pub mod customers;
pub mod orders;
pub mod products;
pub mod registry;

use indexmap::IndexMap;
use std::hash::Hash;

/// Bucket items by a derived key, preserving first-encounter order of keys
///
/// Grouped queries report their groups in the order the keys first appear in
/// the input, so the buckets live in an IndexMap rather than a HashMap.
pub(crate) fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

pub use customers::{
    city_averages, customer_first_order_dates, customers_by_max_order,
    customers_sorted_by_enrollment, customers_with_data_issues, customers_with_local_suppliers,
    high_spend_customers, CityStats, CustomerMaxOrder, CustomerSpend, DataIssueRecord,
    EnrollmentEntry, FirstOrder, HighSpendBand, LocalSuppliers, MaxOrderBand,
};
pub use orders::{
    order_counts_by_month, order_counts_by_year, order_counts_by_year_and_month, MonthCount,
    YearCount, YearMonthCount,
};
pub use products::{
    products_by_category_and_stock, products_by_price_band, CategoryGroup, PriceBands, PriceGroup,
    StockGroup,
};
pub use registry::{QueryDef, DEFAULT_MAX_ORDER_THRESHOLDS, DEFAULT_SPEND_THRESHOLDS};
