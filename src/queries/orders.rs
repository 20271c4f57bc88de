//! Order count queries
//!
//! All three operate on the orders flattened across every customer and report
//! groups in first-encounter order.

use super::group_by;
use crate::datasource::DataSource;
use crate::models::Order;
use serde::Serialize;

fn all_orders(source: &DataSource) -> impl Iterator<Item = &Order> {
    source.customers.iter().flat_map(|c| c.orders.iter())
}

/// Order count for one calendar month, collapsed across years
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthCount {
    pub month: u32,
    pub orders: usize,
}

/// Count all orders by calendar month (1-12), collapsing across years
pub fn order_counts_by_month(source: &DataSource) -> Vec<MonthCount> {
    group_by(all_orders(source), |o| o.month())
        .into_iter()
        .map(|(month, orders)| MonthCount {
            month,
            orders: orders.len(),
        })
        .collect()
}

/// Order count for one calendar year
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearCount {
    pub year: i32,
    pub orders: usize,
}

/// Count all orders by calendar year
pub fn order_counts_by_year(source: &DataSource) -> Vec<YearCount> {
    group_by(all_orders(source), |o| o.year())
        .into_iter()
        .map(|(year, orders)| YearCount {
            year,
            orders: orders.len(),
        })
        .collect()
}

/// Order count for one (year, month) pair
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearMonthCount {
    pub year: i32,
    pub month: u32,
    pub orders: usize,
}

/// Count all orders by the compound (year, month) key
///
/// Groups are reported in the order the keys are first encountered while
/// flattening; there is no final re-sort.
pub fn order_counts_by_year_and_month(source: &DataSource) -> Vec<YearMonthCount> {
    group_by(all_orders(source), |o| (o.year(), o.month()))
        .into_iter()
        .map(|((year, month), orders)| YearMonthCount {
            year,
            month,
            orders: orders.len(),
        })
        .collect()
}
