//! Northwind Queries - a teaching collection of query exercises
//!
//! Provides:
//! - Domain models for a fixed trade dataset (customers with their orders,
//!   suppliers, products)
//! - DataSource loading (embedded sample fixture or caller-supplied JSON)
//! - A library of pure query functions: filtering, grouping, joining, and
//!   aggregating the snapshot
//! - An enumerable query registry for "run everything" harnesses
//!
//! The queries are stateless and side-effect free; presentation (formatting
//! and printing the result records) is left to the caller.

pub mod datasource;
pub mod models;
pub mod queries;

// Re-export commonly used types
pub use datasource::{DataSource, DataSourceError};
pub use models::{Customer, Order, Product, Supplier};

// Re-export the query surface
pub use queries::{
    city_averages, customer_first_order_dates, customers_by_max_order,
    customers_sorted_by_enrollment, customers_with_data_issues, customers_with_local_suppliers,
    high_spend_customers, order_counts_by_month, order_counts_by_year,
    order_counts_by_year_and_month, products_by_category_and_stock, products_by_price_band,
};
pub use queries::{
    CategoryGroup, CityStats, CustomerMaxOrder, CustomerSpend, DataIssueRecord, EnrollmentEntry,
    FirstOrder, HighSpendBand, LocalSuppliers, MaxOrderBand, MonthCount, PriceBands, PriceGroup,
    QueryDef, StockGroup, YearCount, YearMonthCount,
};
pub use queries::{DEFAULT_MAX_ORDER_THRESHOLDS, DEFAULT_SPEND_THRESHOLDS};
