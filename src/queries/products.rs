//! Product queries
//!
//! Two-level category/stock grouping and the three-band price partition.

use super::group_by;
use crate::datasource::DataSource;
use crate::models::Product;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Lower price-band boundary; prices exactly at this value fall in no band
pub const CHEAP_LIMIT: Decimal = dec!(15);
/// Upper price-band boundary; prices exactly at this value fall in no band
pub const EXPENSIVE_LIMIT: Decimal = dec!(20);

/// Products sharing one units-in-stock count, ordered by price descending
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StockGroup {
    pub units_in_stock: u32,
    pub products: Vec<Product>,
}

/// One product category with its per-stock-count subgroups
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub stock_groups: Vec<StockGroup>,
}

/// Products grouped by category, then by units-in-stock within each category,
/// with each innermost group ordered by unit price descending
///
/// Both grouping levels keep first-encounter key order.
pub fn products_by_category_and_stock(source: &DataSource) -> Vec<CategoryGroup> {
    group_by(source.products.iter(), |p| p.category.clone())
        .into_iter()
        .map(|(category, products)| CategoryGroup {
            category,
            stock_groups: group_by(products, |p| p.units_in_stock)
                .into_iter()
                .map(|(units_in_stock, mut products)| {
                    products.sort_by(|a, b| b.unit_price.cmp(&a.unit_price));
                    StockGroup {
                        units_in_stock,
                        products: products.into_iter().cloned().collect(),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Products sharing one exact unit price
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceGroup {
    pub unit_price: Decimal,
    pub products: Vec<Product>,
}

/// The three price bands, each grouped by exact unit price
///
/// The bands are strict: Cheap is price < 15, Standard is 15 < price < 20,
/// Expensive is price > 20. Products priced exactly at 15 or 20 appear in no
/// band. This gap is the exercise's defined behaviour, not an off-by-one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceBands {
    pub cheap: Vec<PriceGroup>,
    pub standard: Vec<PriceGroup>,
    pub expensive: Vec<PriceGroup>,
}

/// Partition products into the Cheap/Standard/Expensive bands and group each
/// band by exact unit price, keys in first-encounter order
pub fn products_by_price_band(source: &DataSource) -> PriceBands {
    PriceBands {
        cheap: price_groups(source, |price| price < CHEAP_LIMIT),
        standard: price_groups(source, |price| price > CHEAP_LIMIT && price < EXPENSIVE_LIMIT),
        expensive: price_groups(source, |price| price > EXPENSIVE_LIMIT),
    }
}

fn price_groups(source: &DataSource, band: impl Fn(Decimal) -> bool) -> Vec<PriceGroup> {
    group_by(
        source.products.iter().filter(|p| band(p.unit_price)),
        |p| p.unit_price,
    )
    .into_iter()
    .map(|(unit_price, products)| PriceGroup {
        unit_price,
        products: products.into_iter().cloned().collect(),
    })
    .collect()
}
