//! Customer queries
//!
//! Threshold filters, the supplier co-location join, first-order dates,
//! enrollment ordering, data-issue scanning, and per-city averages. All
//! functions are pure reads over the snapshot.

use super::group_by;
use crate::datasource::DataSource;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// A customer paired with its summed order totals
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerSpend {
    pub customer_id: String,
    pub total_spend: Decimal,
}

/// Customers whose total spend strictly exceeds one threshold
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HighSpendBand {
    pub threshold: Decimal,
    pub customers: Vec<CustomerSpend>,
}

/// For each threshold (in input order), the customers whose summed order
/// totals strictly exceed it
///
/// Absent order totals are excluded from the sum. A customer with no orders
/// has spend zero and therefore never matches a threshold >= 0.
pub fn high_spend_customers(source: &DataSource, thresholds: &[Decimal]) -> Vec<HighSpendBand> {
    thresholds
        .iter()
        .map(|&threshold| HighSpendBand {
            threshold,
            customers: source
                .customers
                .iter()
                .filter(|c| c.total_spend() > threshold)
                .map(|c| CustomerSpend {
                    customer_id: c.customer_id.clone(),
                    total_spend: c.total_spend(),
                })
                .collect(),
        })
        .collect()
}

/// A customer and the suppliers located in exactly its (country, city)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocalSuppliers {
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub suppliers: Vec<String>,
}

/// For every customer, the supplier names sharing its exact (country, city)
/// pair, ordered by company name ascending
///
/// The join key uses exact string equality on both components; ordering is
/// byte-wise on the company name.
pub fn customers_with_local_suppliers(source: &DataSource) -> Vec<LocalSuppliers> {
    let mut suppliers_by_location: HashMap<(&str, &str), Vec<&str>> = HashMap::new();
    for supplier in &source.suppliers {
        suppliers_by_location
            .entry((supplier.country.as_str(), supplier.city.as_str()))
            .or_default()
            .push(supplier.supplier_name.as_str());
    }

    let mut result: Vec<LocalSuppliers> = source
        .customers
        .iter()
        .map(|customer| LocalSuppliers {
            company_name: customer.company_name.clone(),
            country: customer.country.clone(),
            city: customer.city.clone(),
            suppliers: suppliers_by_location
                .get(&(customer.country.as_str(), customer.city.as_str()))
                .map(|names| names.iter().map(|n| n.to_string()).collect())
                .unwrap_or_default(),
        })
        .collect();
    result.sort_by(|a, b| a.company_name.cmp(&b.company_name));
    result
}

/// A customer and its largest single order total
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerMaxOrder {
    pub customer_id: String,
    pub company_name: String,
    pub largest_order: Decimal,
}

/// Customers whose largest single order strictly exceeds one threshold
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MaxOrderBand {
    pub threshold: Decimal,
    pub customers: Vec<CustomerMaxOrder>,
}

/// For each threshold (in input order), the customers having at least one
/// order whose total strictly exceeds it
///
/// Orders with an absent total never satisfy the comparison; a customer with
/// no orders is excluded outright.
pub fn customers_by_max_order(source: &DataSource, thresholds: &[Decimal]) -> Vec<MaxOrderBand> {
    thresholds
        .iter()
        .map(|&threshold| MaxOrderBand {
            threshold,
            customers: source
                .customers
                .iter()
                .filter_map(|c| {
                    let largest = c.largest_order()?;
                    (largest > threshold).then(|| CustomerMaxOrder {
                        customer_id: c.customer_id.clone(),
                        company_name: c.company_name.clone(),
                        largest_order: largest,
                    })
                })
                .collect(),
        })
        .collect()
}

/// A customer and the month/year components of its earliest orders
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FirstOrder {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order_year: Option<i32>,
}

/// For every customer, the minimum order month and minimum order year
///
/// Month and year are minimised independently across the customer's orders,
/// so the pair may not name any single real order (orders in 2020-11 and
/// 2021-03 report month 3, year 2020). Customers with no orders report
/// neither component.
pub fn customer_first_order_dates(source: &DataSource) -> Vec<FirstOrder> {
    source
        .customers
        .iter()
        .map(|customer| FirstOrder {
            company_name: customer.company_name.clone(),
            first_order_month: customer.orders.iter().map(|o| o.month()).min(),
            first_order_year: customer.orders.iter().map(|o| o.year()).min(),
        })
        .collect()
}

/// A customer's enrollment record: first-order components plus total spend
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrollmentEntry {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order_year: Option<i32>,
    pub total_spend: Decimal,
}

/// Customers with their first-order components and total spend, ordered by
/// year descending, then month descending, then spend descending
///
/// The sort is stable, so ties keep the snapshot's input order. Customers
/// without orders have no year/month and sort after every dated customer.
pub fn customers_sorted_by_enrollment(source: &DataSource) -> Vec<EnrollmentEntry> {
    let mut entries: Vec<EnrollmentEntry> = source
        .customers
        .iter()
        .map(|customer| EnrollmentEntry {
            company_name: customer.company_name.clone(),
            first_order_month: customer.orders.iter().map(|o| o.month()).min(),
            first_order_year: customer.orders.iter().map(|o| o.year()).min(),
            total_spend: customer.total_spend(),
        })
        .collect();
    entries.sort_by(|a, b| {
        (b.first_order_year, b.first_order_month, b.total_spend).cmp(&(
            a.first_order_year,
            a.first_order_month,
            a.total_spend,
        ))
    });
    entries
}

/// A customer whose contact data failed one of the plausibility checks
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataIssueRecord {
    pub company_name: String,
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub phone: String,
}

/// Customers with suspect contact data
///
/// A customer is reported when any of the following holds: the postal code
/// does not parse as an integer, the region is absent, or the phone lacks an
/// opening or closing parenthesis (plain substring test, no balancing).
pub fn customers_with_data_issues(source: &DataSource) -> Vec<DataIssueRecord> {
    source
        .customers
        .iter()
        .filter(|c| {
            c.postal_code.parse::<i32>().is_err()
                || c.region.is_none()
                || !(c.phone.contains('(') && c.phone.contains(')'))
        })
        .map(|c| DataIssueRecord {
            company_name: c.company_name.clone(),
            postal_code: c.postal_code.clone(),
            region: c.region.clone(),
            phone: c.phone.clone(),
        })
        .collect()
}

/// Average figures for one customer city
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityStats {
    pub city: String,
    /// Average over the city's customers of each customer's average present
    /// order total; absent when no customer contributes a priced order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_order_total: Option<Decimal>,
    pub avg_orders_per_customer: f64,
}

/// Per-city average of per-customer average order totals, plus the average
/// order count per customer
///
/// Orders with absent totals are excluded from the money averages entirely
/// (never treated as zero) but still count towards the order-count average.
/// Cities appear in first-encounter order.
pub fn city_averages(source: &DataSource) -> Vec<CityStats> {
    group_by(source.customers.iter(), |c| c.city.clone())
        .into_iter()
        .map(|(city, customers)| {
            let per_customer_avgs: Vec<Decimal> = customers
                .iter()
                .filter_map(|customer| {
                    let totals: Vec<Decimal> =
                        customer.orders.iter().filter_map(|o| o.total).collect();
                    if totals.is_empty() {
                        None
                    } else {
                        Some(totals.iter().sum::<Decimal>() / Decimal::from(totals.len() as u64))
                    }
                })
                .collect();
            let avg_order_total = if per_customer_avgs.is_empty() {
                None
            } else {
                Some(
                    per_customer_avgs.iter().sum::<Decimal>()
                        / Decimal::from(per_customer_avgs.len() as u64),
                )
            };
            let total_orders: usize = customers.iter().map(|c| c.orders.len()).sum();
            CityStats {
                city,
                avg_order_total,
                avg_orders_per_customer: total_orders as f64 / customers.len() as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Order, Supplier};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn customer(id: &str, name: &str, country: &str, city: &str, orders: Vec<Order>) -> Customer {
        Customer {
            customer_id: id.into(),
            company_name: name.into(),
            country: country.into(),
            city: city.into(),
            region: Some("R1".into()),
            postal_code: "10000".into(),
            phone: "(1) 555-0000".into(),
            orders,
        }
    }

    fn order(total: Option<Decimal>, year: i32, month: u32, day: u32) -> Order {
        Order {
            total,
            order_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        }
    }

    fn snapshot(customers: Vec<Customer>) -> DataSource {
        DataSource {
            customers,
            suppliers: vec![],
            products: vec![],
        }
    }

    #[test]
    fn test_high_spend_excludes_at_and_below_threshold() {
        let source = snapshot(vec![
            customer(
                "A",
                "Alpha",
                "UK",
                "London",
                vec![
                    order(Some(dec!(100)), 2021, 1, 10),
                    order(Some(dec!(200)), 2021, 2, 10),
                ],
            ),
            customer("B", "Beta", "UK", "London", vec![]),
        ]);

        let bands = high_spend_customers(&source, &[dec!(250), dec!(300), dec!(0)]);
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].threshold, dec!(250));
        assert_eq!(bands[0].customers.len(), 1);
        assert_eq!(bands[0].customers[0].customer_id, "A");
        assert_eq!(bands[0].customers[0].total_spend, dec!(300));
        // sum 300 does not strictly exceed 300
        assert!(bands[1].customers.is_empty());
        // zero-order customer B has spend 0 and never matches a threshold >= 0
        assert_eq!(bands[2].customers.len(), 1);
        assert_eq!(bands[2].customers[0].customer_id, "A");
    }

    #[test]
    fn test_local_suppliers_join_and_ordering() {
        let mut source = snapshot(vec![
            customer("Z", "Zebra Ltd", "UK", "London", vec![]),
            customer("A", "Acme Ltd", "UK", "London", vec![]),
            customer("N", "Nordic AB", "Sweden", "Lulea", vec![]),
        ]);
        source.suppliers = vec![
            Supplier {
                supplier_id: "S1".into(),
                supplier_name: "Exotic Liquids".into(),
                country: "UK".into(),
                city: "London".into(),
            },
            Supplier {
                supplier_id: "S2".into(),
                supplier_name: "Leeds Brewers".into(),
                country: "UK".into(),
                city: "Leeds".into(),
            },
        ];

        let rows = customers_with_local_suppliers(&source);
        let names: Vec<&str> = rows.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["Acme Ltd", "Nordic AB", "Zebra Ltd"]);
        assert_eq!(rows[0].suppliers, vec!["Exotic Liquids"]);
        // same country, different city: no match
        assert!(rows[1].suppliers.is_empty());
        assert_eq!(rows[2].suppliers, vec!["Exotic Liquids"]);
    }

    #[test]
    fn test_max_order_ignores_absent_totals() {
        let source = snapshot(vec![
            customer(
                "A",
                "Alpha",
                "UK",
                "London",
                vec![order(None, 2021, 1, 5), order(Some(dec!(50)), 2021, 2, 5)],
            ),
            customer("B", "Beta", "UK", "London", vec![order(None, 2021, 3, 5)]),
            customer("C", "Gamma", "UK", "London", vec![]),
        ]);

        let bands = customers_by_max_order(&source, &[dec!(40), dec!(50)]);
        assert_eq!(bands[0].customers.len(), 1);
        assert_eq!(bands[0].customers[0].customer_id, "A");
        assert_eq!(bands[0].customers[0].largest_order, dec!(50));
        // 50 does not strictly exceed 50; B and C never qualify
        assert!(bands[1].customers.is_empty());
    }

    #[test]
    fn test_first_order_components_minimised_independently() {
        let source = snapshot(vec![customer(
            "A",
            "Alpha",
            "UK",
            "London",
            vec![
                order(Some(dec!(10)), 2021, 3, 15),
                order(Some(dec!(20)), 2020, 11, 2),
            ],
        )]);

        let rows = customer_first_order_dates(&source);
        assert_eq!(rows[0].first_order_year, Some(2020));
        // min month across {3, 11}, not the month of the earliest order
        assert_eq!(rows[0].first_order_month, Some(3));
    }

    #[test]
    fn test_first_order_absent_for_zero_orders() {
        let source = snapshot(vec![customer("B", "Beta", "UK", "London", vec![])]);
        let rows = customer_first_order_dates(&source);
        assert_eq!(rows[0].first_order_month, None);
        assert_eq!(rows[0].first_order_year, None);
    }

    #[test]
    fn test_enrollment_sort_year_month_spend_descending() {
        let source = snapshot(vec![
            customer(
                "A",
                "Alpha",
                "UK",
                "London",
                vec![order(Some(dec!(100)), 2020, 6, 1)],
            ),
            customer(
                "B",
                "Beta",
                "UK",
                "London",
                vec![order(Some(dec!(50)), 2021, 4, 1)],
            ),
            customer(
                "C",
                "Gamma",
                "UK",
                "London",
                vec![order(Some(dec!(80)), 2021, 4, 1)],
            ),
            customer("D", "Delta", "UK", "London", vec![]),
        ]);

        let rows = customers_sorted_by_enrollment(&source);
        let names: Vec<&str> = rows.iter().map(|r| r.company_name.as_str()).collect();
        // 2021 before 2020; within (2021, 4) the larger spend first; no-order
        // customer last
        assert_eq!(names, vec!["Gamma", "Beta", "Alpha", "Delta"]);
    }

    #[test]
    fn test_data_issues_checks() {
        let clean = customer("A", "Clean Ltd", "UK", "London", vec![]);
        let mut no_region = customer("B", "NoRegion Ltd", "UK", "London", vec![]);
        no_region.region = None;
        let mut alpha_postcode = customer("C", "Postcode Ltd", "UK", "London", vec![]);
        alpha_postcode.postal_code = "WA1 1DP".into();
        let mut bare_phone = customer("D", "Phone Ltd", "UK", "London", vec![]);
        bare_phone.phone = "030-0074321".into();

        let source = snapshot(vec![clean, no_region, alpha_postcode, bare_phone]);
        let rows = customers_with_data_issues(&source);
        let names: Vec<&str> = rows.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["NoRegion Ltd", "Postcode Ltd", "Phone Ltd"]);
    }

    #[test]
    fn test_city_averages_exclude_absent_totals() {
        let source = snapshot(vec![
            customer(
                "A",
                "Alpha",
                "UK",
                "London",
                vec![
                    order(Some(dec!(10)), 2021, 1, 1),
                    order(Some(dec!(30)), 2021, 2, 1),
                ],
            ),
            // only an absent-total order: contributes to the count average but
            // not the money average
            customer("B", "Beta", "UK", "London", vec![order(None, 2021, 3, 1)]),
        ]);

        let stats = city_averages(&source);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].city, "London");
        assert_eq!(stats[0].avg_order_total, Some(dec!(20)));
        assert_eq!(stats[0].avg_orders_per_customer, 1.5);
    }

    #[test]
    fn test_city_averages_all_absent_totals() {
        let source = snapshot(vec![customer(
            "B",
            "Beta",
            "UK",
            "London",
            vec![order(None, 2021, 3, 1)],
        )]);
        let stats = city_averages(&source);
        assert_eq!(stats[0].avg_order_total, None);
        assert_eq!(stats[0].avg_orders_per_customer, 1.0);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_results() {
        let source = snapshot(vec![]);
        assert!(high_spend_customers(&source, &[dec!(1)])[0]
            .customers
            .is_empty());
        assert!(customers_with_local_suppliers(&source).is_empty());
        assert!(customer_first_order_dates(&source).is_empty());
        assert!(customers_sorted_by_enrollment(&source).is_empty());
        assert!(customers_with_data_issues(&source).is_empty());
        assert!(city_averages(&source).is_empty());
    }
}
