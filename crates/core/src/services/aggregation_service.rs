use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::aggregate::{CategoryRevenue, LocationRevenue, MonthlyRevenue, SellerStats};
use crate::models::sale::Sale;

/// English month names indexed by `month0`.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Computes the derived summary tables behind the dashboard charts.
///
/// Pure business logic: same input slice, same output tables. Every
/// table is rebuilt from scratch on each call; nothing is cached or
/// mutated in place.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Revenue summed by purchase location, joined with the location's
    /// coordinates, sorted descending by revenue.
    ///
    /// Coordinates are taken from the location's first record (they are
    /// constant per location). Equal revenues keep first-occurrence
    /// order: the accumulation preserves it and the sort is stable.
    pub fn revenue_by_location(&self, sales: &[Sale]) -> Vec<LocationRevenue> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut table: Vec<LocationRevenue> = Vec::new();

        for sale in sales {
            if let Some(&i) = index.get(sale.location.as_str()) {
                table[i].revenue += sale.price;
            } else {
                index.insert(sale.location.as_str(), table.len());
                table.push(LocationRevenue {
                    location: sale.location.clone(),
                    lat: sale.lat,
                    lon: sale.lon,
                    revenue: sale.price,
                });
            }
        }

        table.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        table
    }

    /// Revenue summed by calendar month (dates truncated to the month
    /// start), annotated with year and month name for the per-year time
    /// series. Chronological order.
    pub fn revenue_by_month(&self, sales: &[Sale]) -> Vec<MonthlyRevenue> {
        let mut by_month: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for sale in sales {
            let month_start = sale
                .purchase_date
                .with_day(1)
                .unwrap_or(sale.purchase_date);
            *by_month.entry(month_start).or_insert(0.0) += sale.price;
        }

        by_month
            .into_iter()
            .map(|(month_start, revenue)| MonthlyRevenue {
                month_start,
                year: month_start.year(),
                month_name: MONTH_NAMES[month_start.month0() as usize].to_string(),
                revenue,
            })
            .collect()
    }

    /// Revenue summed by product category, sorted descending with
    /// stable first-occurrence ties.
    pub fn revenue_by_category(&self, sales: &[Sale]) -> Vec<CategoryRevenue> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut table: Vec<CategoryRevenue> = Vec::new();

        for sale in sales {
            if let Some(&i) = index.get(sale.category.as_str()) {
                table[i].revenue += sale.price;
            } else {
                index.insert(sale.category.as_str(), table.len());
                table.push(CategoryRevenue {
                    category: sale.category.clone(),
                    revenue: sale.price,
                });
            }
        }

        table.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        table
    }

    /// Per-seller revenue sum and transaction count, alphabetical by
    /// seller. Ranking by either metric happens in the chart layer.
    pub fn seller_stats(&self, sales: &[Sale]) -> Vec<SellerStats> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut table: Vec<SellerStats> = Vec::new();

        for sale in sales {
            if let Some(&i) = index.get(sale.seller.as_str()) {
                table[i].revenue += sale.price;
                table[i].sales += 1;
            } else {
                index.insert(sale.seller.as_str(), table.len());
                table.push(SellerStats {
                    seller: sale.seller.clone(),
                    revenue: sale.price,
                    sales: 1,
                });
            }
        }

        table.sort_by(|a, b| a.seller.cmp(&b.seller));
        table
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
