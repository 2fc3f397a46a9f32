use crate::errors::CoreError;
use crate::format::format_magnitude;
use crate::models::aggregate::{CategoryRevenue, LocationRevenue, MonthlyRevenue, SellerStats};
use crate::models::chart::{
    Bar, BarChart, LineChart, MapPoint, MonthPoint, RevenueMap, SummaryMetrics, YearSeries,
};
use crate::models::sale::Sale;

/// How many locations the top-locations bar chart shows.
pub const TOP_LOCATIONS: usize = 5;

/// Bounds and default for the user-configurable seller count.
pub const SELLER_COUNT_MIN: usize = 2;
pub const SELLER_COUNT_MAX: usize = 10;
pub const SELLER_COUNT_DEFAULT: usize = 5;

/// Maps aggregation outputs to chart specifications and metric strings.
///
/// The core computes all the numbers; the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Geographic bubble map of revenue by location.
    pub fn revenue_map(&self, by_location: &[LocationRevenue]) -> RevenueMap {
        RevenueMap {
            title: "Revenue by state".to_string(),
            points: by_location
                .iter()
                .map(|entry| MapPoint {
                    location: entry.location.clone(),
                    lat: entry.lat,
                    lon: entry.lon,
                    size: entry.revenue,
                })
                .collect(),
        }
    }

    /// Monthly revenue time series split into one line per year.
    /// The y-axis runs from 0 to the largest monthly revenue.
    pub fn monthly_revenue_chart(&self, by_month: &[MonthlyRevenue]) -> LineChart {
        let mut series: Vec<YearSeries> = Vec::new();

        for month in by_month {
            let point = MonthPoint {
                month_name: month.month_name.clone(),
                revenue: month.revenue,
            };
            match series.iter().position(|s| s.year == month.year) {
                Some(i) => series[i].points.push(point),
                None => series.push(YearSeries {
                    year: month.year,
                    points: vec![point],
                }),
            }
        }

        let y_max = by_month.iter().map(|m| m.revenue).fold(0.0, f64::max);

        LineChart {
            title: "Monthly revenue".to_string(),
            y_label: "Revenue".to_string(),
            y_max,
            series,
        }
    }

    /// Top locations by revenue: the first `TOP_LOCATIONS` entries of
    /// the (already descending) location table.
    pub fn top_locations_chart(&self, by_location: &[LocationRevenue]) -> BarChart {
        BarChart {
            title: "Top states (revenue)".to_string(),
            y_label: "Revenue".to_string(),
            horizontal: false,
            bars: by_location
                .iter()
                .take(TOP_LOCATIONS)
                .map(|entry| Bar {
                    label: entry.location.clone(),
                    value: entry.revenue,
                })
                .collect(),
        }
    }

    /// Revenue by category, one bar per category.
    pub fn category_chart(&self, by_category: &[CategoryRevenue]) -> BarChart {
        BarChart {
            title: "Revenue by category".to_string(),
            y_label: "Revenue".to_string(),
            horizontal: false,
            bars: by_category
                .iter()
                .map(|entry| Bar {
                    label: entry.category.clone(),
                    value: entry.revenue,
                })
                .collect(),
        }
    }

    /// Top `count` sellers by revenue, horizontal bars.
    /// `count` must stay within [`SELLER_COUNT_MIN`, `SELLER_COUNT_MAX`].
    pub fn top_sellers_by_revenue(
        &self,
        stats: &[SellerStats],
        count: usize,
    ) -> Result<BarChart, CoreError> {
        Self::validate_seller_count(count)?;

        let mut ranked: Vec<&SellerStats> = stats.iter().collect();
        ranked.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(BarChart {
            title: format!("Top {count} sellers (revenue)"),
            y_label: "Revenue".to_string(),
            horizontal: true,
            bars: ranked
                .into_iter()
                .take(count)
                .map(|s| Bar {
                    label: s.seller.clone(),
                    value: s.revenue,
                })
                .collect(),
        })
    }

    /// Top `count` sellers by number of transactions, horizontal bars.
    pub fn top_sellers_by_sales(
        &self,
        stats: &[SellerStats],
        count: usize,
    ) -> Result<BarChart, CoreError> {
        Self::validate_seller_count(count)?;

        let mut ranked: Vec<&SellerStats> = stats.iter().collect();
        ranked.sort_by(|a, b| b.sales.cmp(&a.sales));

        Ok(BarChart {
            title: format!("Top {count} sellers (sales count)"),
            y_label: "Sales".to_string(),
            horizontal: true,
            bars: ranked
                .into_iter()
                .take(count)
                .map(|s| Bar {
                    label: s.seller.clone(),
                    value: s.sales as f64,
                })
                .collect(),
        })
    }

    /// Scalar dashboard metrics: total revenue (with the currency
    /// prefix) and total transaction count (without one), both
    /// magnitude-formatted.
    pub fn summary_metrics(&self, sales: &[Sale], currency_prefix: &str) -> SummaryMetrics {
        let total_revenue: f64 = sales.iter().map(|s| s.price).sum();
        let sales_count = sales.len();

        SummaryMetrics {
            total_revenue,
            sales_count,
            revenue_display: format_magnitude(total_revenue, currency_prefix),
            sales_display: format_magnitude(sales_count as f64, ""),
        }
    }

    fn validate_seller_count(count: usize) -> Result<(), CoreError> {
        if !(SELLER_COUNT_MIN..=SELLER_COUNT_MAX).contains(&count) {
            return Err(CoreError::ValidationError(format!(
                "Seller count {count} out of range (expected {SELLER_COUNT_MIN}..={SELLER_COUNT_MAX})"
            )));
        }
        Ok(())
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
