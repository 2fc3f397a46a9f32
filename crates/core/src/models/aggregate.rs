use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Revenue summed over one purchase location, joined with the
/// location's coordinates for the bubble map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRevenue {
    /// Purchase location (state name)
    pub location: String,

    /// Latitude of the location
    pub lat: f64,

    /// Longitude of the location
    pub lon: f64,

    /// Sum of sale prices at this location
    pub revenue: f64,
}

/// Revenue summed over one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// First day of the month
    pub month_start: NaiveDate,

    /// Calendar year, used to split the time series into one line per year
    pub year: i32,

    /// English month name (e.g., "January")
    pub month_name: String,

    /// Sum of sale prices in this month
    pub revenue: f64,
}

/// Revenue summed over one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    /// Product category
    pub category: String,

    /// Sum of sale prices in this category
    pub revenue: f64,
}

/// Per-seller totals: revenue sum and transaction count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerStats {
    /// Seller name
    pub seller: String,

    /// Sum of sale prices for this seller
    pub revenue: f64,

    /// Number of transactions for this seller
    pub sales: usize,
}
