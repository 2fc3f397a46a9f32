use serde::{Deserialize, Serialize};

/// Geographic bubble map of revenue by location.
///
/// The core computes all the numbers; the frontend only renders.
/// Bubble size is the summed revenue at the point's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueMap {
    pub title: String,

    /// One bubble per location, in descending revenue order
    pub points: Vec<MapPoint>,
}

/// A single bubble on the revenue map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Purchase location (hover label)
    pub location: String,

    pub lat: f64,

    pub lon: f64,

    /// Bubble size: summed revenue at this location
    pub size: f64,
}

/// Monthly revenue time series, one line per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,

    /// Y-axis label
    pub y_label: String,

    /// Upper bound of the y-axis range; the lower bound is always 0
    pub y_max: f64,

    /// One series per calendar year, chronological
    pub series: Vec<YearSeries>,
}

/// One year's line in the monthly revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSeries {
    pub year: i32,

    /// Month points in calendar order
    pub points: Vec<MonthPoint>,
}

/// A single month's value on a year line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    /// English month name (x-axis label)
    pub month_name: String,

    pub revenue: f64,
}

/// A ranked bar chart (top locations, categories, sellers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,

    /// Value-axis label
    pub y_label: String,

    /// True for horizontal bars (seller rankings)
    pub horizontal: bool,

    /// Bars in display order, largest value first
    pub bars: Vec<Bar>,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,

    pub value: f64,
}

/// Scalar dashboard metrics with their display strings.
///
/// Revenue carries the configured currency prefix; the sales count is
/// magnitude-formatted without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Sum of sale prices over the (possibly pre-filtered) collection
    pub total_revenue: f64,

    /// Number of transactions
    pub sales_count: usize,

    /// Magnitude-formatted revenue, e.g. "R$ 1.50 million"
    pub revenue_display: String,

    /// Magnitude-formatted count, e.g. "8.73 thousand"
    pub sales_display: String,
}
