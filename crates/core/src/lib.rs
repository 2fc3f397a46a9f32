pub mod errors;
pub mod format;
pub mod loader;
pub mod models;
pub mod services;

use std::collections::HashSet;

use chrono::NaiveDate;

use loader::SalesLoader;
use models::{
    aggregate::{CategoryRevenue, LocationRevenue, MonthlyRevenue, SellerStats},
    chart::{BarChart, LineChart, RevenueMap, SummaryMetrics},
    export::CsvExport,
    filter::{Column, FilterSelection, ProjectedTable},
    sale::Sale,
    settings::Settings,
};
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    export_service::ExportService, filter_service::FilterService,
};

use errors::CoreError;

/// Main entry point for the Sales Dashboard core library.
/// Holds the loaded sales collection and the services that answer every
/// dashboard interaction: filtering, aggregation, charts, and export.
///
/// The collection is loaded once per session and never mutated; each
/// widget change re-runs one synchronous pass over it. Widget state is
/// passed in explicitly (`FilterSelection`, seller lists, counts), so
/// every operation is a pure function of collection + selections.
#[must_use]
pub struct SalesDashboard {
    sales: Vec<Sale>,
    settings: Settings,
    aggregation_service: AggregationService,
    filter_service: FilterService,
    chart_service: ChartService,
    export_service: ExportService,
}

impl std::fmt::Debug for SalesDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesDashboard")
            .field("sales", &self.sales.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl SalesDashboard {
    /// Load the collection from the default data path in `Settings`.
    pub fn load() -> Result<Self, CoreError> {
        let settings = Settings::default();
        let sales = SalesLoader::load_from_file(&settings.data_path)?;
        Ok(Self::build(sales, settings))
    }

    /// Load the collection from the JSON file at `path`.
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let sales = SalesLoader::load_from_file(path)?;
        Ok(Self::build(sales, Settings::default()))
    }

    /// Build a dashboard from a JSON document already in memory.
    /// Use this for frontends that handle file I/O themselves.
    pub fn load_from_json(json: &str) -> Result<Self, CoreError> {
        let sales = SalesLoader::load_from_json(json)?;
        Ok(Self::build(sales, Settings::default()))
    }

    /// Replace the default settings (currency prefix, paths).
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    // ── Collection access ───────────────────────────────────────────

    /// The loaded collection, in input order.
    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Total number of loaded records.
    #[must_use]
    pub fn sale_count(&self) -> usize {
        self.sales.len()
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Widget population ───────────────────────────────────────────

    /// Distinct product names, sorted. Feeds the product multiselect.
    #[must_use]
    pub fn products(&self) -> Vec<String> {
        Self::sorted_unique(self.sales.iter().map(|s| s.product.as_str()))
    }

    /// Distinct categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        Self::sorted_unique(self.sales.iter().map(|s| s.category.as_str()))
    }

    /// Distinct sellers, sorted.
    #[must_use]
    pub fn sellers(&self) -> Vec<String> {
        Self::sorted_unique(self.sales.iter().map(|s| s.seller.as_str()))
    }

    /// Distinct purchase locations, sorted.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        Self::sorted_unique(self.sales.iter().map(|s| s.location.as_str()))
    }

    /// Distinct payment types, sorted.
    #[must_use]
    pub fn payment_types(&self) -> Vec<String> {
        Self::sorted_unique(self.sales.iter().map(|s| s.payment_type.as_str()))
    }

    /// Earliest purchase date in the collection.
    /// Lower bound for the date-range widget.
    #[must_use]
    pub fn earliest_purchase_date(&self) -> Option<NaiveDate> {
        self.sales.iter().map(|s| s.purchase_date).min()
    }

    /// Latest purchase date in the collection.
    #[must_use]
    pub fn latest_purchase_date(&self) -> Option<NaiveDate> {
        self.sales.iter().map(|s| s.purchase_date).max()
    }

    // ── Filtering ───────────────────────────────────────────────────

    /// Records satisfying every active predicate, in input order.
    #[must_use]
    pub fn filter(&self, selection: &FilterSelection) -> Vec<Sale> {
        self.filter_service.apply(&self.sales, selection)
    }

    /// Row-filter, then project onto the chosen output columns.
    #[must_use]
    pub fn project(&self, selection: &FilterSelection, columns: &[Column]) -> ProjectedTable {
        let rows = self.filter_service.apply(&self.sales, selection);
        self.filter_service.project(&rows, columns)
    }

    // ── Aggregation views ───────────────────────────────────────────
    // Each view takes the seller pre-selection; an empty list means
    // every seller.

    /// Revenue by purchase location, descending.
    #[must_use]
    pub fn revenue_by_location(&self, sellers: &[String]) -> Vec<LocationRevenue> {
        let subset = self.filter_service.by_sellers(&self.sales, sellers);
        self.aggregation_service.revenue_by_location(&subset)
    }

    /// Revenue by calendar month, chronological.
    #[must_use]
    pub fn revenue_by_month(&self, sellers: &[String]) -> Vec<MonthlyRevenue> {
        let subset = self.filter_service.by_sellers(&self.sales, sellers);
        self.aggregation_service.revenue_by_month(&subset)
    }

    /// Revenue by category, descending.
    #[must_use]
    pub fn revenue_by_category(&self, sellers: &[String]) -> Vec<CategoryRevenue> {
        let subset = self.filter_service.by_sellers(&self.sales, sellers);
        self.aggregation_service.revenue_by_category(&subset)
    }

    /// Per-seller revenue and transaction count, alphabetical.
    #[must_use]
    pub fn seller_stats(&self, sellers: &[String]) -> Vec<SellerStats> {
        let subset = self.filter_service.by_sellers(&self.sales, sellers);
        self.aggregation_service.seller_stats(&subset)
    }

    // ── Charts & metrics ────────────────────────────────────────────

    /// Bubble map of revenue by location.
    #[must_use]
    pub fn revenue_map(&self, sellers: &[String]) -> RevenueMap {
        self.chart_service
            .revenue_map(&self.revenue_by_location(sellers))
    }

    /// Monthly revenue line chart, one line per year.
    #[must_use]
    pub fn monthly_revenue_chart(&self, sellers: &[String]) -> LineChart {
        self.chart_service
            .monthly_revenue_chart(&self.revenue_by_month(sellers))
    }

    /// Bar chart of the top locations by revenue.
    #[must_use]
    pub fn top_locations_chart(&self, sellers: &[String]) -> BarChart {
        self.chart_service
            .top_locations_chart(&self.revenue_by_location(sellers))
    }

    /// Bar chart of revenue by category.
    #[must_use]
    pub fn category_chart(&self, sellers: &[String]) -> BarChart {
        self.chart_service
            .category_chart(&self.revenue_by_category(sellers))
    }

    /// Bar chart of the top `count` sellers by revenue.
    /// `count` must stay within the seller-count bounds.
    pub fn top_sellers_by_revenue_chart(
        &self,
        sellers: &[String],
        count: usize,
    ) -> Result<BarChart, CoreError> {
        self.chart_service
            .top_sellers_by_revenue(&self.seller_stats(sellers), count)
    }

    /// Bar chart of the top `count` sellers by transaction count.
    pub fn top_sellers_by_sales_chart(
        &self,
        sellers: &[String],
        count: usize,
    ) -> Result<BarChart, CoreError> {
        self.chart_service
            .top_sellers_by_sales(&self.seller_stats(sellers), count)
    }

    /// Total revenue and transaction count with their display strings.
    #[must_use]
    pub fn summary_metrics(&self, sellers: &[String]) -> SummaryMetrics {
        let subset = self.filter_service.by_sellers(&self.sales, sellers);
        self.chart_service
            .summary_metrics(&subset, &self.settings.currency_prefix)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the filtered, projected table as a downloadable CSV.
    /// Blank `name` falls back to the configured export name.
    #[must_use]
    pub fn export_csv(
        &self,
        selection: &FilterSelection,
        columns: &[Column],
        name: &str,
    ) -> CsvExport {
        let rows = self.filter_service.apply(&self.sales, selection);
        self.export_service
            .export(&rows, columns, name, &self.settings.export_name)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(sales: Vec<Sale>, settings: Settings) -> Self {
        Self {
            sales,
            settings,
            aggregation_service: AggregationService::new(),
            filter_service: FilterService::new(),
            chart_service: ChartService::new(),
            export_service: ExportService::new(),
        }
    }

    fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out: Vec<String> = Vec::new();
        for value in values {
            if seen.insert(value) {
                out.push(value.to_string());
            }
        }
        out.sort();
        out
    }
}
