use chrono::Datelike;
use tracing::debug;

use crate::models::filter::{Column, FilterSelection, ProjectedTable};
use crate::models::sale::Sale;

/// Applies the sidebar selections to the sales collection.
///
/// Predicates combine with logical AND; an inactive predicate (empty
/// membership list, `None` range, or sentinel region/year) passes every
/// record. Row filtering and column projection are independent steps:
/// projection never affects which rows are selected.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// The subsequence of `sales` satisfying every active predicate, in
    /// the collection's original order.
    pub fn apply(&self, sales: &[Sale], selection: &FilterSelection) -> Vec<Sale> {
        let filtered: Vec<Sale> = sales
            .iter()
            .filter(|sale| self.matches(sale, selection))
            .cloned()
            .collect();
        debug!(
            input = sales.len(),
            output = filtered.len(),
            "applied filter selection"
        );
        filtered
    }

    /// Seller pre-selection used by the aggregation views.
    /// An empty list selects every seller, consistent with `apply`.
    pub fn by_sellers(&self, sales: &[Sale], sellers: &[String]) -> Vec<Sale> {
        if sellers.is_empty() {
            return sales.to_vec();
        }
        sales
            .iter()
            .filter(|sale| sellers.contains(&sale.seller))
            .cloned()
            .collect()
    }

    /// Project `sales` onto the chosen output columns.
    pub fn project(&self, sales: &[Sale], columns: &[Column]) -> ProjectedTable {
        let rows = sales
            .iter()
            .map(|sale| columns.iter().map(|c| c.cell(sale)).collect())
            .collect();
        ProjectedTable {
            columns: columns.to_vec(),
            rows,
        }
    }

    /// True when `sale` passes every active predicate.
    ///
    /// An empty membership list deliberately selects everything. The
    /// sidebar starts with all values selected, and a cleared
    /// multiselect means "no restriction", not "match nothing".
    pub fn matches(&self, sale: &Sale, selection: &FilterSelection) -> bool {
        Self::in_set(&selection.products, &sale.product)
            && Self::in_set(&selection.categories, &sale.category)
            && Self::in_set(&selection.sellers, &sale.seller)
            && Self::in_set(&selection.locations, &sale.location)
            && Self::in_set(&selection.payment_types, &sale.payment_type)
            && Self::in_range(&selection.price, sale.price)
            && Self::in_range(&selection.freight, sale.freight)
            && Self::in_range(&selection.rating, sale.rating)
            && Self::in_range(&selection.installments, sale.installments)
            && Self::in_range(&selection.purchase_date, sale.purchase_date)
            && selection.region.contains(&sale.location)
            && selection.year.matches(sale.purchase_date.year())
    }

    fn in_set(selection: &[String], value: &str) -> bool {
        selection.is_empty() || selection.iter().any(|v| v == value)
    }

    fn in_range<T: PartialOrd + Copy>(range: &Option<(T, T)>, value: T) -> bool {
        match range {
            Some((min, max)) => *min <= value && value <= *max,
            None => true,
        }
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
