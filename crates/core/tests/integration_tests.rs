// ═══════════════════════════════════════════════════════════════════
// Integration Tests — SalesDashboard facade, full load → filter →
// aggregate → chart → export passes
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use sales_dashboard_core::errors::CoreError;
use sales_dashboard_core::models::filter::{Column, FilterSelection};
use sales_dashboard_core::models::region::Region;
use sales_dashboard_core::models::settings::Settings;
use sales_dashboard_core::SalesDashboard;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn record(
    product: &str,
    category: &str,
    price: f64,
    date: &str,
    seller: &str,
    location: &str,
    lat: f64,
    lon: f64,
    payment: &str,
) -> String {
    format!(
        r#"{{
            "Produto": "{product}",
            "Categoria do Produto": "{category}",
            "Preço": {price},
            "Frete": 15.0,
            "Data da Compra": "{date}",
            "Vendedor": "{seller}",
            "Local da compra": "{location}",
            "lat": {lat},
            "lon": {lon},
            "Avaliação da compra": 4,
            "Tipo de pagamento": "{payment}",
            "Quantidade de parcelas": 2
        }}"#
    )
}

fn fixture_json() -> String {
    let records = [
        record(
            "Camisa",
            "Vestuário",
            100.0,
            "10/01/2021",
            "Ana",
            "São Paulo",
            -22.19,
            -48.79,
            "cartao_credito",
        ),
        record(
            "Camisa",
            "Vestuário",
            200.0,
            "25/01/2021",
            "Ana",
            "São Paulo",
            -22.19,
            -48.79,
            "boleto",
        ),
        record(
            "Livro",
            "Livros",
            50.0,
            "05/02/2021",
            "Bruno",
            "Rio de Janeiro",
            -22.25,
            -42.66,
            "cartao_credito",
        ),
        record(
            "Tênis",
            "Esporte",
            300.0,
            "14/01/2022",
            "Bruno",
            "Paraná",
            -24.89,
            -51.55,
            "pix",
        ),
        record(
            "Bola",
            "Esporte",
            80.0,
            "02/03/2022",
            "Carla",
            "Paraná",
            -24.89,
            -51.55,
            "cartao_credito",
        ),
    ];
    format!("[{}]", records.join(","))
}

fn dashboard() -> SalesDashboard {
    SalesDashboard::load_from_json(&fixture_json()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Loading
// ═══════════════════════════════════════════════════════════════════

mod loading {
    use super::*;

    #[test]
    fn loads_from_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("produto.json");
        std::fs::write(&path, fixture_json()).unwrap();

        let dashboard = SalesDashboard::load_from_file(path.to_str().unwrap()).unwrap();

        assert_eq!(dashboard.sale_count(), 5);
    }

    #[test]
    fn missing_file_is_terminal() {
        // A load failure yields no dashboard at all, so no aggregation
        // or rendering can run afterwards
        let result = SalesDashboard::load_from_file("nowhere/produto.json");

        assert!(matches!(result, Err(CoreError::FileNotFound(_))));
    }

    #[test]
    fn malformed_content_is_terminal() {
        let result = SalesDashboard::load_from_json("not a sales document");

        assert!(matches!(result, Err(CoreError::ParseError(_))));
    }

    #[test]
    fn default_settings_come_along() {
        let dashboard = dashboard();
        assert_eq!(dashboard.settings().currency_prefix, "R$");
        assert_eq!(dashboard.settings().data_path, "produto.json");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Widget population
// ═══════════════════════════════════════════════════════════════════

mod widgets {
    use super::*;

    #[test]
    fn unique_sorted_values_per_widget() {
        let dashboard = dashboard();

        assert_eq!(
            dashboard.products(),
            vec!["Bola", "Camisa", "Livro", "Tênis"]
        );
        assert_eq!(
            dashboard.categories(),
            vec!["Esporte", "Livros", "Vestuário"]
        );
        assert_eq!(dashboard.sellers(), vec!["Ana", "Bruno", "Carla"]);
        assert_eq!(
            dashboard.locations(),
            vec!["Paraná", "Rio de Janeiro", "São Paulo"]
        );
        assert_eq!(
            dashboard.payment_types(),
            vec!["boleto", "cartao_credito", "pix"]
        );
    }

    #[test]
    fn date_bounds_for_range_widget() {
        let dashboard = dashboard();
        assert_eq!(dashboard.earliest_purchase_date(), Some(d(2021, 1, 10)));
        assert_eq!(dashboard.latest_purchase_date(), Some(d(2022, 3, 2)));
    }

    #[test]
    fn date_bounds_of_empty_collection() {
        let dashboard = SalesDashboard::load_from_json("[]").unwrap();
        assert_eq!(dashboard.earliest_purchase_date(), None);
        assert_eq!(dashboard.latest_purchase_date(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Filtering through the facade
// ═══════════════════════════════════════════════════════════════════

mod filtering {
    use super::*;

    #[test]
    fn default_selection_keeps_the_whole_table() {
        let dashboard = dashboard();
        let out = dashboard.filter(&FilterSelection::default());
        assert_eq!(out.len(), dashboard.sale_count());
    }

    #[test]
    fn combined_predicates() {
        let dashboard = dashboard();
        let selection = FilterSelection {
            categories: vec!["Esporte".to_string()],
            price: Some((100.0, 400.0)),
            ..FilterSelection::default()
        };

        let out = dashboard.filter(&selection);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product, "Tênis");
    }

    #[test]
    fn region_filter_through_facade() {
        let dashboard = dashboard();
        let selection = FilterSelection {
            region: Region::Sul,
            ..FilterSelection::default()
        };

        let out = dashboard.filter(&selection);

        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|s| s.location == "Paraná"));
    }

    #[test]
    fn projection_shapes_the_view() {
        let dashboard = dashboard();
        let table = dashboard.project(
            &FilterSelection::default(),
            &[Column::Product, Column::Price, Column::PurchaseDate],
        );

        assert_eq!(table.row_count(), 5);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.headers(), vec!["Produto", "Preço", "Data da Compra"]);
        assert_eq!(table.rows[0], vec!["Camisa", "100", "10/01/2021"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Aggregation & charts through the facade
// ═══════════════════════════════════════════════════════════════════

mod aggregation {
    use super::*;

    #[test]
    fn location_revenue_sums_to_total() {
        let dashboard = dashboard();

        let table = dashboard.revenue_by_location(&[]);
        let summed: f64 = table.iter().map(|l| l.revenue).sum();
        let total: f64 = dashboard.sales().iter().map(|s| s.price).sum();

        assert!((summed - total).abs() < 1e-9);
    }

    #[test]
    fn seller_preselection_narrows_the_views() {
        let dashboard = dashboard();
        let only_ana = vec!["Ana".to_string()];

        let table = dashboard.revenue_by_location(&only_ana);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].location, "São Paulo");
        assert!((table[0].revenue - 300.0).abs() < 1e-9);
    }

    #[test]
    fn empty_preselection_means_every_seller() {
        let dashboard = dashboard();
        assert_eq!(dashboard.seller_stats(&[]).len(), 3);
    }

    #[test]
    fn charts_are_wired_to_the_tables() {
        let dashboard = dashboard();

        let map = dashboard.revenue_map(&[]);
        assert_eq!(map.points.len(), 3);
        assert_eq!(map.points[0].location, "Paraná"); // 380 beats 300 and 50

        let line = dashboard.monthly_revenue_chart(&[]);
        assert_eq!(line.series.len(), 2);

        let top = dashboard.top_locations_chart(&[]);
        assert_eq!(top.bars.len(), 3);

        let categories = dashboard.category_chart(&[]);
        assert_eq!(categories.bars[0].label, "Esporte"); // 380
    }

    #[test]
    fn seller_charts_validate_count() {
        let dashboard = dashboard();

        assert!(dashboard.top_sellers_by_revenue_chart(&[], 1).is_err());
        assert!(dashboard.top_sellers_by_sales_chart(&[], 11).is_err());

        let chart = dashboard.top_sellers_by_revenue_chart(&[], 2).unwrap();
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "Bruno"); // 350 beats Ana's 300
    }

    #[test]
    fn summary_metrics_use_the_currency_prefix() {
        let dashboard = dashboard();

        let metrics = dashboard.summary_metrics(&[]);

        assert!((metrics.total_revenue - 730.0).abs() < 1e-9);
        assert_eq!(metrics.sales_count, 5);
        assert_eq!(metrics.revenue_display, "R$ 730.00 ");
        assert_eq!(metrics.sales_display, "5.00 ");
    }

    #[test]
    fn custom_settings_change_the_prefix() {
        let dashboard = dashboard().with_settings(Settings {
            currency_prefix: "US$".to_string(),
            ..Settings::default()
        });

        let metrics = dashboard.summary_metrics(&[]);

        assert_eq!(metrics.revenue_display, "US$ 730.00 ");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Export round-trip
// ═══════════════════════════════════════════════════════════════════

mod export {
    use super::*;

    /// Minimal CSV reader for round-trip checks. The fixture data
    /// contains no quoted fields.
    fn parse_csv(content: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut lines = content.lines();
        let header = lines
            .next()
            .unwrap()
            .split(',')
            .map(str::to_string)
            .collect();
        let rows = lines
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn round_trip_preserves_rows_and_columns() {
        let dashboard = dashboard();
        let selection = FilterSelection {
            sellers: vec!["Ana".to_string(), "Bruno".to_string()],
            ..FilterSelection::default()
        };
        let columns = [Column::Product, Column::Seller, Column::Price];

        let filtered = dashboard.filter(&selection);
        let export = dashboard.export_csv(&selection, &columns, "relatorio");

        let (header, rows) = parse_csv(&export.content);
        assert_eq!(rows.len(), filtered.len());
        assert_eq!(header, vec!["Produto", "Vendedor", "Preço"]);
    }

    #[test]
    fn export_name_falls_back_to_settings() {
        let dashboard = dashboard();

        let export = dashboard.export_csv(&FilterSelection::default(), &Column::ALL, "");

        assert_eq!(export.file_name, "sales.csv");
    }

    #[test]
    fn export_name_gets_the_extension() {
        let dashboard = dashboard();

        let export =
            dashboard.export_csv(&FilterSelection::default(), &Column::ALL, "relatorio");

        assert_eq!(export.file_name, "relatorio.csv");
    }

    #[test]
    fn export_carries_the_transient_notice() {
        let dashboard = dashboard();

        let export = dashboard.export_csv(&FilterSelection::default(), &Column::ALL, "x");

        assert_eq!(export.notice.message, "File downloaded successfully!");
        assert_eq!(export.notice.display_duration.as_secs(), 5);
    }

    #[test]
    fn export_respects_row_filtering() {
        let dashboard = dashboard();
        let selection = FilterSelection {
            locations: vec!["Paraná".to_string()],
            ..FilterSelection::default()
        };

        let export = dashboard.export_csv(&selection, &[Column::Location], "x");

        let (_, rows) = parse_csv(&export.content);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row[0] == "Paraná"));
    }
}
