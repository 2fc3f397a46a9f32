pub mod aggregation_service;
pub mod chart_service;
pub mod export_service;
pub mod filter_service;
