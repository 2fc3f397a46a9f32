/// Unit names walked while the value keeps dividing by 1000.
pub const UNITS: [&str; 2] = ["", "thousand"];

/// Unit used once the value has passed every step in `UNITS`.
pub const TOP_UNIT: &str = "million";

/// Format a metric value with a magnitude suffix and optional prefix.
///
/// Divides by 1000 while the value is at least 1000, walking
/// "" → "thousand" → "million", then renders with two decimal places.
///
/// ```
/// use sales_dashboard_core::format::format_magnitude;
///
/// assert_eq!(format_magnitude(1500.0, ""), "1.50 thousand");
/// assert_eq!(format_magnitude(2_500_000.0, "R$"), "R$ 2.50 million");
/// ```
pub fn format_magnitude(value: f64, prefix: &str) -> String {
    let mut value = value;
    let mut unit = TOP_UNIT;
    for step in UNITS {
        if value < 1000.0 {
            unit = step;
            break;
        }
        value /= 1000.0;
    }
    let body = format!("{value:.2} {unit}");
    if prefix.is_empty() {
        body
    } else {
        format!("{prefix} {body}")
    }
}
