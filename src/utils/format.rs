//! Display formatting for dashboard values. Missing values render as zero.

pub fn format_currency(value: Option<f64>) -> String {
    format!("${:.2}", value.unwrap_or(0.0))
}

pub fn format_kwh(value: Option<f64>) -> String {
    format!("{:.1} kWh", value.unwrap_or(0.0))
}

pub fn format_kw(value: Option<f64>) -> String {
    format!("{:.1} kW", value.unwrap_or(0.0))
}

pub fn format_hours(value: Option<f64>) -> String {
    format!("{:.1} hrs", value.unwrap_or(0.0))
}

pub fn format_percent(value: Option<f64>) -> String {
    format!("{:.1}%", value.unwrap_or(0.0))
}

pub fn format_rate(value: Option<f64>) -> String {
    format!("${:.2}/kWh", value.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(format_currency(Some(15.0)), "$15.00");
        assert_eq!(format_kwh(Some(50.0)), "50.0 kWh");
        assert_eq!(format_kw(Some(33.26)), "33.3 kW");
        assert_eq!(format_hours(Some(10.0)), "10.0 hrs");
        assert_eq!(format_percent(Some(41.7)), "41.7%");
        assert_eq!(format_rate(Some(0.3)), "$0.30/kWh");
    }

    #[test]
    fn test_missing_values_render_as_zero() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_percent(None), "0.0%");
    }
}
