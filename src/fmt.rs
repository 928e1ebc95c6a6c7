//! Text formatting shared by the report writers.

use chrono::NaiveDateTime;

/// Timestamp layout used in the CSV table and the HTML chart.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `2024-01-01 00:00:00`
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Full-precision GiB value in fixed-point notation, always with a decimal
/// point.
///
/// `16.0` -> `"16.0"`, `1000.0 / 1024.0` -> `"0.9765625"`
pub fn format_gib(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Axis tick label: `01-01 00:10`
pub fn format_tick(ts: &NaiveDateTime) -> String {
    ts.format("%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-07 09:05:01");
        assert_eq!(format_tick(&ts), "03-07 09:05");
    }

    #[test]
    fn test_format_gib() {
        assert_eq!(format_gib(16.0), "16.0");
        assert_eq!(format_gib(2048.0 / 1024.0), "2.0");
        assert_eq!(format_gib(1000.0 / 1024.0), "0.9765625");
        assert_eq!(format_gib(0.0), "0.0");
    }

    #[test]
    fn test_format_gib_never_uses_exponent() {
        assert_eq!(format_gib(0.01 / 1024.0), "0.000009765625");
        assert_eq!(format_gib(1e17), "100000000000000000.0");
    }
}
