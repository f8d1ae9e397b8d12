//! Display formatting for card text

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::plan::Price;

/// Shown in place of a missing value
pub const NOT_AVAILABLE: &str = "N/A";

/// Month, day and 12-hour time, e.g. `May 7, 3:05 PM`
const DISPLAY_FORMAT: &str = "%b %-d, %-I:%M %p";

/// Offsets written without a colon, e.g. `+0000`
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a flight timestamp for display
///
/// Timestamps without an offset are shown as-is; ones with an offset are
/// shown in that offset (the airport's local time). Anything unparseable is
/// passed through verbatim.
pub fn format_flight_time(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, COMPACT_OFFSET_FORMAT))
    {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return midnight.format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}

/// `Price: $129.00`, or the backend's text verbatim
pub fn format_price(price: Option<&Price>) -> String {
    match price {
        Some(price) => format!("Price: ${}", price),
        None => format!("Price: {}", NOT_AVAILABLE),
    }
}

/// `BOS → ORD`
pub fn route_title(from: Option<&str>, to: Option<&str>) -> String {
    format!(
        "{} → {}",
        from.unwrap_or(NOT_AVAILABLE),
        to.unwrap_or(NOT_AVAILABLE)
    )
}

/// `⭐ 4.7 · 32110 reviews`
pub fn rating_line(rating: Option<f64>, reviews: Option<u64>) -> String {
    let rating = rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let reviews = reviews
        .map(|r| r.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!("⭐ {} · {} reviews", rating, reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_timestamp() {
        assert_eq!(format_flight_time(Some("2025-05-07T15:05:00")), "May 7, 3:05 PM");
        assert_eq!(format_flight_time(Some("2025-12-24T09:00")), "Dec 24, 9:00 AM");
        assert_eq!(format_flight_time(Some("2025-05-07 00:30:00")), "May 7, 12:30 AM");
    }

    #[test]
    fn test_offset_timestamp_keeps_local_time() {
        assert_eq!(
            format_flight_time(Some("2025-05-07T09:30:00-05:00")),
            "May 7, 9:30 AM"
        );
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(
            format_flight_time(Some("2025-05-07T06:00:00.000+0000")),
            "May 7, 6:00 AM"
        );
        assert_eq!(
            format_flight_time(Some("2025-05-07T18:45:00-0500")),
            "May 7, 6:45 PM"
        );
    }

    #[test]
    fn test_date_only_and_garbage() {
        assert_eq!(format_flight_time(Some("2025-07-01")), "Jul 1, 12:00 AM");
        assert_eq!(format_flight_time(Some("tomorrow morning")), "tomorrow morning");
        assert_eq!(format_flight_time(None), "N/A");
        assert_eq!(format_flight_time(Some("  ")), "N/A");
    }

    #[test]
    fn test_price() {
        assert_eq!(format_price(Some(&Price::Amount(129.0))), "Price: $129.00");
        assert_eq!(format_price(Some(&Price::Amount(99.999))), "Price: $100.00");
        assert_eq!(format_price(Some(&Price::Text("142.3".to_string()))), "Price: $142.3");
        assert_eq!(format_price(None), "Price: N/A");
    }

    #[test]
    fn test_rating_line() {
        assert_eq!(rating_line(Some(4.7), Some(32110)), "⭐ 4.7 · 32110 reviews");
        assert_eq!(rating_line(Some(5.0), None), "⭐ 5 · N/A reviews");
    }

    #[test]
    fn test_route_title() {
        assert_eq!(route_title(Some("BOS"), Some("ORD")), "BOS → ORD");
        assert_eq!(route_title(None, Some("ORD")), "N/A → ORD");
    }
}
