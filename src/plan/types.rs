//! Plan data model
//!
//! Typed, validated view of one planning backend response. Every item field
//! is optional: the UI has to cope with whatever subset the agent produced.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{PlanError, FAILED_TO_GET_PLAN};
use super::lenient;

/// Outcome of the most recent plan request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanResult {
    /// Backend answered with something renderable
    Success(TripPlan),
    /// Request failed; only the message is shown
    Error { error: String },
}

impl PlanResult {
    /// The generic failure result
    pub fn failed() -> Self {
        PlanResult::Error {
            error: FAILED_TO_GET_PLAN.to_string(),
        }
    }

    /// Collapse a fetch/decode outcome into a result, logging the cause
    pub fn from_outcome(outcome: Result<TripPlan, PlanError>) -> Self {
        match outcome {
            Ok(plan) => PlanResult::Success(plan),
            Err(e) => {
                tracing::error!(error = %e, "Fetch or parse error");
                Self::failed()
            }
        }
    }

    pub fn plan(&self) -> Option<&TripPlan> {
        match self {
            PlanResult::Success(plan) => Some(plan),
            PlanResult::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PlanResult::Success(_) => None,
            PlanResult::Error { error } => Some(error),
        }
    }
}

/// Flattened plan: summary plus the structured sections
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripPlan {
    pub summary: Option<String>,
    pub metadata: Option<TripMetadata>,
    pub events: Vec<EventItem>,
    pub flights: Vec<FlightItem>,
    pub hotels: Vec<HotelItem>,
    pub attractions: Vec<AttractionItem>,
}

impl TripPlan {
    /// True when nothing in the plan would render
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.metadata.is_none()
            && self.events.is_empty()
            && self.flights.is_empty()
            && self.hotels.is_empty()
            && self.attractions.is_empty()
    }
}

/// Destination and date the backend extracted from the prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripMetadata {
    #[serde(deserialize_with = "lenient::string")]
    pub destination: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub date: Option<String>,
}

impl TripMetadata {
    /// Drop the backend's "unknown" placeholder; `None` if nothing is left
    pub fn normalized(self) -> Option<Self> {
        fn known(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().eq_ignore_ascii_case("unknown"))
        }

        let metadata = TripMetadata {
            destination: known(self.destination),
            date: known(self.date),
        };

        if metadata.destination.is_none() && metadata.date.is_none() {
            None
        } else {
            Some(metadata)
        }
    }
}

/// Ticketed event near the destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventItem {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub venue: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub image: Option<String>,
}

/// One flight offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightItem {
    #[serde(deserialize_with = "lenient::string")]
    pub airline: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub from: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub to: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub departure_time: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub arrival_time: Option<String>,
    #[serde(deserialize_with = "lenient::price")]
    pub price: Option<Price>,
}

/// Hotel offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelItem {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

/// Point of interest, optionally geocoded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractionItem {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub lat: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub lng: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub reviews: Option<u64>,
    #[serde(deserialize_with = "lenient::string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub maps_url: Option<String>,
}

/// Flight price as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{:.2}", amount),
            Price::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Amount(129.5).to_string(), "129.50");
        assert_eq!(Price::Amount(88.0).to_string(), "88.00");
        assert_eq!(Price::Text("about 90".to_string()).to_string(), "about 90");
    }

    #[test]
    fn test_flight_tolerates_wrong_types() {
        let flight: FlightItem = serde_json::from_value(json!({
            "airline": {"code": "AA"},
            "from": "BOS",
            "to": "ORD",
            "price": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(flight.airline, None);
        assert_eq!(flight.from.as_deref(), Some("BOS"));
        assert_eq!(flight.price, None);
        assert_eq!(flight.departure_time, None);
    }

    #[test]
    fn test_attraction_numeric_strings() {
        let attraction: AttractionItem = serde_json::from_value(json!({
            "name": "Millennium Park",
            "lat": "41.8826",
            "lng": -87.6226,
            "rating": 4.8,
            "reviews": "150000"
        }))
        .unwrap();

        assert_eq!(attraction.lat, Some(41.8826));
        assert_eq!(attraction.lng, Some(-87.6226));
        assert_eq!(attraction.reviews, Some(150_000));
    }

    #[test]
    fn test_metadata_unknown_is_absent() {
        let metadata = TripMetadata {
            destination: Some("unknown".to_string()),
            date: Some("Unknown".to_string()),
        };
        assert_eq!(metadata.normalized(), None);

        let metadata = TripMetadata {
            destination: Some("Chicago".to_string()),
            date: Some("unknown".to_string()),
        };
        let normalized = metadata.normalized().unwrap();
        assert_eq!(normalized.destination.as_deref(), Some("Chicago"));
        assert_eq!(normalized.date, None);
    }

    #[test]
    fn test_failed_result() {
        let result = PlanResult::failed();
        assert_eq!(result.error(), Some("Failed to get plan."));
        assert!(result.plan().is_none());
    }
}
