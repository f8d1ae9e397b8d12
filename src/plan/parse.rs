//! Response boundary
//!
//! Turns the backend's loosely shaped JSON into a [`TripPlan`]:
//!
//! ```text
//! { "result": "..." | {"text": "..."},
//!   "structured": { "summary"?, "metadata"?, "events"?, "flights"?,
//!                   "hotels"?, "attractions"? } }
//! ```
//!
//! `result` and `structured` are merged into one flat record before reading,
//! so a `structured.summary` replaces `result`. Sections that are not arrays
//! are dropped, and so are array entries that are not objects or that are
//! tool error markers.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::{PlanError, PlanOutcome};
use super::lenient;
use super::types::{AttractionItem, EventItem, FlightItem, HotelItem, TripMetadata, TripPlan};

/// Shown when the summary is an object without readable text
pub const NO_SUMMARY: &str = "No summary available";

/// Parse a raw response body
pub fn parse_response(body: &str) -> PlanOutcome<TripPlan> {
    let value: Value = serde_json::from_str(body)?;
    plan_from_value(value)
}

/// Validate an already-decoded response body
pub fn plan_from_value(value: Value) -> PlanOutcome<TripPlan> {
    let body = match value {
        Value::Object(body) => body,
        other => {
            return Err(PlanError::Decode(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            )))
        }
    };

    if !body.contains_key("result") && !body.contains_key("structured") {
        if let Some(error) = body.get("error") {
            let message = lenient::text(error).unwrap_or_else(|| error.to_string());
            return Err(PlanError::Backend(message));
        }
    }

    let merged = merge(body);

    Ok(TripPlan {
        summary: merged.get("summary").and_then(summary_text),
        metadata: merged
            .get("metadata")
            .and_then(|v| serde_json::from_value::<TripMetadata>(v.clone()).ok())
            .and_then(TripMetadata::normalized),
        events: section::<EventItem>(&merged, "events"),
        flights: section::<FlightItem>(&merged, "flights"),
        hotels: section::<HotelItem>(&merged, "hotels"),
        attractions: section::<AttractionItem>(&merged, "attractions"),
    })
}

/// `{ summary: result, ...structured }`
fn merge(mut body: Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::new();

    if let Some(result) = body.remove("result") {
        merged.insert("summary".to_string(), result);
    }

    match body.remove("structured") {
        Some(Value::Object(structured)) => {
            for (key, value) in structured {
                merged.insert(key, value);
            }
        }
        Some(Value::Null) | None => {}
        Some(other) => {
            tracing::warn!(kind = type_name(&other), "Ignoring non-object structured payload");
        }
    }

    merged
}

/// Summary text from a string or a `{text}` object
pub fn summary_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(obj) => Some(
            obj.get("text")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
        ),
        _ => None,
    }
}

fn section<T: DeserializeOwned>(merged: &Map<String, Value>, key: &str) -> Vec<T> {
    let items = match merged.get(key) {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Vec::new(),
        Some(other) => {
            tracing::warn!(section = key, kind = type_name(other), "Section is not a list");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let Value::Object(fields) = item else {
                tracing::warn!(section = key, index, "Dropping non-object entry");
                return None;
            };

            if is_tool_error(fields) {
                tracing::warn!(section = key, index, error = %fields["error"], "Dropping tool error entry");
                return None;
            }

            match serde_json::from_value::<T>(item.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!(section = key, index, error = %e, "Dropping unreadable entry");
                    None
                }
            }
        })
        .collect()
}

/// Tools report failures in-band as `[{"error": "..."}]`
fn is_tool_error(fields: &Map<String, Value>) -> bool {
    fields.contains_key("error") && !fields.contains_key("name")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Price;
    use serde_json::json;

    #[test]
    fn test_summary_and_flights() {
        let plan = plan_from_value(json!({
            "result": "Enjoy Chicago!",
            "structured": {
                "flights": [
                    {"airline": "United Airlines", "from": "BOS", "to": "ORD", "price": 129.0},
                    {"airline": "JetBlue", "from": "BOS", "to": "ORD", "price": "142.30"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(plan.summary.as_deref(), Some("Enjoy Chicago!"));
        assert_eq!(plan.flights.len(), 2);
        assert_eq!(plan.flights[0].price, Some(Price::Amount(129.0)));
        assert_eq!(plan.flights[1].price, Some(Price::Text("142.30".to_string())));
        assert!(plan.events.is_empty());
        assert!(plan.hotels.is_empty());
        assert!(plan.attractions.is_empty());
    }

    #[test]
    fn test_structured_summary_overwrites_result() {
        let plan = plan_from_value(json!({
            "result": "Enjoy Chicago!",
            "structured": {"summary": "Chicago in two days"}
        }))
        .unwrap();

        assert_eq!(plan.summary.as_deref(), Some("Chicago in two days"));
    }

    #[test]
    fn test_summary_object_forms() {
        assert_eq!(
            summary_text(&json!({"text": "Deep dish tonight"})).as_deref(),
            Some("Deep dish tonight")
        );
        assert_eq!(summary_text(&json!({"tokens": 12})).as_deref(), Some(NO_SUMMARY));
        assert_eq!(summary_text(&json!("")), None);
        assert_eq!(summary_text(&json!(3)), None);
    }

    #[test]
    fn test_malformed_sections_are_absent() {
        let plan = plan_from_value(json!({
            "result": "ok",
            "structured": {
                "events": "none today",
                "hotels": null,
                "attractions": {"name": "not a list"}
            }
        }))
        .unwrap();

        assert!(plan.events.is_empty());
        assert!(plan.hotels.is_empty());
        assert!(plan.attractions.is_empty());
    }

    #[test]
    fn test_drops_bad_entries_keeps_order() {
        let plan = plan_from_value(json!({
            "structured": {
                "attractions": [
                    {"name": "Art Institute"},
                    "Navy Pier",
                    {"error": "API Error: OVER_QUERY_LIMIT"},
                    {"name": "Willis Tower"}
                ]
            }
        }))
        .unwrap();

        let names: Vec<_> = plan
            .attractions
            .iter()
            .map(|a| a.name.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Art Institute", "Willis Tower"]);
    }

    #[test]
    fn test_backend_error_body() {
        let err = plan_from_value(json!({"error": "agent exploded"})).unwrap_err();
        assert_eq!(err, PlanError::Backend("agent exploded".to_string()));
    }

    #[test]
    fn test_non_object_body() {
        assert!(matches!(plan_from_value(json!([1, 2])), Err(PlanError::Decode(_))));
        assert!(matches!(parse_response("<html>502</html>"), Err(PlanError::Decode(_))));
    }

    #[test]
    fn test_metadata_header() {
        let plan = parse_response(
            r#"{"result": "hi", "structured": {"metadata": {"destination": "Chicago", "date": "2025-05-07"}}}"#,
        )
        .unwrap();

        let metadata = plan.metadata.unwrap();
        assert_eq!(metadata.destination.as_deref(), Some("Chicago"));
        assert_eq!(metadata.date.as_deref(), Some("2025-05-07"));
    }

    #[test]
    fn test_empty_object_is_empty_plan() {
        let plan = plan_from_value(json!({})).unwrap();
        assert!(plan.is_empty());
    }
}
