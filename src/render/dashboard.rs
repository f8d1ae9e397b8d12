//! Dashboard view model
//!
//! The whole page below the prompt, derived from the current result.

use serde::Serialize;

use super::sections::{
    attractions_section, events_section, flights_section, hotels_section, Section,
};
use crate::map::MapSettings;
use crate::plan::{PlanResult, TripMetadata};

/// Destination/date line above the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripHeader {
    pub destination: Option<String>,
    pub date: Option<String>,
}

impl TripHeader {
    pub fn label(&self) -> String {
        match (&self.destination, &self.date) {
            (Some(destination), Some(date)) => format!("{} · {}", destination, date),
            (Some(destination), None) => destination.clone(),
            (None, Some(date)) => date.clone(),
            (None, None) => String::new(),
        }
    }
}

impl From<&TripMetadata> for TripHeader {
    fn from(metadata: &TripMetadata) -> Self {
        Self {
            destination: metadata.destination.clone(),
            date: metadata.date.clone(),
        }
    }
}

/// Everything rendered for one result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub trip: Option<TripHeader>,
    pub summary: Option<String>,
    /// Events, flights, hotels, attractions; empty ones omitted
    pub sections: Vec<Section>,
    pub error: Option<String>,
}

impl Dashboard {
    /// Build from the panel's result; `None` renders an empty page
    pub fn from_result(result: Option<&PlanResult>, map_settings: &MapSettings) -> Self {
        let plan = match result {
            None => return Self::default(),
            Some(PlanResult::Error { error }) => {
                return Self {
                    error: Some(error.clone()),
                    ..Self::default()
                }
            }
            Some(PlanResult::Success(plan)) => plan,
        };

        let sections = [
            events_section(&plan.events),
            flights_section(&plan.flights),
            hotels_section(&plan.hotels),
            attractions_section(&plan.attractions, map_settings),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            trip: plan.metadata.as_ref().map(TripHeader::from),
            summary: plan.summary.clone(),
            sections,
            error: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trip.is_none()
            && self.summary.is_none()
            && self.sections.is_empty()
            && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{plan_from_value, FlightItem, TripPlan};
    use crate::render::SectionKind;
    use serde_json::json;

    #[test]
    fn test_no_result_is_empty() {
        let dashboard = Dashboard::from_result(None, &MapSettings::default());
        assert!(dashboard.is_empty());
    }

    #[test]
    fn test_error_suppresses_sections() {
        let dashboard = Dashboard::from_result(Some(&PlanResult::failed()), &MapSettings::default());

        assert_eq!(dashboard.error.as_deref(), Some("Failed to get plan."));
        assert!(dashboard.summary.is_none());
        assert!(dashboard.sections.is_empty());
    }

    #[test]
    fn test_summary_and_flight_cards() {
        let plan = plan_from_value(json!({
            "result": "Enjoy Chicago!",
            "structured": {
                "flights": [
                    {"from": "BOS", "to": "ORD", "price": 129},
                    {"from": "BOS", "to": "MDW", "price": 99.5},
                    {"from": "JFK", "to": "ORD", "price": "180"}
                ],
                "events": [],
                "hotels": []
            }
        }))
        .unwrap();

        let dashboard =
            Dashboard::from_result(Some(&PlanResult::Success(plan)), &MapSettings::default());

        assert_eq!(dashboard.summary.as_deref(), Some("Enjoy Chicago!"));
        assert_eq!(dashboard.sections.len(), 1);
        assert_eq!(dashboard.sections[0].kind, SectionKind::Flights);
        assert_eq!(dashboard.sections[0].cards.len(), 3);
        assert_eq!(dashboard.sections[0].cards[1].title, "BOS → MDW");
    }

    #[test]
    fn test_section_order_is_fixed() {
        let plan = plan_from_value(json!({
            "structured": {
                "attractions": [{"name": "Navy Pier", "lat": 41.8917, "lng": -87.6086}],
                "hotels": [{"name": "The Palmer House"}],
                "flights": [{"from": "BOS", "to": "ORD"}],
                "events": [{"name": "Lollapalooza"}]
            }
        }))
        .unwrap();

        let dashboard =
            Dashboard::from_result(Some(&PlanResult::Success(plan)), &MapSettings::default());
        let kinds: Vec<_> = dashboard.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Events,
                SectionKind::Flights,
                SectionKind::Hotels,
                SectionKind::Attractions
            ]
        );
    }

    #[test]
    fn test_trip_header() {
        let plan = TripPlan {
            metadata: Some(TripMetadata {
                destination: Some("Chicago".to_string()),
                date: Some("2025-05-07".to_string()),
            }),
            flights: vec![FlightItem::default()],
            ..Default::default()
        };

        let dashboard =
            Dashboard::from_result(Some(&PlanResult::Success(plan)), &MapSettings::default());
        assert_eq!(dashboard.trip.unwrap().label(), "Chicago · 2025-05-07");
    }
}
