//! Section renderers
//!
//! One pure function per category. Each maps its items to cards in input
//! order and returns `None` for an empty list.

use serde::Serialize;

use super::card::{Card, CardLine};
use super::format::{format_flight_time, format_price, rating_line, route_title};
use crate::map::{geo_points, MapSettings, MapView};
use crate::plan::{AttractionItem, EventItem, FlightItem, HotelItem};

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Events,
    Flights,
    Hotels,
    Attractions,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Events => "🎉 Events",
            SectionKind::Flights => "✈️ Flights",
            SectionKind::Hotels => "🏨 Hotels",
            SectionKind::Attractions => "🌆 Attractions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Events => "events",
            SectionKind::Flights => "flights",
            SectionKind::Hotels => "hotels",
            SectionKind::Attractions => "attractions",
        }
    }
}

/// Titled grid of cards, plus the map for attractions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub cards: Vec<Card>,
    pub map: Option<MapView>,
}

impl Section {
    fn new(kind: SectionKind, cards: Vec<Card>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            title: kind.title().to_string(),
            cards,
            map: None,
        })
    }
}

pub fn events_section(events: &[EventItem]) -> Option<Section> {
    let cards = events
        .iter()
        .map(|event| {
            Card::new(event.name.as_deref())
                .image(event.image.as_deref())
                .subtitle(event.venue.clone())
                .description(event.date.clone())
                .link(event.url.as_deref())
        })
        .collect();

    Section::new(SectionKind::Events, cards)
}

pub fn flights_section(flights: &[FlightItem]) -> Option<Section> {
    let cards = flights
        .iter()
        .map(|flight| {
            let title = route_title(flight.from.as_deref(), flight.to.as_deref());
            let mut card = Card::new(Some(title.as_str()));

            if let Some(airline) = &flight.airline {
                card = card.subtitle_line(CardLine::strong(airline.clone()));
            }

            card.subtitle_line(CardLine::plain(format!(
                "Departure: {}",
                format_flight_time(flight.departure_time.as_deref())
            )))
            .subtitle_line(CardLine::plain(format!(
                "Arrival: {}",
                format_flight_time(flight.arrival_time.as_deref())
            )))
            .subtitle_line(CardLine::price(format_price(flight.price.as_ref())))
            .compact()
        })
        .collect();

    Section::new(SectionKind::Flights, cards)
}

pub fn hotels_section(hotels: &[HotelItem]) -> Option<Section> {
    let cards = hotels
        .iter()
        .map(|hotel| {
            Card::new(hotel.name.as_deref())
                .image(hotel.image.as_deref())
                .subtitle(hotel.address.clone())
                .link(hotel.url.as_deref())
        })
        .collect();

    Section::new(SectionKind::Hotels, cards)
}

/// Attraction cards plus the map of every geocoded attraction
pub fn attractions_section(
    attractions: &[AttractionItem],
    map_settings: &MapSettings,
) -> Option<Section> {
    let cards = attractions
        .iter()
        .map(|attraction| {
            Card::new(attraction.name.as_deref())
                .image(attraction.image.as_deref())
                .subtitle(Some(rating_line(attraction.rating, attraction.reviews)))
                .description(
                    attraction
                        .category
                        .as_deref()
                        .map(|category| format!("Category: {}", category)),
                )
                .link(attraction.maps_url.as_deref())
        })
        .collect();

    let mut section = Section::new(SectionKind::Attractions, cards)?;
    section.map = Some(MapView::new(&geo_points(attractions), map_settings));
    Some(section)
}
