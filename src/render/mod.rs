//! Result Rendering Pipeline
//!
//! Pure view models for the dashboard: cards, sections and the page as a
//! whole. The web UI and the CLI both draw from these.

mod card;
mod dashboard;
mod format;
mod sections;

pub use card::{
    Card, CardImage, CardLine, CardLink, CardSize, Tone, FALLBACK_IMAGE, LINK_LABEL, UNTITLED,
};
pub use dashboard::{Dashboard, TripHeader};
pub use format::{format_flight_time, format_price, rating_line, route_title, NOT_AVAILABLE};
pub use sections::{
    attractions_section, events_section, flights_section, hotels_section, Section, SectionKind,
};
