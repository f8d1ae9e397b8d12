//! Geocoded points derived from attractions

use serde::Serialize;

use super::tiles::LatLng;
use crate::plan::AttractionItem;

/// A place that gets a map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl GeoPoint {
    /// Build a point, or `None` when the coordinates are unusable
    ///
    /// Missing, non-finite and out-of-range coordinates are all rejected.
    pub fn from_attraction(attraction: &AttractionItem) -> Option<Self> {
        let (lat, lng) = (attraction.lat?, attraction.lng?);

        if !valid_coordinates(lat, lng) {
            return None;
        }

        Some(Self {
            lat,
            lng,
            name: attraction.name.clone(),
            address: attraction.address.clone(),
        })
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Latitude in [-90, 90], longitude in [-180, 180], both finite
pub fn valid_coordinates(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// Map points for an attraction list, in input order
pub fn geo_points(attractions: &[AttractionItem]) -> Vec<GeoPoint> {
    attractions
        .iter()
        .enumerate()
        .filter_map(|(index, attraction)| {
            let point = GeoPoint::from_attraction(attraction);
            if point.is_none() {
                tracing::warn!(
                    index,
                    name = attraction.name.as_deref().unwrap_or("?"),
                    lat = ?attraction.lat,
                    lng = ?attraction.lng,
                    "Skipping attraction without usable coordinates"
                );
            }
            point
        })
        .collect()
}
