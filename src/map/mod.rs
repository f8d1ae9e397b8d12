//! Attractions Map
//!
//! View model for the map renderer: points from attractions, a centered
//! viewport, markers with popups, and OpenStreetMap tiles.

mod geo;
mod tiles;
mod view;

pub use geo::{geo_points, valid_coordinates, GeoPoint};
pub use tiles::{
    project, tile_for, LatLng, PlacedTile, ScreenOffset, TileCoord, TileLayer, Viewport,
    WorldPoint, MAX_ZOOM, TILE_SIZE,
};
pub use view::{MapSettings, MapView, Marker, Popup, DEFAULT_ZOOM, FALLBACK_CENTER};
