//! Map view model
//!
//! Everything the renderer needs for one draw: center, zoom, markers with
//! their popups, and the tile source. Rebuilt from scratch on every render.

use serde::Serialize;

use super::geo::GeoPoint;
use super::tiles::{LatLng, PlacedTile, ScreenOffset, TileLayer, Viewport};

/// Downtown Chicago, used when there is nothing to center on
pub const FALLBACK_CENTER: LatLng = LatLng::new(41.8781, -87.6298);

/// Zoom level for the attractions map
pub const DEFAULT_ZOOM: u8 = 13;

/// Static map settings
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub fallback_center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    /// Window the tiles are computed for; wider than most screens so the
    /// container can clip it
    pub width: f64,
    pub height: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            fallback_center: FALLBACK_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayer::openstreetmap(),
            width: 1600.0,
            height: 500.0,
        }
    }
}

/// Popup content for one marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub address: Option<String>,
}

/// One pin on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub popup: Popup,
}

/// Renderable map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub tile_layer: TileLayer,
    pub width: f64,
    pub height: f64,
}

impl MapView {
    /// Center on the first point (or the fallback) with one marker per point
    pub fn new(points: &[GeoPoint], settings: &MapSettings) -> Self {
        let center = points
            .first()
            .map(GeoPoint::position)
            .unwrap_or(settings.fallback_center);

        let markers = points
            .iter()
            .map(|point| Marker {
                position: point.position(),
                popup: Popup {
                    title: point.name.clone().unwrap_or_else(|| "Unnamed place".to_string()),
                    address: point.address.clone(),
                },
            })
            .collect();

        Self {
            center,
            zoom: settings.zoom,
            markers,
            tile_layer: settings.tile_layer.clone(),
            width: settings.width,
            height: settings.height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.center, self.zoom, self.width, self.height)
    }

    /// Tiles with their URLs, ready to draw
    pub fn tiles(&self) -> Vec<(PlacedTile, String)> {
        self.viewport()
            .tiles()
            .into_iter()
            .map(|tile| {
                let url = self.tile_layer.tile_url(tile.coord);
                (tile, url)
            })
            .collect()
    }

    /// Marker positions relative to the center, in marker order
    pub fn marker_offsets(&self) -> Vec<ScreenOffset> {
        let viewport = self.viewport();
        self.markers
            .iter()
            .map(|marker| viewport.offset_of(marker.position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, lat: f64, lng: f64) -> GeoPoint {
        GeoPoint {
            lat,
            lng,
            name: Some(name.to_string()),
            address: Some(format!("{} St", name)),
        }
    }

    #[test]
    fn test_centers_on_first_point() {
        let points = vec![
            point("Cloud Gate", 41.8827, -87.6233),
            point("Navy Pier", 41.8917, -87.6086),
            point("Field Museum", 41.8663, -87.6170),
        ];
        let view = MapView::new(&points, &MapSettings::default());

        assert_eq!(view.center, LatLng::new(41.8827, -87.6233));
        assert_eq!(view.markers.len(), 3);
        assert_eq!(view.markers[1].popup.title, "Navy Pier");
        assert_eq!(view.markers[1].popup.address.as_deref(), Some("Navy Pier St"));
        assert_eq!(view.marker_offsets()[0], ScreenOffset { dx: 0.0, dy: 0.0 });
    }

    #[test]
    fn test_empty_falls_back() {
        let view = MapView::new(&[], &MapSettings::default());

        assert_eq!(view.center, FALLBACK_CENTER);
        assert!(view.markers.is_empty());
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(!view.tiles().is_empty());
    }

    #[test]
    fn test_unnamed_marker() {
        let unnamed = GeoPoint {
            lat: 1.0,
            lng: 2.0,
            name: None,
            address: None,
        };
        let view = MapView::new(&[unnamed], &MapSettings::default());
        assert_eq!(view.markers[0].popup.title, "Unnamed place");
        assert_eq!(view.markers[0].popup.address, None);
    }
}
