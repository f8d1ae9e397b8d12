//! Slippy-map tile math
//!
//! Web-Mercator projection into 256px tile space, the set of tiles covering a
//! viewport, and expansion of `{s}/{z}/{x}/{y}` tile URL templates.
//! Screen positions are offsets from the viewport center so the renderer can
//! place them with `calc(50% + dx)` without measuring the container.

use serde::Serialize;
use std::f64::consts::PI;

/// Edge length of one tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Highest zoom level OpenStreetMap serves
pub const MAX_ZOOM: u8 = 19;

/// Latitude where Web-Mercator turns the world into a square
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Pixel position in the world image at one zoom level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Project a position into world pixels
pub fn project(position: LatLng, zoom: u8) -> WorldPoint {
    let scale = world_size(zoom);
    let lat_rad = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    WorldPoint {
        x: (position.lng + 180.0) / 360.0 * scale,
        y: (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * scale,
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * (1u64 << zoom.min(MAX_ZOOM)) as f64
}

/// Address of one map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// Tile containing a position
pub fn tile_for(position: LatLng, zoom: u8) -> TileCoord {
    let zoom = zoom.min(MAX_ZOOM);
    let n = 1i64 << zoom;
    let point = project(position, zoom);
    let x = (point.x / TILE_SIZE).floor() as i64;
    let y = (point.y / TILE_SIZE).floor() as i64;

    TileCoord {
        x: x.rem_euclid(n) as u32,
        y: y.clamp(0, n - 1) as u32,
        z: zoom,
    }
}

/// Offset from the viewport center in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenOffset {
    pub dx: f64,
    pub dy: f64,
}

/// A tile placed in the viewport; the offset is its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedTile {
    pub coord: TileCoord,
    pub offset: ScreenOffset,
}

/// Visible window onto the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: WorldPoint,
    zoom: u8,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, width: f64, height: f64) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        Self {
            center: project(center, zoom),
            zoom,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Where a position lands relative to the center
    pub fn offset_of(&self, position: LatLng) -> ScreenOffset {
        let point = project(position, self.zoom);
        ScreenOffset {
            dx: point.x - self.center.x,
            dy: point.y - self.center.y,
        }
    }

    /// Whether a position falls inside the visible window
    pub fn contains(&self, position: LatLng) -> bool {
        let offset = self.offset_of(position);
        offset.dx.abs() <= self.width / 2.0 && offset.dy.abs() <= self.height / 2.0
    }

    /// Tiles covering the window, row by row
    ///
    /// Columns wrap around the antimeridian; rows beyond the poles are skipped.
    pub fn tiles(&self) -> Vec<PlacedTile> {
        let n = 1i64 << self.zoom;
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let min_x = ((self.center.x - half_w) / TILE_SIZE).floor() as i64;
        let max_x = ((self.center.x + half_w) / TILE_SIZE).floor() as i64;
        let min_y = ((self.center.y - half_h) / TILE_SIZE).floor() as i64;
        let max_y = ((self.center.y + half_h) / TILE_SIZE).floor() as i64;

        let mut tiles = Vec::new();
        for ty in min_y.max(0)..=max_y.min(n - 1) {
            for tx in min_x..=max_x {
                tiles.push(PlacedTile {
                    coord: TileCoord {
                        x: tx.rem_euclid(n) as u32,
                        y: ty as u32,
                        z: self.zoom,
                    },
                    offset: ScreenOffset {
                        dx: tx as f64 * TILE_SIZE - self.center.x,
                        dy: ty as f64 * TILE_SIZE - self.center.y,
                    },
                });
            }
        }
        tiles
    }
}

/// Raster tile source and the attribution its terms require
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub attribution_url: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

impl TileLayer {
    /// Standard OpenStreetMap tiles
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: "OpenStreetMap contributors".to_string(),
            attribution_url: "https://osm.org/copyright".to_string(),
        }
    }

    /// Expand the URL template for one tile
    pub fn tile_url(&self, tile: TileCoord) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (tile.x as usize + tile.y as usize) % self.subdomains.len();
            self.subdomains[index].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
            .replace("{r}", "")
    }
}
