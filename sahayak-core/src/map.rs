//! Slippy-map tile math for the issue map. The UI lays out a square grid of
//! raster tiles around the centre and pins issues on top of it.

use crate::config::MapConfig;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_ZOOM: u8 = 19;

/// Fractional Web-Mercator tile coordinates for a point.
pub fn tile_coords(lat: f64, lng: f64, zoom: u8) -> (f64, f64) {
    let n = f64::from(1u32 << zoom.min(MAX_ZOOM));
    let lat = lat.clamp(-85.051_128, 85.051_128).to_radians();
    let x = (lng + 180.0) / 360.0 * n;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n;
    (x, y)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub url: String,
    /// Position inside the grid, in tiles.
    pub col: u32,
    pub row: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub zoom: u8,
    pub origin_x: i64,
    pub origin_y: i64,
    /// Tiles per side.
    pub span: u32,
    tile_url: String,
}

impl TileView {
    pub fn new(config: &MapConfig, radius: u32) -> Self {
        Self::around(config.center_lat, config.center_lng, config.zoom, radius, &config.tile_url)
    }

    pub fn around(lat: f64, lng: f64, zoom: u8, radius: u32, tile_url: &str) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        let (x, y) = tile_coords(lat, lng, zoom);
        Self {
            zoom,
            origin_x: x.floor() as i64 - i64::from(radius),
            origin_y: y.floor() as i64 - i64::from(radius),
            span: radius * 2 + 1,
            tile_url: tile_url.to_string(),
        }
    }

    pub fn size_px(&self) -> f64 {
        f64::from(self.span) * TILE_SIZE
    }

    pub fn zoom_in(&self, lat: f64, lng: f64) -> Self {
        Self::around(lat, lng, self.zoom.saturating_add(1), self.span / 2, &self.tile_url)
    }

    pub fn zoom_out(&self, lat: f64, lng: f64) -> Self {
        Self::around(lat, lng, self.zoom.saturating_sub(1), self.span / 2, &self.tile_url)
    }

    /// Visible tiles, row-major. Columns wrap around the antimeridian; rows
    /// beyond the poles are skipped.
    pub fn tiles(&self) -> Vec<Tile> {
        let n = 1i64 << self.zoom;
        let mut out = Vec::with_capacity((self.span * self.span) as usize);
        for row in 0..self.span {
            let y = self.origin_y + i64::from(row);
            if !(0..n).contains(&y) {
                continue;
            }
            for col in 0..self.span {
                let x = (self.origin_x + i64::from(col)).rem_euclid(n);
                out.push(Tile {
                    x: x as u32,
                    y: y as u32,
                    url: self
                        .tile_url
                        .replace("{z}", &self.zoom.to_string())
                        .replace("{x}", &x.to_string())
                        .replace("{y}", &y.to_string()),
                    col,
                    row,
                });
            }
        }
        out
    }

    /// Pixel offset of a point from the grid's top-left corner, or `None`
    /// when it falls outside the grid.
    pub fn marker_offset(&self, lat: f64, lng: f64) -> Option<(f64, f64)> {
        let (x, y) = tile_coords(lat, lng, self.zoom);
        let px = (x - self.origin_x as f64) * TILE_SIZE;
        let py = (y - self.origin_y as f64) * TILE_SIZE;
        let size = self.size_px();
        ((0.0..size).contains(&px) && (0.0..size).contains(&py)).then_some((px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_tile_centre() {
        let (x, y) = tile_coords(0.0, 0.0, 1);
        assert!((x - 1.0).abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn known_tile_for_times_square() {
        let (x, y) = tile_coords(40.7589, -73.9851, 13);
        assert_eq!((x.floor() as u32, y.floor() as u32), (2412, 3078));
    }

    #[test]
    fn grid_has_span_squared_tiles_with_urls() {
        let view = TileView::new(&MapConfig::default(), 1);
        let tiles = view.tiles();
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[4].url, "https://tile.openstreetmap.org/13/2412/3078.png");
    }

    #[test]
    fn centre_marker_is_in_middle_tile() {
        let config = MapConfig::default();
        let view = TileView::new(&config, 1);
        let (px, py) = view
            .marker_offset(config.center_lat, config.center_lng)
            .expect("inside");
        assert!((TILE_SIZE..2.0 * TILE_SIZE).contains(&px));
        assert!((TILE_SIZE..2.0 * TILE_SIZE).contains(&py));
        assert!(view.marker_offset(51.5, -0.12).is_none());
    }

    #[test]
    fn zooming_changes_level_but_keeps_span() {
        let config = MapConfig::default();
        let view = TileView::new(&config, 1);
        let closer = view.zoom_in(config.center_lat, config.center_lng);
        assert_eq!(closer.zoom, 14);
        assert_eq!(closer.span, 3);
        assert_eq!(closer.zoom_out(config.center_lat, config.center_lng).zoom, 13);
    }

    #[test]
    fn polar_rows_are_skipped() {
        let view = TileView::around(85.0, 0.0, 0, 1, "{z}/{x}/{y}");
        assert_eq!(view.tiles().len(), 3);
    }
}
