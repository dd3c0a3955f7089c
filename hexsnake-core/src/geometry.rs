//! Pixel-space geometry for flat-topped hexes
//!
//! Screen convention: x grows right, y grows down. Corner angles are measured
//! from the +x axis, so the ring runs clockwise on screen.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::Window;
use crate::hex::Hex;

pub const SQRT_3: f32 = 1.732_050_8;

/// A point in pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

/// Center of `hex` relative to the center of the origin cell
pub fn axial_to_pixel(hex: Hex, size: f32) -> Point {
    let q = hex.q as f32;
    let r = hex.r as f32;
    Point::new(size * 1.5 * q, size * SQRT_3 * (r + q / 2.0))
}

/// Hex cell containing `point` (inverse of `axial_to_pixel`)
pub fn pixel_to_axial(point: Point, size: f32) -> Hex {
    let q = (2.0 / 3.0 * point.x) / size;
    let r = (-1.0 / 3.0 * point.x + SQRT_3 / 3.0 * point.y) / size;
    cube_round(q, r)
}

/// The six corners of a hexagon, at 0°, 60°, ..., 300°
pub fn hex_corners(center: Point, size: f32) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32).to_radians();
        Point::new(center.x + size * angle.cos(), center.y + size * angle.sin())
    })
}

/// Round fractional axial coordinates to the nearest cell
fn cube_round(q: f32, r: f32) -> Hex {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let dq = (rq - q).abs();
    let dr = (rr - r).abs();
    let ds = (rs - s).abs();

    // Fix whichever component drifted the most
    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }

    Hex::new(rq as i32, rr as i32)
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Hex size plus the pixel position of the origin cell's center
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub size: f32,
    pub origin: Point,
}

impl Layout {
    pub fn new(size: f32, origin: Point) -> Self {
        Self { size, origin }
    }

    /// Layout that centers the board's bounding box inside the window
    pub fn centered(board: &Board, size: f32, window: Window) -> Self {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for hex in board.cells() {
            let p = axial_to_pixel(hex, size);
            min_x = min_x.min(p.x - size);
            max_x = max_x.max(p.x + size);
            min_y = min_y.min(p.y - size);
            max_y = max_y.max(p.y + size);
        }

        if !min_x.is_finite() {
            return Self::new(size, Point::new(window.width as f32 / 2.0, window.height as f32 / 2.0));
        }

        let grid_width = max_x - min_x;
        let grid_height = max_y - min_y;
        let origin = Point::new(
            (window.width as f32 - grid_width) / 2.0 - min_x,
            (window.height as f32 - grid_height) / 2.0 - min_y,
        );
        Self::new(size, origin)
    }

    pub fn to_pixel(&self, hex: Hex) -> Point {
        axial_to_pixel(hex, self.size).offset(self.origin)
    }

    pub fn corners(&self, hex: Hex) -> [Point; 6] {
        hex_corners(self.to_pixel(hex), self.size)
    }

    pub fn to_hex(&self, point: Point) -> Hex {
        pixel_to_axial(Point::new(point.x - self.origin.x, point.y - self.origin.y), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_axial_to_pixel() {
        let p = axial_to_pixel(Hex::new(0, 0), 20.0);
        assert_eq!(p, Point::new(0.0, 0.0));

        let p = axial_to_pixel(Hex::new(2, 1), 20.0);
        assert!((p.x - 60.0).abs() < EPS);
        assert!((p.y - 20.0 * SQRT_3 * 2.0).abs() < EPS);
    }

    #[test]
    fn test_corners_on_circle() {
        for &(q, r) in &[(0, 0), (7, 7), (-3, 5), (14, 0)] {
            for &size in &[1.0, 12.5, 20.0] {
                let center = axial_to_pixel(Hex::new(q, r), size);
                let corners = hex_corners(center, size);
                assert_eq!(corners.len(), 6);
                for c in corners {
                    assert!((c.distance_to(center) - size).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_corner_order_starts_at_zero_degrees() {
        let corners = hex_corners(Point::new(10.0, 10.0), 2.0);
        assert!((corners[0].x - 12.0).abs() < EPS);
        assert!((corners[0].y - 10.0).abs() < EPS);
        assert!((corners[3].x - 8.0).abs() < EPS);
        // 60° lands below the center on screen
        assert!(corners[1].y > 10.0);
    }

    #[test]
    fn test_pixel_round_trip() {
        for q in -6..=6 {
            for r in -6..=6 {
                let hex = Hex::new(q, r);
                assert_eq!(pixel_to_axial(axial_to_pixel(hex, 20.0), 20.0), hex);
            }
        }
    }

    #[test]
    fn test_pixel_near_corner_stays_in_cell() {
        let hex = Hex::new(3, -2);
        let center = axial_to_pixel(hex, 20.0);
        for c in hex_corners(center, 20.0) {
            let inside = Point::new(center.x + (c.x - center.x) * 0.9, center.y + (c.y - center.y) * 0.9);
            assert_eq!(pixel_to_axial(inside, 20.0), hex);
        }
    }

    #[test]
    fn test_centered_layout() {
        let window = Window { width: 800, height: 600 };

        let radial = Layout::centered(&Board::radius(15), 20.0, window);
        let c = radial.to_pixel(Hex::ORIGIN);
        assert!((c.x - 400.0).abs() < EPS);
        assert!((c.y - 300.0).abs() < EPS);

        let rect = Layout::centered(&Board::rect(15, 15), 20.0, window);
        let first = rect.to_pixel(Hex::new(0, 0));
        let last = rect.to_pixel(Hex::new(14, 14));
        assert!(((first.x + last.x) / 2.0 - 400.0).abs() < EPS);
        assert!(((first.y + last.y) / 2.0 - 300.0).abs() < EPS);
        assert_eq!(rect.to_hex(rect.to_pixel(Hex::new(4, 9))), Hex::new(4, 9));
    }
}
