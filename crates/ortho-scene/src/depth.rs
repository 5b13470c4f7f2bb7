//! Painter's-algorithm ordering by centroid distance.
//!
//! Polygons are ranked by the distance from their centroid to a fixed
//! reference point and drawn farthest first. This is an approximation: two
//! polygons whose depth ranges overlap can still be drawn in the wrong order.

use crate::Polygon;
use crate::geometry::{self, Point};

/// The fixed eye position polygons are ordered against.
pub const REFERENCE_POINT: Point = Point::new(0.0, 0.0, 200.0);

/// Distance from the centroid of `polygon` to `reference`.
pub fn depth_key(polygon: &Polygon, reference: Point) -> f64 {
    geometry::distance(polygon.centroid(), reference)
}

/// Returns polygon indices ordered back to front (descending depth key).
///
/// Keys are computed once per polygon. The sort is stable, so polygons with
/// equal keys keep their relative order.
pub fn back_to_front(polygons: &[Polygon], reference: Point) -> Vec<usize> {
    let keys: Vec<f64> = polygons.iter().map(|p| depth_key(p, reference)).collect();
    let mut order: Vec<usize> = (0..polygons.len()).collect();
    order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
    order
}
