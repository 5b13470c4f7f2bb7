//! Flat-colored polygon representation.

use crate::geometry::{self, Matrix, Point};
use crate::surface::{OUTLINE_WIDTH, RenderSurface};
use crate::{Rgba, SceneError};

/// A polygon in 3D space: an ordered outline of at least three points and a color.
///
/// The outline is closed by joining the last point back to the first. Points
/// are not required to be distinct or coplanar; the scene's axis lines are
/// degenerate polygons with a repeated first point.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    color: Rgba,
}

impl Polygon {
    /// Creates a polygon from its outline and color.
    ///
    /// Returns [`SceneError::InvalidGeometry`] if fewer than 3 points are given.
    pub fn new(points: Vec<Point>, color: Rgba) -> Result<Self, SceneError> {
        if points.len() < 3 {
            return Err(SceneError::InvalidGeometry {
                points: points.len(),
            });
        }
        Ok(Self { points, color })
    }

    /// Returns the points of the polygon in outline order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the fill color.
    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a polygon has at least three points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Computes the centroid (mean point) of the polygon.
    pub fn centroid(&self) -> Point {
        geometry::centroid(&self.points).unwrap_or_else(Point::origin)
    }

    /// Returns a new polygon with every point transformed by `m`.
    pub fn transform(&self, m: &Matrix) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| m.apply(*p)).collect(),
            color: self.color,
        }
    }

    /// Draws the closed outline on `surface`, dropping the Z coordinate.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for point in &self.points {
            surface.push_vertex(geometry::project(*point), self.color);
        }
        surface.push_vertex(geometry::project(self.points[0]), self.color);
        surface.polygon(OUTLINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ALICE_BLUE, RED};
    use crate::surface::RecordingSurface;
    use nalgebra::Point2;

    fn make_triangle(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Polygon {
        Polygon::new(
            vec![
                Point::new(a[0], a[1], a[2]),
                Point::new(b[0], b[1], b[2]),
                Point::new(c[0], c[1], c[2]),
            ],
            RED,
        )
        .unwrap()
    }

    #[test]
    fn fewer_than_three_points_is_invalid() {
        for n in 0..3 {
            let points = vec![Point::origin(); n];
            assert_eq!(
                Polygon::new(points, RED),
                Err(SceneError::InvalidGeometry { points: n })
            );
        }
    }

    #[test]
    fn three_or_more_points_are_stored_unchanged() {
        let points = vec![
            Point::new(-50.0, 0.0, -50.0),
            Point::new(0.0, 100.0, 0.0),
            Point::new(50.0, 0.0, -50.0),
            Point::new(50.0, 0.0, 50.0),
        ];
        let tri = Polygon::new(points[..3].to_vec(), ALICE_BLUE).unwrap();
        assert_eq!(tri.points(), &points[..3]);

        let quad = Polygon::new(points.clone(), ALICE_BLUE).unwrap();
        assert_eq!(quad.points(), points.as_slice());
        assert_eq!(quad.color(), ALICE_BLUE);
        assert_eq!(quad.len(), 4);
    }

    #[test]
    fn centroid_is_mean_point() {
        let tri = make_triangle([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]);
        assert_eq!(tri.centroid(), Point::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn transform_returns_new_polygon() {
        let tri = make_triangle([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        let before = tri.clone();

        let rotated = tri.transform(&Matrix::rotation_y(0.7));

        assert_eq!(tri, before);
        assert_ne!(rotated.points(), tri.points());
        assert_eq!(rotated.color(), tri.color());
        for (out, original) in rotated.points().iter().zip(tri.points()) {
            assert_eq!(*out, Matrix::rotation_y(0.7).apply(*original));
        }
    }

    #[test]
    fn render_closes_outline() {
        let tri = make_triangle([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]);
        let mut surface = RecordingSurface::new();

        tri.render(&mut surface);

        let polygons: Vec<_> = surface.polygons().collect();
        assert_eq!(polygons.len(), 1);
        let positions: Vec<_> = polygons[0].iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                Point2::new(1.0, 2.0),
                Point2::new(4.0, 5.0),
                Point2::new(7.0, 8.0),
                Point2::new(1.0, 2.0),
            ]
        );
        assert!(polygons[0].iter().all(|v| v.color == RED));
    }
}
