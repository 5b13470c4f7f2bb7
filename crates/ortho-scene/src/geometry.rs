//! Points, vectors and row-convention 3×3 matrices.

use nalgebra::{Matrix3, Point2, Point3, RowVector3, Vector3};

/// A position in 3D space.
pub type Point = Point3<f64>;

/// A direction or basis row of a [`Matrix`].
pub type Vector = Vector3<f64>;

/// A 3×3 linear transform stored as three basis rows.
///
/// Points are treated as row vectors and multiplied on the left:
/// `p' = p × M`. Composition follows the same convention, so
/// `a.then(&b)` first applies `a`, then `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    rows: Matrix3<f64>,
}

impl Matrix {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            rows: Matrix3::identity(),
        }
    }

    /// Builds a matrix from its three basis rows.
    pub fn from_rows(x: Vector, y: Vector, z: Vector) -> Self {
        Self {
            rows: Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]),
        }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows(
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, cos, sin),
            Vector::new(0.0, -sin, cos),
        )
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows(
            Vector::new(cos, 0.0, -sin),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(sin, 0.0, cos),
        )
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows(
            Vector::new(cos, sin, 0.0),
            Vector::new(-sin, cos, 0.0),
            Vector::new(0.0, 0.0, 1.0),
        )
    }

    /// First basis row.
    #[inline]
    pub fn x(&self) -> Vector {
        self.row(0)
    }

    /// Second basis row.
    #[inline]
    pub fn y(&self) -> Vector {
        self.row(1)
    }

    /// Third basis row.
    #[inline]
    pub fn z(&self) -> Vector {
        self.row(2)
    }

    fn row(&self, i: usize) -> Vector {
        self.rows.row(i).transpose()
    }

    /// Returns `self × delta`: the transform that applies `self` and then `delta`.
    pub fn then(&self, delta: &Matrix) -> Matrix {
        Matrix {
            rows: self.rows * delta.rows,
        }
    }

    /// Transforms a point as a row vector: `p × self`.
    pub fn apply(&self, p: Point) -> Point {
        let row = RowVector3::new(p.x, p.y, p.z) * self.rows;
        Point::new(row.x, row.y, row.z)
    }

    /// Element-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    nalgebra::distance(&a, &b)
}

/// Arithmetic mean of the points, or `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector = points.iter().map(|p| p.coords).sum();
    Some(Point::from(sum / points.len() as f64))
}

/// Transforms `p` by `m` using the row-vector convention.
#[inline]
pub fn apply_matrix(m: &Matrix, p: Point) -> Point {
    m.apply(p)
}

/// Orthographic projection onto the XY plane.
#[inline]
pub fn project(p: Point) -> Point2<f64> {
    Point2::new(p.x, p.y)
}
