//! The rotating scene: a cumulative rotation applied to a list of polygons.

use log::{debug, trace};

use crate::Polygon;
use crate::depth::{self, REFERENCE_POINT};
use crate::geometry::Matrix;
use crate::surface::RenderSurface;

/// Order in which [`Space::draw`] submits polygons to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawOrder {
    /// Farthest polygon first, by centroid distance to [`REFERENCE_POINT`].
    #[default]
    DepthSorted,
    /// The order polygons were added in. The depth ordering is still computed
    /// but does not affect what is drawn.
    Insertion,
}

/// A scene of polygons viewed through a cumulative rotation.
///
/// The matrix starts as the identity and every call to [`rotate`](Self::rotate)
/// composes another rotation into it. Stored polygons are never modified;
/// drawing transforms copies of them.
#[derive(Debug, Clone, Default)]
pub struct Space {
    matrix: Matrix,
    objects: Vec<Polygon>,
    draw_order: DrawOrder,
}

impl Space {
    /// Creates an empty scene with the identity rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current cumulative rotation.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the polygons in insertion order.
    #[inline]
    pub fn objects(&self) -> &[Polygon] {
        &self.objects
    }

    /// Returns the number of polygons in the scene.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene has no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn draw_order(&self) -> DrawOrder {
        self.draw_order
    }

    /// Chooses how [`draw`](Self::draw) orders polygons from the next frame on.
    pub fn set_draw_order(&mut self, draw_order: DrawOrder) {
        debug!("draw order set to {:?}", draw_order);
        self.draw_order = draw_order;
    }

    /// Appends a polygon to the scene.
    pub fn add_object(&mut self, polygon: Polygon) {
        debug!(
            "adding polygon #{} ({} points)",
            self.objects.len(),
            polygon.len()
        );
        self.objects.push(polygon);
    }

    /// Composes `delta` into the cumulative rotation (`matrix × delta`).
    pub fn rotate(&mut self, delta: &Matrix) {
        self.matrix = self.matrix.then(delta);
    }

    /// Rotates about the X axis by `angle` radians.
    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate(&Matrix::rotation_x(angle));
    }

    /// Rotates about the Y axis by `angle` radians.
    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate(&Matrix::rotation_y(angle));
    }

    /// Rotates about the Z axis by `angle` radians.
    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate(&Matrix::rotation_z(angle));
    }

    /// Discards all accumulated rotation.
    pub fn reset(&mut self) {
        self.matrix = Matrix::identity();
    }

    /// Draws one frame: transforms every polygon by the current matrix,
    /// orders them and renders them on `surface`.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let transformed: Vec<Polygon> = self
            .objects
            .iter()
            .map(|p| p.transform(&self.matrix))
            .collect();
        let sorted = depth::back_to_front(&transformed, REFERENCE_POINT);
        trace!(
            "drawing {} polygons, back to front: {:?}",
            transformed.len(),
            sorted
        );

        match self.draw_order {
            DrawOrder::DepthSorted => {
                for &i in &sorted {
                    transformed[i].render(surface);
                }
            }
            DrawOrder::Insertion => {
                for polygon in &transformed {
                    polygon.render(surface);
                }
            }
        }
    }
}
