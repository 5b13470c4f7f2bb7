//! Orthographic rendering of a rotating polygon scene.
//!
//! Polygons live in a [`Space`] together with a cumulative rotation matrix.
//! Each frame the space transforms its polygons, orders them back to front
//! by centroid distance (painter's algorithm) and hands the projected
//! outlines to a [`RenderSurface`].

pub mod color;
pub mod depth;
mod error;
pub mod frame;
pub mod geometry;
mod polygon;
mod space;
pub mod surface;

pub use color::Rgba;
pub use depth::{REFERENCE_POINT, back_to_front, depth_key};
pub use error::SceneError;
pub use frame::{Axis, FRAME_LENGTH, FramePacer, Spin};
pub use geometry::{Matrix, Point, Vector, apply_matrix, centroid, distance, project};
pub use polygon::Polygon;
pub use space::{DrawOrder, Space};
pub use surface::{OUTLINE_WIDTH, RecordingSurface, RenderSurface, SurfaceCommand, SurfaceVertex};
