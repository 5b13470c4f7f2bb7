//! Drawing surfaces that receive projected polygons.
//!
//! The scene only ever hands a surface 2D vertices: the Z coordinate is
//! dropped before a vertex is pushed (orthographic projection). Presenting a
//! finished frame and detecting window close are left to the frame driver.

use nalgebra::Point2;

use crate::Rgba;

/// Line width used when outlining polygons.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// A 2D drawing target for projected polygons.
///
/// A polygon is drawn by pushing its outline vertex by vertex and then
/// calling [`polygon`](RenderSurface::polygon), which consumes the pushed
/// vertices. Implementations are assumed to succeed; a failing draw call is
/// fatal for the surface's owner, not for the scene.
pub trait RenderSurface {
    /// Appends a vertex to the outline currently being built.
    fn push_vertex(&mut self, vertex: Point2<f64>, color: Rgba);

    /// Draws the pushed outline with the given line width and starts a new one.
    fn polygon(&mut self, line_width: f64);

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgba);
}

/// A vertex pushed to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVertex {
    pub position: Point2<f64>,
    pub color: Rgba,
}

/// A single drawing command captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Clear(Rgba),
    Polygon {
        vertices: Vec<SurfaceVertex>,
        line_width: f64,
    },
}

/// A surface that records every command instead of drawing.
///
/// Used for headless runs and for checking what a scene emits.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pending: Vec<SurfaceVertex>,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in submission order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Returns the vertex lists of every recorded polygon, in submission order.
    pub fn polygons(&self) -> impl Iterator<Item = &[SurfaceVertex]> {
        self.commands.iter().filter_map(|c| match c {
            SurfaceCommand::Polygon { vertices, .. } => Some(vertices.as_slice()),
            SurfaceCommand::Clear(_) => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn push_vertex(&mut self, vertex: Point2<f64>, color: Rgba) {
        self.pending.push(SurfaceVertex {
            position: vertex,
            color,
        });
    }

    fn polygon(&mut self, line_width: f64) {
        let vertices = std::mem::take(&mut self.pending);
        self.commands.push(SurfaceCommand::Polygon {
            vertices,
            line_width,
        });
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(SurfaceCommand::Clear(color));
    }
}
