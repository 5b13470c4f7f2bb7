//! Render surface backed by the macroquad window.

use macroquad::prelude::*;
use nalgebra::Point2;
use ortho_scene::{RenderSurface, Rgba, SceneError};

use crate::to_color;

/// Maps scene coordinates (Y up, origin at the center) onto the window (Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Viewport {
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// A square viewport from `-half` to `half` on both axes.
    pub fn centered(half: f64) -> Self {
        Self::new(Point2::new(-half, -half), Point2::new(half, half))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Converts a scene point to pixel coordinates on a `screen_w` × `screen_h` window.
    pub fn to_screen(&self, p: Point2<f64>, screen_w: f32, screen_h: f32) -> Vec2 {
        let sx = (p.x - self.min.x) / self.width() * screen_w as f64;
        let sy = (self.max.y - p.y) / self.height() * screen_h as f64;
        vec2(sx as f32, sy as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::centered(150.0)
    }
}

/// Draws polygon outlines into the current macroquad frame.
pub struct MacroquadSurface {
    viewport: Viewport,
    pending: Vec<(Point2<f64>, Rgba)>,
}

impl MacroquadSurface {
    /// Attaches to the open window.
    pub fn acquire(viewport: Viewport) -> Result<Self, SceneError> {
        Self::from_size(screen_width(), screen_height(), viewport)
    }

    /// Creates a surface for a `width` × `height` drawable area.
    ///
    /// Fails with [`SceneError::SurfaceUnavailable`] if either side is not positive.
    pub fn from_size(width: f32, height: f32, viewport: Viewport) -> Result<Self, SceneError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(SceneError::SurfaceUnavailable(format!(
                "window reports a {}x{} drawable area",
                width, height
            )));
        }
        Ok(Self {
            viewport,
            pending: Vec::new(),
        })
    }

    /// Finishes the frame and waits for the next one.
    pub async fn present(&mut self) {
        self.pending.clear();
        next_frame().await
    }

    /// True once the user has asked to close the window.
    pub fn is_closed(&self) -> bool {
        is_quit_requested()
    }
}

impl RenderSurface for MacroquadSurface {
    fn push_vertex(&mut self, vertex: Point2<f64>, color: Rgba) {
        self.pending.push((vertex, color));
    }

    fn polygon(&mut self, line_width: f64) {
        let (w, h) = (screen_width(), screen_height());
        for pair in self.pending.windows(2) {
            let (from, color) = pair[0];
            let (to, _) = pair[1];
            let a = self.viewport.to_screen(from, w, h);
            let b = self.viewport.to_screen(to, w, h);
            draw_line(a.x, a.y, b.x, b.y, line_width as f32, to_color(color));
        }
        self.pending.clear();
    }

    fn clear(&mut self, color: Rgba) {
        clear_background(to_color(color));
    }
}
