//! Demo scenes and macroquad glue for the orthographic scene viewer.

use log::info;
use macroquad::prelude::Color;
use ortho_scene::color::{ALICE_BLUE, BLACK, BLUE, DIM_GRAY, GREEN, RED};
use ortho_scene::{
    DrawOrder, Point, Polygon, RecordingSurface, RenderSurface, Rgba, SceneError, Space, Spin,
};

pub mod cli;
pub mod surface;

pub use surface::{MacroquadSurface, Viewport};

/// Half the length of each axis line.
const AXIS_EXTENT: f64 = 300.0;

/// Which solid is placed at the origin next to the axis lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SceneKind {
    /// Square-based pyramid: floor plus four slanted sides.
    #[default]
    Pyramid,
    /// Four-faced solid, one color per face.
    Tetrahedron,
}

/// Converts a scene color to macroquad's color type.
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// The X, Y and Z axes as degenerate black triangles (first point repeated).
pub fn axis_lines() -> Result<Vec<Polygon>, SceneError> {
    let e = AXIS_EXTENT;
    let axes = [
        (Point::new(-e, 0.0, 0.0), Point::new(e, 0.0, 0.0)),
        (Point::new(0.0, -e, 0.0), Point::new(0.0, e, 0.0)),
        (Point::new(0.0, 0.0, e), Point::new(0.0, 0.0, -e)),
    ];

    axes.into_iter()
        .map(|(from, to)| Polygon::new(vec![from, from, to], BLACK))
        .collect()
}

/// The demo pyramid: a 100×100 floor at y = 0 and an apex at (0, 100, 0).
pub fn pyramid() -> Result<Vec<Polygon>, SceneError> {
    let p1 = Point::new(-50.0, 0.0, -50.0);
    let p2 = Point::new(0.0, 100.0, 0.0);
    let p3 = Point::new(50.0, 0.0, -50.0);
    let p4 = Point::new(-50.0, 0.0, 50.0);
    let p5 = Point::new(50.0, 0.0, 50.0);

    Ok(vec![
        // floor
        Polygon::new(vec![p1, p4, p5], BLACK)?,
        // left
        Polygon::new(vec![p1, p2, p4], ALICE_BLUE)?,
        // right
        Polygon::new(vec![p2, p3, p5], ALICE_BLUE)?,
        // front
        Polygon::new(vec![p1, p2, p3], ALICE_BLUE)?,
        // back
        Polygon::new(vec![p2, p4, p5], ALICE_BLUE)?,
    ])
}

/// A four-faced solid spanned by four points.
pub fn tetrahedron(p1: Point, p2: Point, p3: Point, p4: Point) -> Result<Vec<Polygon>, SceneError> {
    Ok(vec![
        Polygon::new(vec![p1, p2, p3], RED)?,
        Polygon::new(vec![p1, p2, p4], GREEN)?,
        Polygon::new(vec![p1, p3, p4], BLUE)?,
        Polygon::new(vec![p2, p3, p4], BLACK)?,
    ])
}

/// Polygons for the chosen scene, axis lines first.
pub fn scene_polygons(kind: SceneKind) -> Result<Vec<Polygon>, SceneError> {
    let mut polygons = axis_lines()?;
    match kind {
        SceneKind::Pyramid => polygons.extend(pyramid()?),
        SceneKind::Tetrahedron => polygons.extend(tetrahedron(
            Point::new(-50.0, 0.0, -50.0),
            Point::new(50.0, 0.0, -50.0),
            Point::new(0.0, 0.0, 50.0),
            Point::new(0.0, 100.0, 0.0),
        )?),
    }
    Ok(polygons)
}

/// Builds the demo space and applies the initial tilt about X.
pub fn build_space(kind: SceneKind, draw_order: DrawOrder, tilt: f64) -> Result<Space, SceneError> {
    let mut space = Space::new();
    space.set_draw_order(draw_order);
    for polygon in scene_polygons(kind)? {
        space.add_object(polygon);
    }
    space.rotate_x(tilt);
    info!(
        "built {:?} scene: {} polygons, tilt {} rad, {:?}",
        kind,
        space.len(),
        tilt,
        draw_order
    );
    Ok(space)
}

/// Runs `frames` frames against an in-memory surface without opening a window.
///
/// Returns the surface holding the last frame's commands.
pub fn run_headless(space: &mut Space, spin: Spin, frames: u64) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    for frame in 0..frames {
        surface.reset();
        surface.clear(DIM_GRAY);
        space.draw(&mut surface);
        spin.apply(space);
        info!(
            "frame {}: {} polygons submitted",
            frame,
            surface.polygons().count()
        );
    }
    surface
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortho_scene::{Axis, Matrix, SurfaceCommand, apply_matrix, project};

    #[test]
    fn axis_lines_are_degenerate_black_triangles() {
        let axes = axis_lines().unwrap();
        assert_eq!(axes.len(), 3);
        for axis in &axes {
            assert_eq!(axis.len(), 3);
            assert_eq!(axis.points()[0], axis.points()[1]);
            assert_eq!(axis.color(), BLACK);
        }
        assert_eq!(axes[2].points()[0], Point::new(0.0, 0.0, 300.0));
    }

    #[test]
    fn pyramid_has_floor_and_four_sides() {
        let faces = pyramid().unwrap();
        assert_eq!(faces.len(), 5);
        assert!(faces[0].points().iter().all(|p| p.y == 0.0));
        assert_eq!(faces[0].color(), BLACK);
        assert!(faces[1..].iter().all(|f| f.color() == ALICE_BLUE));
        assert!(
            faces[1..]
                .iter()
                .all(|f| f.points().contains(&Point::new(0.0, 100.0, 0.0)))
        );
    }

    #[test]
    fn tetrahedron_colors_each_face() {
        let faces = scene_polygons(SceneKind::Tetrahedron).unwrap();
        let colors: Vec<_> = faces[3..].iter().map(|f| f.color()).collect();
        assert_eq!(colors, vec![RED, GREEN, BLUE, BLACK]);
    }

    #[test]
    fn build_space_applies_tilt() {
        let space = build_space(SceneKind::Pyramid, DrawOrder::Insertion, -0.33).unwrap();
        assert_eq!(space.len(), 8);
        assert!(space.matrix().approx_eq(&Matrix::rotation_x(-0.33), 1e-12));
    }

    #[test]
    fn to_color_keeps_channels() {
        let c = to_color(ALICE_BLUE);
        assert!((c.r - 240.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 1.0).abs() < 1e-6);
    }

    /// Every vertex drawn is the tilted original with Z dropped, for both draw orders.
    #[test]
    fn drawn_vertices_match_tilted_scene() {
        for draw_order in [DrawOrder::Insertion, DrawOrder::DepthSorted] {
            let original = scene_polygons(SceneKind::Pyramid).unwrap();
            let space = build_space(SceneKind::Pyramid, draw_order, -0.33).unwrap();
            let tilt = Matrix::identity().then(&Matrix::rotation_x(-0.33));

            let mut surface = RecordingSurface::new();
            space.draw(&mut surface);
            let drawn: Vec<_> = surface.polygons().collect();
            assert_eq!(drawn.len(), original.len());

            let order: Vec<usize> = match draw_order {
                DrawOrder::Insertion => (0..original.len()).collect(),
                DrawOrder::DepthSorted => {
                    let transformed: Vec<Polygon> =
                        original.iter().map(|p| p.transform(&tilt)).collect();
                    ortho_scene::back_to_front(&transformed, ortho_scene::REFERENCE_POINT)
                }
            };

            for (vertices, &index) in drawn.iter().zip(&order) {
                let polygon = &original[index];
                assert_eq!(vertices.len(), polygon.len() + 1);
                let expected = polygon
                    .points()
                    .iter()
                    .chain(std::iter::once(&polygon.points()[0]))
                    .map(|p| project(apply_matrix(&tilt, *p)));
                for (vertex, want) in vertices.iter().zip(expected) {
                    assert!((vertex.position - want).norm() < 1e-9);
                    assert_eq!(vertex.color, polygon.color());
                }
            }
        }
    }

    #[test]
    fn headless_run_advances_rotation() {
        let mut space = build_space(SceneKind::Pyramid, DrawOrder::DepthSorted, 0.0).unwrap();
        let surface = run_headless(&mut space, Spin::new(Axis::Y, 0.033), 3);

        let mut expected = Matrix::identity();
        for _ in 0..3 {
            expected = expected.then(&Matrix::rotation_y(0.033));
        }
        assert!(space.matrix().approx_eq(&expected, 1e-12));
        assert_eq!(surface.commands()[0], SurfaceCommand::Clear(DIM_GRAY));
        assert_eq!(surface.polygons().count(), 8);
    }
}
