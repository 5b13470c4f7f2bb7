// cli.rs - Command-line configuration for the viewer
use std::time::Duration;

use clap::{Parser, ValueEnum};
use ortho_scene::{Axis, DrawOrder, Spin};

use crate::SceneKind;

/// Polygon submission order, as chosen on the command line.
///
/// Mirrors [`DrawOrder`] so the scene crate does not depend on clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DrawOrderArg {
    /// Farthest polygon first.
    DepthSorted,
    /// The order polygons were added in.
    Insertion,
}

impl From<DrawOrderArg> for DrawOrder {
    fn from(arg: DrawOrderArg) -> Self {
        match arg {
            DrawOrderArg::DepthSorted => DrawOrder::DepthSorted,
            DrawOrderArg::Insertion => DrawOrder::Insertion,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "ortho-viz")]
#[command(about = "Rotating orthographic polygon scene", long_about = None)]
pub struct Cli {
    /// Order polygons are drawn in
    #[arg(long, value_enum, default_value_t = DrawOrderArg::DepthSorted)]
    pub draw_order: DrawOrderArg,

    /// Solid shown next to the axis lines
    #[arg(long, value_enum, default_value_t = SceneKind::Pyramid)]
    pub scene: SceneKind,

    /// Initial rotation about X, in radians
    #[arg(long, default_value_t = -0.33, allow_negative_numbers = true)]
    pub tilt: f64,

    /// Rotation about Y applied every frame, in radians
    #[arg(long, default_value_t = 0.033, allow_negative_numbers = true)]
    pub spin: f64,

    /// Milliseconds between frames
    #[arg(long = "frame-ms", default_value_t = 25)]
    pub frame_ms: u64,

    /// Render this many frames without a window, then exit
    #[arg(long)]
    pub headless: Option<u64>,
}

impl Cli {
    pub fn frame_length(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn per_frame_spin(&self) -> Spin {
        Spin::new(Axis::Y, self.spin)
    }
}
