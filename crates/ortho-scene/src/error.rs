//! Error type for scene construction and surface acquisition.

use thiserror::Error;

/// Errors that can occur while setting up a scene.
///
/// Neither kind is recoverable: both abort setup before the frame loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("polygon needs at least 3 points, got {points}")]
    InvalidGeometry { points: usize },

    #[error("render surface unavailable: {0}")]
    SurfaceUnavailable(String),
}
