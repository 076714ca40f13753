//! # Mesh Errors
//!
//! Error types for scene and mesh generation.

use config::constants::MAX_SUBDIVISION_DEPTH;
use fractal_subdivide::{Depth, SubdivideError};
use thiserror::Error;

/// Errors that can occur while building a scene or mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Error from the subdivider
    #[error("Subdivision error: {0}")]
    Subdivide(#[from] SubdivideError),

    /// Depth above the configured limit
    #[error("Subdivision depth too large: {depth} (max: {max})")]
    DepthTooLarge { depth: u32, max: u32 },

    /// Canvas too small (or not finite) for the requested margin
    #[error("Invalid canvas: {width}x{height} with margin {margin}")]
    InvalidCanvas { width: f64, height: f64, margin: f64 },
}

/// Result type for mesh operations.
pub type MeshResult<T> = std::result::Result<T, MeshError>;

/// Validates a signed depth coming from a UI and applies the scene limit.
///
/// # Errors
///
/// - [`MeshError::Subdivide`] if `depth` is negative
/// - [`MeshError::DepthTooLarge`] if `depth` exceeds `MAX_SUBDIVISION_DEPTH`
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{scene_depth, MeshError};
///
/// assert_eq!(scene_depth(4)?.get(), 4);
/// assert!(scene_depth(-1).is_err());
/// assert!(matches!(scene_depth(99), Err(MeshError::DepthTooLarge { .. })));
/// # Ok::<(), MeshError>(())
/// ```
pub fn scene_depth(depth: i32) -> MeshResult<Depth> {
    limit_depth(Depth::new(depth)?)
}

pub(crate) fn limit_depth(depth: Depth) -> MeshResult<Depth> {
    if depth.get() > MAX_SUBDIVISION_DEPTH {
        return Err(MeshError::DepthTooLarge {
            depth: depth.get(),
            max: MAX_SUBDIVISION_DEPTH,
        });
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_depth_wraps_subdivide_error() {
        assert_eq!(
            scene_depth(-2),
            Err(MeshError::Subdivide(SubdivideError::InvalidArgument { depth: -2 }))
        );
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let max = MAX_SUBDIVISION_DEPTH as i32;
        assert!(scene_depth(max).is_ok());
        assert_eq!(
            scene_depth(max + 1),
            Err(MeshError::DepthTooLarge {
                depth: MAX_SUBDIVISION_DEPTH + 1,
                max: MAX_SUBDIVISION_DEPTH,
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = MeshError::InvalidCanvas {
            width: 10.0,
            height: 20.0,
            margin: 40.0,
        };
        let display = format!("{err}");
        assert!(display.contains("10x20"));
        assert!(display.contains("40"));
    }
}
