//! # Configuration Constants
//!
//! Centralized constants for the subdivision pipeline.
//!
//! ## Categories
//!
//! - **Limits**: Maximum values for safety bounds
//! - **Canvas**: Layout of the 2D fractal on a drawing surface
//! - **Colors**: RGBA colors used by the scenes
//! - **Pyramid**: Reference tetrahedron and color scale parameters

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum subdivision depth accepted by the scene builders.
///
/// Output grows as `3^depth`, so depth 10 already means 59 049 leaf
/// triangles per face. The core subdivider itself accepts any
/// non-negative depth; this bound is applied where buffers get allocated.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SUBDIVISION_DEPTH;
///
/// let slider_value = 7;
/// assert!(slider_value <= MAX_SUBDIVISION_DEPTH);
/// ```
pub const MAX_SUBDIVISION_DEPTH: u32 = 10;

// =============================================================================
// CANVAS CONSTANTS
// =============================================================================

/// Empty space kept between the outer triangle and the canvas border, in
/// canvas units (pixels).
pub const CANVAS_MARGIN: f64 = 40.0;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default color when none is specified (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Color of the outer Sierpinski triangle (`#0d65b8`).
pub const OUTER_TRIANGLE_COLOR: [f32; 4] = [13.0 / 255.0, 101.0 / 255.0, 184.0 / 255.0, 1.0];

/// Color of the carved-out central triangles (`#ffffff`).
pub const CENTRAL_TRIANGLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// =============================================================================
// PYRAMID CONSTANTS
// =============================================================================

/// Vertices of a regular tetrahedron inscribed in the unit sphere.
///
/// The first three form the base at `y = -1/3`, the last is the apex.
///
/// # Example
///
/// ```rust
/// use config::constants::TETRAHEDRON_VERTICES;
///
/// for [x, y, z] in TETRAHEDRON_VERTICES {
///     let len = (x * x + y * y + z * z).sqrt();
///     assert!((len - 1.0).abs() < 1e-9);
/// }
/// ```
pub const TETRAHEDRON_VERTICES: [[f64; 3]; 4] = [
    [0.942_809_041_582_063_4, -1.0 / 3.0, 0.0],
    [-0.471_404_520_791_031_7, -1.0 / 3.0, 0.816_496_580_927_726],
    [-0.471_404_520_791_031_7, -1.0 / 3.0, -0.816_496_580_927_726],
    [0.0, 1.0, 0.0],
];

/// HSV saturation used for every hue of the pyramid color scale.
pub const COLOR_SCALE_SATURATION: f32 = 0.9;

/// HSV value used for every hue of the pyramid color scale.
pub const COLOR_SCALE_VALUE: f32 = 0.9;

/// Seed for the pyramid's color shuffle, so every build colors leaves the
/// same way.
pub const PYRAMID_COLOR_SEED: u64 = 42;

/// Seconds the pyramid needs for one full turn around its axis.
pub const PYRAMID_ROTATION_PERIOD_SECS: f64 = 10.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of central triangles emitted for `depth`: `(3^depth - 1) / 2`.
///
/// Saturates at `usize::MAX` instead of overflowing.
///
/// # Example
///
/// ```rust
/// use config::constants::central_triangle_count;
///
/// assert_eq!(central_triangle_count(0), 0);
/// assert_eq!(central_triangle_count(1), 1);
/// assert_eq!(central_triangle_count(2), 4);
/// ```
pub fn central_triangle_count(depth: u32) -> usize {
    match leaf_triangle_count(depth) {
        usize::MAX => usize::MAX,
        leaves => (leaves - 1) / 2,
    }
}

/// Number of leaf triangles reached for `depth`: `3^depth`.
///
/// Saturates at `usize::MAX` instead of overflowing.
///
/// # Example
///
/// ```rust
/// use config::constants::leaf_triangle_count;
///
/// assert_eq!(leaf_triangle_count(0), 1);
/// assert_eq!(leaf_triangle_count(3), 27);
/// ```
pub fn leaf_triangle_count(depth: u32) -> usize {
    3usize.checked_pow(depth).unwrap_or(usize::MAX)
}
