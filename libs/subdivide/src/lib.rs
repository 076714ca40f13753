//! # Fractal Subdivide
//!
//! Recursive midpoint subdivision of triangles, the geometry behind the
//! Sierpinski triangle and subdivided pyramid scenes.
//!
//! ## Architecture
//!
//! ```text
//! (A, B, C), depth → subdivider → central triangles  (Sierpinski)
//!                               → leaf triangles     (subdivided faces)
//!                               → TriangleSink       (immediate drawing)
//! ```
//!
//! Generation is pure: no randomness, no hidden state, identical output for
//! identical input. Drawing is left to the caller through [`TriangleSink`].
//!
//! ## Usage
//!
//! ```rust
//! use fractal_subdivide::{central_triangles, subdivide, Depth, Triangle};
//! use glam::DVec2;
//!
//! let a = DVec2::new(0.0, 0.0);
//! let b = DVec2::new(4.0, 0.0);
//! let c = DVec2::new(2.0, 4.0);
//!
//! // Collected, with validation of a signed depth
//! let centrals = subdivide(a, b, c, 2)?;
//! assert_eq!(centrals.len(), 4);
//!
//! // Lazy, with an already validated depth
//! let lazy: Vec<_> = central_triangles(Triangle::new(a, b, c), Depth::from(2)).collect();
//! assert_eq!(lazy, centrals);
//! # Ok::<(), fractal_subdivide::SubdivideError>(())
//! ```

pub mod depth;
pub mod error;
pub mod iter;
pub mod point;
pub mod sink;
pub mod subdivide;
pub mod triangle;

pub use depth::Depth;
pub use error::{SubdivideError, SubdivideResult};
pub use iter::{central_triangles, leaf_triangles, Centrals, Leaves};
pub use point::Point;
pub use sink::TriangleSink;
pub use subdivide::{render_subdivisions, subdivide};
pub use triangle::Triangle;

#[cfg(test)]
mod tests;
