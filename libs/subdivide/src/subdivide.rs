//! # Recursive Subdivision
//!
//! Sink-driven and collecting entry points.
//!
//! ## Algorithm
//!
//! For a triangle `(A, B, C)` at depth `d > 0`:
//! 1. Compute `M_AB`, `M_BC`, `M_CA`.
//! 2. Emit the central triangle `(M_AB, M_BC, M_CA)` once.
//! 3. Recurse with `d - 1` into `(A, M_AB, M_CA)`, `(B, M_AB, M_BC)`,
//!    `(C, M_BC, M_CA)`, in that order.
//!
//! Depth 0 emits nothing. The central triangle is never recursed into.
//! Recursion depth equals subdivision depth, not triangle count.

use tracing::debug;

use crate::depth::Depth;
use crate::error::SubdivideResult;
use crate::iter::central_triangles;
use crate::point::Point;
use crate::sink::TriangleSink;
use crate::triangle::Triangle;

/// Subdivides `(a, b, c)` and returns every central triangle, in the
/// depth-first order the recursive definition emits them.
///
/// # Errors
///
/// Returns [`SubdivideError::InvalidArgument`](crate::SubdivideError) if
/// `depth` is negative.
///
/// # Example
///
/// ```rust
/// use fractal_subdivide::{subdivide, Triangle};
/// use glam::DVec2;
///
/// let a = DVec2::new(0.0, 0.0);
/// let b = DVec2::new(4.0, 0.0);
/// let c = DVec2::new(2.0, 4.0);
///
/// let centrals = subdivide(a, b, c, 1)?;
/// assert_eq!(
///     centrals,
///     vec![Triangle::new(DVec2::new(2.0, 0.0), DVec2::new(3.0, 2.0), DVec2::new(1.0, 2.0))]
/// );
/// assert!(subdivide(a, b, c, 0)?.is_empty());
/// assert_eq!(subdivide(a, b, c, 2)?.len(), 4);
/// assert!(subdivide(a, b, c, -1).is_err());
/// # Ok::<(), fractal_subdivide::SubdivideError>(())
/// ```
pub fn subdivide<P: Point>(a: P, b: P, c: P, depth: i32) -> SubdivideResult<Vec<Triangle<P>>> {
    let depth = Depth::new(depth)?;
    let centrals: Vec<_> = central_triangles(Triangle::new(a, b, c), depth).collect();
    debug!(depth = depth.get(), emitted = centrals.len(), "subdivided triangle");
    Ok(centrals)
}

/// Subdivides `triangle`, handing each central triangle to `sink` as soon
/// as it is computed.
///
/// This is the variant a renderer drives: nothing is buffered, and the
/// sink sees the depth of the call that produced each triangle. Returns the
/// number of triangles emitted, `(3^d - 1) / 2`.
pub fn render_subdivisions<P, S>(triangle: Triangle<P>, depth: Depth, sink: &mut S) -> usize
where
    P: Point,
    S: TriangleSink<P> + ?Sized,
{
    let emitted = recurse(triangle, depth, sink);
    debug!(depth = depth.get(), emitted, "rendered subdivisions");
    emitted
}

fn recurse<P, S>(triangle: Triangle<P>, depth: Depth, sink: &mut S) -> usize
where
    P: Point,
    S: TriangleSink<P> + ?Sized,
{
    let Some(next) = depth.decrement() else {
        return 0;
    };

    let (central, corners) = triangle.split();
    sink.emit(central, depth);

    let mut emitted = 1;
    for corner in corners {
        emitted += recurse(corner, next, sink);
    }
    emitted
}
