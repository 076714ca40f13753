//! # Triangle Sinks
//!
//! Destinations for triangles emitted while subdividing.

use crate::depth::Depth;
use crate::triangle::Triangle;

/// Receives triangles one by one as the subdivider produces them.
///
/// `depth` is the depth of the call that emitted the triangle: the
/// outermost call reports the requested depth, its children one less.
///
/// Implemented for `Vec<Triangle<P>>` (collect, ignoring depth) and for
/// any `FnMut(Triangle<P>, Depth)` closure.
///
/// # Example
///
/// ```rust
/// use fractal_subdivide::{render_subdivisions, Depth, Triangle};
/// use glam::DVec2;
///
/// let t = Triangle::new(DVec2::ZERO, DVec2::new(4.0, 0.0), DVec2::new(2.0, 4.0));
/// let mut depths = Vec::new();
/// render_subdivisions(t, Depth::from(2), &mut |_tri: Triangle<DVec2>, depth: Depth| {
///     depths.push(depth.get());
/// });
/// assert_eq!(depths, vec![2, 1, 1, 1]);
/// ```
pub trait TriangleSink<P> {
    /// Consumes one emitted triangle.
    fn emit(&mut self, triangle: Triangle<P>, depth: Depth);
}

impl<P> TriangleSink<P> for Vec<Triangle<P>> {
    #[inline]
    fn emit(&mut self, triangle: Triangle<P>, _depth: Depth) {
        self.push(triangle);
    }
}

impl<P, F> TriangleSink<P> for F
where
    F: FnMut(Triangle<P>, Depth),
{
    #[inline]
    fn emit(&mut self, triangle: Triangle<P>, depth: Depth) {
        self(triangle, depth);
    }
}
