//! # Triangle
//!
//! The only polygon that gets subdivided.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An ordered triple of points.
///
/// Vertex order matters: midpoints and corners are always derived in the
/// order `a`, `b`, `c`, which keeps output deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle<P> {
    pub a: P,
    pub b: P,
    pub c: P,
}

impl<P> Triangle<P> {
    /// Creates a triangle from three vertices.
    #[inline]
    pub const fn new(a: P, b: P, c: P) -> Self {
        Self { a, b, c }
    }

    /// Applies `f` to every vertex, preserving order.
    pub fn map<Q>(self, mut f: impl FnMut(P) -> Q) -> Triangle<Q> {
        Triangle {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }
}

impl<P: Copy> Triangle<P> {
    /// Returns the vertices as `[a, b, c]`.
    #[inline]
    pub fn vertices(&self) -> [P; 3] {
        [self.a, self.b, self.c]
    }
}

impl<P: Point> Triangle<P> {
    /// Edge midpoints `(M_AB, M_BC, M_CA)`.
    #[inline]
    pub fn midpoints(&self) -> (P, P, P) {
        (
            self.a.midpoint(self.b),
            self.b.midpoint(self.c),
            self.c.midpoint(self.a),
        )
    }

    /// The inverted middle triangle `(M_AB, M_BC, M_CA)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fractal_subdivide::Triangle;
    /// use glam::DVec2;
    ///
    /// let t = Triangle::new(DVec2::new(0.0, 0.0), DVec2::new(4.0, 0.0), DVec2::new(2.0, 4.0));
    /// assert_eq!(
    ///     t.central(),
    ///     Triangle::new(DVec2::new(2.0, 0.0), DVec2::new(3.0, 2.0), DVec2::new(1.0, 2.0))
    /// );
    /// ```
    pub fn central(&self) -> Triangle<P> {
        let (ab, bc, ca) = self.midpoints();
        Triangle::new(ab, bc, ca)
    }

    /// The three corner triangles, each keeping one original vertex:
    /// `(A, M_AB, M_CA)`, `(B, M_AB, M_BC)`, `(C, M_BC, M_CA)`.
    pub fn corners(&self) -> [Triangle<P>; 3] {
        self.split().1
    }

    /// Central triangle and corners from a single midpoint computation.
    pub(crate) fn split(&self) -> (Triangle<P>, [Triangle<P>; 3]) {
        let (ab, bc, ca) = self.midpoints();
        (
            Triangle::new(ab, bc, ca),
            [
                Triangle::new(self.a, ab, ca),
                Triangle::new(self.b, ab, bc),
                Triangle::new(self.c, bc, ca),
            ],
        )
    }
}

impl Triangle<DVec2> {
    /// Unsigned area.
    pub fn area(&self) -> f64 {
        (self.b - self.a).perp_dot(self.c - self.a).abs() / 2.0
    }
}

impl Triangle<DVec3> {
    /// Unsigned area.
    pub fn area(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a).length() / 2.0
    }

    /// Unit normal following the `a → b → c` winding, or zero for a
    /// degenerate triangle.
    pub fn normal(&self) -> DVec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }
}
