//! # Points
//!
//! Coordinates that can be averaged componentwise.

use glam::{DVec2, DVec3};
use std::fmt::Debug;

/// An n-dimensional coordinate usable as a triangle vertex.
///
/// The only operation subdivision needs is the componentwise arithmetic
/// mean, which behaves identically in 2D and 3D.
///
/// # Example
///
/// ```rust
/// use fractal_subdivide::Point;
/// use glam::DVec2;
///
/// let m = DVec2::new(0.0, 0.0).midpoint(DVec2::new(4.0, 2.0));
/// assert_eq!(m, DVec2::new(2.0, 1.0));
///
/// let m = [0.0, 2.0, 4.0].midpoint([2.0, 2.0, 0.0]);
/// assert_eq!(m, [1.0, 2.0, 2.0]);
/// ```
pub trait Point: Copy + PartialEq + Debug {
    /// Returns `(self + other) / 2`.
    fn midpoint(self, other: Self) -> Self;
}

impl Point for DVec2 {
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }
}

impl Point for DVec3 {
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }
}

impl<const N: usize> Point for [f64; N] {
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        std::array::from_fn(|i| (self[i] + other[i]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_2d() {
        let a = DVec2::new(-1.0, 3.0);
        let b = DVec2::new(5.0, -7.0);
        assert_eq!(a.midpoint(b), DVec2::new(2.0, -2.0));
    }

    #[test]
    fn test_midpoint_3d() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(3.0, 2.0, 1.0);
        assert_eq!(a.midpoint(b), DVec3::splat(2.0));
    }

    #[test]
    fn test_midpoint_is_symmetric() {
        let a = DVec3::new(0.1, 0.7, -0.3);
        let b = DVec3::new(1.0 / 3.0, 2.5, 9.0);
        assert_eq!(a.midpoint(b), b.midpoint(a));
    }

    #[test]
    fn test_midpoint_array_matches_glam() {
        let a = [0.25, -1.5, 8.0];
        let b = [3.0, 0.5, -2.0];
        let m = a.midpoint(b);
        let g = DVec3::from_array(a).midpoint(DVec3::from_array(b));
        assert_eq!(m, g.to_array());
    }

    #[test]
    fn test_midpoint_of_coincident_points() {
        let p = DVec2::new(4.0, 4.0);
        assert_eq!(p.midpoint(p), p);
    }
}
