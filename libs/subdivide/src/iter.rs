//! # Lazy Subdivision Iterators
//!
//! Iterative equivalents of the recursive definition. Each iterator keeps an
//! explicit worklist of `(triangle, depth)` pairs; corners are pushed in
//! reverse so they pop in `A, B, C` order, which reproduces the recursive
//! pre-order exactly. The worklist never holds more than `2d + 1` entries.

use std::iter::FusedIterator;

use config::constants::{central_triangle_count, leaf_triangle_count};

use crate::depth::Depth;
use crate::point::Point;
use crate::triangle::Triangle;

/// Iterator over the central triangles of a subdivision.
///
/// Created by [`central_triangles`]. The count still to come is
/// [`exact_len`](Centrals::exact_len), `None` once it no longer fits in
/// `usize` (depth above 40 on 64-bit targets).
#[derive(Debug, Clone)]
pub struct Centrals<P> {
    stack: Vec<(Triangle<P>, Depth)>,
    remaining: Option<usize>,
}

/// Lazily yields the `(3^d - 1) / 2` central triangles of `triangle`.
///
/// # Example
///
/// ```rust
/// use fractal_subdivide::{central_triangles, Depth, Triangle};
/// use glam::DVec2;
///
/// let t = Triangle::new(DVec2::ZERO, DVec2::new(4.0, 0.0), DVec2::new(2.0, 4.0));
/// let centrals = central_triangles(t, Depth::from(3));
/// assert_eq!(centrals.exact_len(), Some(13));
/// ```
pub fn central_triangles<P: Point>(triangle: Triangle<P>, depth: Depth) -> Centrals<P> {
    let mut stack = Vec::with_capacity(worklist_capacity(depth));
    if !depth.is_zero() {
        stack.push((triangle, depth));
    }
    Centrals {
        stack,
        remaining: exact(central_triangle_count(depth.get())),
    }
}

impl<P: Point> Iterator for Centrals<P> {
    type Item = Triangle<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let (triangle, depth) = self.stack.pop()?;
        let (central, corners) = triangle.split();

        if let Some(next) = depth.decrement().filter(|d| !d.is_zero()) {
            for corner in corners.into_iter().rev() {
                self.stack.push((corner, next));
            }
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(central)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<P: Point> FusedIterator for Centrals<P> {}

impl<P> Centrals<P> {
    /// Number of triangles left, if it fits in `usize`.
    pub fn exact_len(&self) -> Option<usize> {
        self.remaining
    }
}

/// Iterator over the leaf (corner) triangles of a subdivision.
///
/// Created by [`leaf_triangles`]. See [`Leaves::exact_len`] for the count.
#[derive(Debug, Clone)]
pub struct Leaves<P> {
    stack: Vec<(Triangle<P>, Depth)>,
    remaining: Option<usize>,
}

/// Lazily yields the `3^d` corner triangles reached at depth 0.
///
/// Central triangles are dropped. At depth 0 the input triangle itself is
/// the single leaf. This is the tessellation used for subdivided solids.
///
/// # Example
///
/// ```rust
/// use fractal_subdivide::{leaf_triangles, Depth, Triangle};
/// use glam::DVec3;
///
/// let face = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(leaf_triangles(face, Depth::ZERO).collect::<Vec<_>>(), vec![face]);
/// assert_eq!(leaf_triangles(face, Depth::from(2)).count(), 9);
/// ```
pub fn leaf_triangles<P: Point>(triangle: Triangle<P>, depth: Depth) -> Leaves<P> {
    let mut stack = Vec::with_capacity(worklist_capacity(depth));
    stack.push((triangle, depth));
    Leaves {
        stack,
        remaining: exact(leaf_triangle_count(depth.get())),
    }
}

impl<P: Point> Iterator for Leaves<P> {
    type Item = Triangle<P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((triangle, depth)) = self.stack.pop() {
            match depth.decrement() {
                None => {
                    if let Some(remaining) = self.remaining.as_mut() {
                        *remaining -= 1;
                    }
                    return Some(triangle);
                }
                Some(next) => {
                    for corner in triangle.corners().into_iter().rev() {
                        self.stack.push((corner, next));
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<P: Point> FusedIterator for Leaves<P> {}

impl<P> Leaves<P> {
    /// Number of leaves left, if it fits in `usize`.
    pub fn exact_len(&self) -> Option<usize> {
        self.remaining
    }
}

// Peak worklist size, capped so absurd depths don't pre-allocate.
fn worklist_capacity(depth: Depth) -> usize {
    (depth.get() as usize).saturating_mul(2).saturating_add(1).min(128)
}

// Counts that saturated cannot be reported exactly.
fn exact(count: usize) -> Option<usize> {
    (count != usize::MAX).then_some(count)
}
