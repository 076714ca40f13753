//! # Subdivision Property Tests
//!
//! Counting, midpoint, determinism and depth properties checked across
//! several depths and both 2D and 3D inputs.

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};

use crate::*;

fn scenario() -> Triangle<DVec2> {
    Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(2.0, 4.0),
    )
}

fn skewed_3d() -> Triangle<DVec3> {
    Triangle::new(
        DVec3::new(0.3, -1.7, 2.0),
        DVec3::new(5.1, 0.2, -0.4),
        DVec3::new(-2.2, 3.3, 1.1),
    )
}

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn test_scenario_depth_one_emits_single_central() {
    let t = scenario();
    let out = subdivide(t.a, t.b, t.c, 1).unwrap();
    assert_eq!(
        out,
        vec![Triangle::new(
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(1.0, 2.0),
        )]
    );
}

#[test]
fn test_scenario_depth_zero_emits_nothing() {
    let t = scenario();
    assert!(subdivide(t.a, t.b, t.c, 0).unwrap().is_empty());
}

#[test]
fn test_scenario_depth_two_emits_four() {
    let t = scenario();
    assert_eq!(subdivide(t.a, t.b, t.c, 2).unwrap().len(), 4);
}

#[test]
fn test_negative_depth_is_invalid_argument() {
    let t = scenario();
    for depth in [-1, -5, i32::MIN] {
        assert_eq!(
            subdivide(t.a, t.b, t.c, depth),
            Err(SubdivideError::InvalidArgument { depth })
        );
    }
}

// =============================================================================
// COUNTING
// =============================================================================

#[test]
fn test_central_count_is_geometric_series() {
    for d in 0..=7u32 {
        let expected = (3usize.pow(d) - 1) / 2;
        let count = central_triangles(scenario(), Depth::from(d)).count();
        assert_eq!(count, expected, "depth {d}");
    }
}

#[test]
fn test_leaf_count_is_power_of_three() {
    for d in 0..=7u32 {
        let count = leaf_triangles(skewed_3d(), Depth::from(d)).count();
        assert_eq!(count, 3usize.pow(d), "depth {d}");
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

#[test]
fn test_centrals_are_exact_midpoints_of_emitting_call() {
    // Each central must equal the central of the triangle its call received.
    fn walk(t: Triangle<DVec3>, depth: u32, out: &mut Vec<Triangle<DVec3>>) {
        if depth == 0 {
            return;
        }
        out.push(Triangle::new(
            (t.a + t.b) / 2.0,
            (t.b + t.c) / 2.0,
            (t.c + t.a) / 2.0,
        ));
        for child in [
            Triangle::new(t.a, (t.a + t.b) / 2.0, (t.c + t.a) / 2.0),
            Triangle::new(t.b, (t.a + t.b) / 2.0, (t.b + t.c) / 2.0),
            Triangle::new(t.c, (t.b + t.c) / 2.0, (t.c + t.a) / 2.0),
        ] {
            walk(child, depth - 1, out);
        }
    }

    let mut expected = Vec::new();
    walk(skewed_3d(), 4, &mut expected);
    let actual: Vec<_> = central_triangles(skewed_3d(), Depth::from(4)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_leaves_tile_the_corner_area() {
    // Corners cover 3/4 of the parent per level; centrals are carved out.
    let t = skewed_3d();
    let depth = 5;
    let leaf_area: f64 = leaf_triangles(t, Depth::from(depth)).map(|l| l.area()).sum();
    assert_relative_eq!(leaf_area, t.area() * 0.75f64.powi(depth as i32), max_relative = 1e-9);
}

#[test]
fn test_leaves_keep_face_plane() {
    // Corners B and C reverse the winding, so only the axis is compared.
    let t = skewed_3d();
    let normal = t.normal();
    for leaf in leaf_triangles(t, Depth::from(3)) {
        assert_relative_eq!(leaf.normal().dot(normal).abs(), 1.0, max_relative = 1e-9);
    }
}

#[test]
fn test_degenerate_triangle_degrades_gracefully() {
    let p = DVec2::new(1.0, 1.0);
    let out = subdivide(p, p, p, 3).unwrap();
    assert_eq!(out.len(), 13);
    assert!(out.iter().all(|t| t.area() == 0.0));

    let line = subdivide(DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0), 2).unwrap();
    assert_eq!(line.len(), 4);
    assert!(line.iter().all(|t| t.area() == 0.0));
}

// =============================================================================
// DETERMINISM AND ORDER
// =============================================================================

#[test]
fn test_repeat_calls_are_bit_identical() {
    let t = skewed_3d();
    let first = subdivide(t.a, t.b, t.c, 6).unwrap();
    let second = subdivide(t.a, t.b, t.c, 6).unwrap();
    let bits = |v: &[Triangle<DVec3>]| -> Vec<u64> {
        v.iter()
            .flat_map(|t| t.vertices())
            .flat_map(|p| p.to_array())
            .map(f64::to_bits)
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_iterator_matches_recursive_order() {
    for d in 0..=6u32 {
        let mut recursive: Vec<Triangle<DVec3>> = Vec::new();
        render_subdivisions(skewed_3d(), Depth::from(d), &mut recursive);
        let iterative: Vec<_> = central_triangles(skewed_3d(), Depth::from(d)).collect();
        assert_eq!(recursive, iterative, "depth {d}");
    }
}

#[test]
fn test_depth_decreases_by_one_per_call() {
    // In pre-order, a triangle emitted at depth k is followed either by its
    // first child (k - 1) or, at the base, by a sibling or ancestor's sibling.
    let mut depths = Vec::new();
    render_subdivisions(scenario(), Depth::from(5), &mut |_t: Triangle<DVec2>, d: Depth| {
        depths.push(d.get());
    });

    assert_eq!(depths.first(), Some(&5));
    for pair in depths.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev > 1 {
            assert_eq!(next, prev - 1);
        } else {
            assert!(next >= prev);
        }
    }
    assert!(depths.iter().all(|&d| (1..=5).contains(&d)));
    assert_eq!(depths.iter().filter(|&&d| d == 1).count(), 81);
}
