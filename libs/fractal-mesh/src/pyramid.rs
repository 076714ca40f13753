//! # Subdivided Pyramid
//!
//! A regular tetrahedron whose faces are each replaced by the `3^d` corner
//! leaves of a midpoint subdivision, every leaf in its own hue.

use std::f64::consts::TAU;
use std::time::Duration;

use config::constants::{PYRAMID_COLOR_SEED, PYRAMID_ROTATION_PERIOD_SECS, TETRAHEDRON_VERTICES};
use fractal_subdivide::{leaf_triangles, Depth, Triangle};
use glam::{DMat4, DVec3};
use rayon::prelude::*;
use tracing::debug;

use crate::color::ColorScale;
use crate::error::{limit_depth, MeshResult};
use crate::mesh::Mesh;

/// The four faces of the reference tetrahedron, base first.
pub fn pyramid_faces() -> [Triangle<DVec3>; 4] {
    let [v0, v1, v2, v3] = TETRAHEDRON_VERTICES.map(DVec3::from_array);
    [
        Triangle::new(v0, v1, v2),
        Triangle::new(v0, v1, v3),
        Triangle::new(v0, v3, v2),
        Triangle::new(v3, v1, v2),
    ]
}

/// Builds the subdivided pyramid mesh.
///
/// Faces are subdivided in parallel; leaves are concatenated in face order.
/// Leaf colors come from the hue scale shuffled with `PYRAMID_COLOR_SEED`,
/// so the mesh is identical on every call. The result has `4 · 3^depth`
/// triangles with unshared vertices and sequential indices.
///
/// # Errors
///
/// Returns [`MeshError::DepthTooLarge`](crate::MeshError::DepthTooLarge) above `MAX_SUBDIVISION_DEPTH`.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::pyramid_mesh;
/// use fractal_subdivide::Depth;
///
/// let mesh = pyramid_mesh(Depth::from(2))?;
/// assert_eq!(mesh.triangle_count(), 36);
/// assert_eq!(mesh.vertex_count(), 108);
/// # Ok::<(), fractal_mesh::MeshError>(())
/// ```
pub fn pyramid_mesh(depth: Depth) -> MeshResult<Mesh> {
    let depth = limit_depth(depth)?;

    let per_face: Vec<Vec<Triangle<DVec3>>> = pyramid_faces()
        .par_iter()
        .map(|face| leaf_triangles(*face, depth).collect())
        .collect();

    let count: usize = per_face.iter().map(Vec::len).sum();
    let colors = ColorScale::new(count)
        .shuffled(PYRAMID_COLOR_SEED)
        .as_rgba(1.0);
    let mut mesh = Mesh::with_triangle_capacity(count);
    for (leaf, color) in per_face.into_iter().flatten().zip(colors) {
        mesh.push_triangle(leaf, color);
    }

    debug!(
        depth = depth.get(),
        triangles = mesh.triangle_count(),
        "built pyramid mesh"
    );
    Ok(mesh)
}

/// A subdivided pyramid placed in the world and spinning about an axis.
#[derive(Debug, Clone)]
pub struct Pyramid {
    mesh: Mesh,
    depth: Depth,
    model: DMat4,
    rotation_axis: DVec3,
}

impl Pyramid {
    /// Builds the pyramid at `translation`, spinning about `rotation_axis`.
    ///
    /// A zero axis yields a pyramid that never rotates.
    ///
    /// # Errors
    ///
    /// See [`pyramid_mesh`].
    pub fn new(depth: Depth, translation: DVec3, rotation_axis: DVec3) -> MeshResult<Self> {
        Ok(Self {
            mesh: pyramid_mesh(depth)?,
            depth,
            model: DMat4::from_translation(translation),
            rotation_axis: rotation_axis.normalize_or_zero(),
        })
    }

    /// Regenerates the mesh at a new depth, keeping the current pose.
    ///
    /// On error the previous mesh is kept.
    ///
    /// # Errors
    ///
    /// See [`pyramid_mesh`].
    pub fn set_subdivisions(&mut self, depth: Depth) -> MeshResult<()> {
        self.mesh = pyramid_mesh(depth)?;
        self.depth = depth;
        Ok(())
    }

    /// Spins the pyramid by the angle covered in `elapsed`; one full turn
    /// takes `PYRAMID_ROTATION_PERIOD_SECS`.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.rotation_axis == DVec3::ZERO {
            return;
        }
        let angle = TAU * elapsed.as_secs_f64() / PYRAMID_ROTATION_PERIOD_SECS;
        self.model *= DMat4::from_axis_angle(self.rotation_axis, angle);
    }

    /// Mesh in model space.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Current subdivision depth.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Model (model-view) matrix.
    pub fn model_matrix(&self) -> DMat4 {
        self.model
    }

    /// Mesh with the model matrix applied.
    pub fn world_mesh(&self) -> Mesh {
        let mut mesh = self.mesh.clone();
        mesh.transform(&self.model);
        mesh
    }
}
