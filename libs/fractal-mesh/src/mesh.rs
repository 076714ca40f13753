//! # Mesh Data Structure
//!
//! Triangle mesh with per-vertex colors, filled from subdivided triangles.

use config::constants::DEFAULT_COLOR;
use fractal_subdivide::Triangle;
use glam::{DMat4, DVec3};

/// A triangle mesh with vertices, indices and optional vertex colors.
///
/// Geometry stays f64; the `*_f32` exporters produce GPU-ready buffers.
/// Subdivided scenes use unshared vertices (three per triangle) so every
/// triangle can carry its own flat color.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::Mesh;
/// use fractal_subdivide::Triangle;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y), [1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex colors (RGBA, f32 for GPU)
    colors: Option<Vec<[f32; 4]>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for `triangle_count` unshared triangles.
    pub fn with_triangle_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
            triangles: Vec::with_capacity(triangle_count),
            colors: Some(Vec::with_capacity(triangle_count * 3)),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// If the mesh already carries colors the new vertex gets `DEFAULT_COLOR`.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        if let Some(colors) = &mut self.colors {
            colors.push(DEFAULT_COLOR);
        }
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Appends a triangle with its own three vertices, all in `color`.
    ///
    /// Vertices added earlier without a color get `DEFAULT_COLOR`.
    pub fn push_triangle(&mut self, triangle: Triangle<DVec3>, color: [f32; 4]) {
        let existing = self.vertices.len();
        let colors = self
            .colors
            .get_or_insert_with(|| vec![DEFAULT_COLOR; existing]);
        colors.extend([color; 3]);

        let first = existing as u32;
        self.vertices.extend(triangle.vertices());
        self.triangles.push([first, first + 1, first + 2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the triangle at `index` as positions.
    pub fn triangle(&self, index: usize) -> Option<Triangle<DVec3>> {
        let [a, b, c] = *self.triangles.get(index)?;
        Some(Triangle::new(
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ))
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Appends another mesh, offsetting its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        if let Some(other_colors) = &other.colors {
            let existing = self.vertices.len();
            self.colors
                .get_or_insert_with(|| vec![DEFAULT_COLOR; existing])
                .extend_from_slice(other_colors);
        } else if let Some(colors) = &mut self.colors {
            colors.extend(std::iter::repeat(DEFAULT_COLOR).take(other.vertices.len()));
        }

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates that every triangle index points at a vertex and that the
    /// color buffer, when present, matches the vertex buffer.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        let indices_ok = self
            .triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| i < vertex_count));
        let colors_ok = self
            .colors
            .as_ref()
            .map_or(true, |colors| colors.len() == self.vertices.len());
        indices_ok && colors_ok
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports only the x and y components, for 2D drawing surfaces.
    ///
    /// Returns flattened [x, y, x, y, ...] array.
    pub fn positions_2d_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports vertex colors as flattened RGBA, `DEFAULT_COLOR` when unset.
    pub fn colors_f32(&self) -> Vec<f32> {
        match &self.colors {
            Some(colors) => colors.iter().flatten().copied().collect(),
            None => DEFAULT_COLOR.repeat(self.vertices.len()),
        }
    }
}
