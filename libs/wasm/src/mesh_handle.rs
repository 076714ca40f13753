//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use fractal_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// Flat buffers for one scene, ready for `gl.bufferData`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = pyramid_buffers(3);
///
/// const size = mesh.position_size();   // 3 for the pyramid, 2 for Sierpinski
/// const positions = mesh.positions();  // Float32Array
/// const colors = mesh.colors();        // Float32Array, RGBA per vertex
/// const indices = mesh.indices();      // Uint32Array
///
/// gl.bindBuffer(gl.ARRAY_BUFFER, positionBuffer);
/// gl.bufferData(gl.ARRAY_BUFFER, positions, gl.STATIC_DRAW);
/// gl.vertexAttribPointer(positionLocation, size, gl.FLOAT, false, 0, 0);
/// gl.drawElements(gl.TRIANGLES, indices.length, gl.UNSIGNED_INT, 0);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions, `position_size` floats per vertex
    positions: Vec<f32>,
    /// Vertex colors as [r, g, b, a, ...]
    colors: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    position_size: u32,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Components per vertex in [`positions`](Self::positions): 2 or 3.
    #[wasm_bindgen(getter)]
    pub fn position_size(&self) -> u32 {
        self.position_size
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the vertex colors as a Float32Array.
    ///
    /// Length: vertex_count * 4
    pub fn colors(&self) -> Vec<f32> {
        self.colors.clone()
    }

    /// Returns the index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Packs a mesh with 3D positions.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self::pack(mesh, mesh.vertices_f32(), 3)
    }

    /// Packs a flat (z = 0) mesh keeping only x and y.
    pub fn from_mesh_2d(mesh: &Mesh) -> Self {
        Self::pack(mesh, mesh.positions_2d_f32(), 2)
    }

    fn pack(mesh: &Mesh, positions: Vec<f32>, position_size: u32) -> Self {
        Self {
            positions,
            colors: mesh.colors_f32(),
            indices: mesh.indices_u32(),
            position_size,
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
        }
    }
}
