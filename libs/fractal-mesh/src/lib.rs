//! # Fractal Mesh
//!
//! Drawable scenes built on `fractal-subdivide`.
//!
//! ## Architecture
//!
//! ```text
//! fractal-subdivide (triangles) → fractal-mesh (Mesh / Canvas2d) → GPU or SVG
//! ```
//!
//! ## Scenes
//!
//! - **Sierpinski**: outer triangle fitted to a canvas, central triangles
//!   painted over it, fill or outline
//! - **Pyramid**: regular tetrahedron with leaf-subdivided faces, one hue
//!   per leaf, spinning about an axis
//!
//! ## Usage
//!
//! ```rust
//! use fractal_mesh::{pyramid_mesh, scene_depth, SierpinskiScene};
//!
//! let depth = scene_depth(3)?;
//!
//! let sierpinski = SierpinskiScene::for_canvas(640.0, 480.0)?.to_mesh(depth)?;
//! assert_eq!(sierpinski.triangle_count(), 14);
//!
//! let pyramid = pyramid_mesh(depth)?;
//! assert_eq!(pyramid.triangle_count(), 108);
//! # Ok::<(), fractal_mesh::MeshError>(())
//! ```

pub mod color;
pub mod error;
pub mod mesh;
pub mod pyramid;
pub mod sierpinski;
pub mod svg;

pub use color::ColorScale;
pub use error::{scene_depth, MeshError, MeshResult};
pub use mesh::Mesh;
pub use pyramid::{pyramid_faces, pyramid_mesh, Pyramid};
pub use sierpinski::{Canvas2d, RenderMode, SierpinskiScene};
pub use svg::SvgCanvas;
