//! WASM-facing entry points for the fractal scenes.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every export validates its depth with
//! [`fractal_mesh::scene_depth`] and turns errors into JS strings. Native
//! tests use the `*_internal` helpers, which return Rust errors and never
//! touch a JS host.
//!
//! ```
//! let mesh = fractal_wasm::pyramid_buffers_internal(1).unwrap();
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

use config::constants::{central_triangle_count, leaf_triangle_count, MAX_SUBDIVISION_DEPTH};
use fractal_mesh::{
    pyramid_mesh, scene_depth, MeshResult, RenderMode, SierpinskiScene, SvgCanvas,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "fractal-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the largest depth the exports accept, for sizing UI sliders.
///
/// # Examples
/// ```
/// assert_eq!(fractal_wasm::max_subdivision_depth(), 10);
/// ```
#[wasm_bindgen]
pub fn max_subdivision_depth() -> u32 {
    MAX_SUBDIVISION_DEPTH
}

/// Builds the Sierpinski scene for a `width × height` canvas.
///
/// Positions are 2D canvas coordinates (y down). Triangles overlap and must
/// be drawn in index order. With `outline` set every triangle is colored
/// for stroking and the caller draws each one as a line loop.
///
/// # Errors
/// Returns a JavaScript error value with a human-readable message for a
/// negative or too large depth or an unusable canvas.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = sierpinski_buffers(canvas.width, canvas.height, 4, false);
/// // gl.drawArrays(gl.TRIANGLES, 0, mesh.vertex_count);
/// ```
#[wasm_bindgen]
pub fn sierpinski_buffers(
    width: f64,
    height: f64,
    depth: i32,
    outline: bool,
) -> Result<MeshHandle, JsValue> {
    sierpinski_buffers_internal(width, height, depth, outline).map_err(to_js_error)
}

/// Host-only variant of [`sierpinski_buffers`].
///
/// # Examples
/// ```
/// let mesh = fractal_wasm::sierpinski_buffers_internal(640.0, 480.0, 2, false).unwrap();
/// assert_eq!(mesh.triangle_count(), 5);
/// assert_eq!(mesh.position_size(), 2);
/// ```
pub fn sierpinski_buffers_internal(
    width: f64,
    height: f64,
    depth: i32,
    outline: bool,
) -> MeshResult<MeshHandle> {
    let depth = scene_depth(depth)?;
    let mesh = sierpinski_scene(width, height, outline)?.to_mesh(depth)?;
    Ok(MeshHandle::from_mesh_2d(&mesh))
}

/// Renders the Sierpinski scene as an SVG document.
///
/// # Errors
/// Same as [`sierpinski_buffers`].
#[wasm_bindgen]
pub fn sierpinski_svg(width: f64, height: f64, depth: i32, outline: bool) -> Result<String, JsValue> {
    sierpinski_svg_internal(width, height, depth, outline).map_err(to_js_error)
}

/// Host-only variant of [`sierpinski_svg`].
///
/// # Examples
/// ```
/// let svg = fractal_wasm::sierpinski_svg_internal(300.0, 300.0, 1, true).unwrap();
/// assert_eq!(svg.matches("<polygon").count(), 2);
/// ```
pub fn sierpinski_svg_internal(
    width: f64,
    height: f64,
    depth: i32,
    outline: bool,
) -> MeshResult<String> {
    let depth = scene_depth(depth)?;
    let mut canvas = SvgCanvas::new(width, height);
    sierpinski_scene(width, height, outline)?.render(depth, &mut canvas)?;
    Ok(canvas.finish())
}

fn sierpinski_scene(width: f64, height: f64, outline: bool) -> MeshResult<SierpinskiScene> {
    let mode = if outline {
        RenderMode::Outline
    } else {
        RenderMode::Fill
    };
    Ok(SierpinskiScene::for_canvas(width, height)?.with_mode(mode))
}

/// Builds the subdivided pyramid in model space.
///
/// The caller owns the model-view matrix and spins it each frame.
///
/// # Errors
/// Returns a JavaScript error value for a negative or too large depth.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = pyramid_buffers(slider.valueAsNumber);
/// // gl.drawElements(gl.TRIANGLES, mesh.indices().length, gl.UNSIGNED_INT, 0);
/// ```
#[wasm_bindgen]
pub fn pyramid_buffers(depth: i32) -> Result<MeshHandle, JsValue> {
    pyramid_buffers_internal(depth).map_err(to_js_error)
}

/// Host-only variant of [`pyramid_buffers`].
pub fn pyramid_buffers_internal(depth: i32) -> MeshResult<MeshHandle> {
    let mesh = pyramid_mesh(scene_depth(depth)?)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Triangle counts for one depth, shown next to the depth slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSummary {
    pub depth: u32,
    pub central_triangles: usize,
    pub leaf_triangles: usize,
    /// Outer triangle plus centrals.
    pub sierpinski_triangles: usize,
    /// Leaves over the four tetrahedron faces.
    pub pyramid_triangles: usize,
}

/// Returns the [`SceneSummary`] for `depth` as a JSON string.
///
/// # Errors
/// Returns a JavaScript error value for a negative or too large depth.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const { central_triangles } = JSON.parse(scene_summary_json(3));
/// ```
#[wasm_bindgen]
pub fn scene_summary_json(depth: i32) -> Result<String, JsValue> {
    let summary = scene_summary_internal(depth).map_err(to_js_error)?;
    serde_json::to_string(&summary).map_err(to_js_error)
}

/// Host-only variant of [`scene_summary_json`], before serialization.
///
/// # Examples
/// ```
/// let summary = fractal_wasm::scene_summary_internal(2).unwrap();
/// assert_eq!(summary.central_triangles, 4);
/// assert_eq!(summary.pyramid_triangles, 36);
/// ```
pub fn scene_summary_internal(depth: i32) -> MeshResult<SceneSummary> {
    let depth = scene_depth(depth)?.get();
    let central_triangles = central_triangle_count(depth);
    let leaf_triangles = leaf_triangle_count(depth);
    Ok(SceneSummary {
        depth,
        central_triangles,
        leaf_triangles,
        sierpinski_triangles: central_triangles + 1,
        pyramid_triangles: leaf_triangles * 4,
    })
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
