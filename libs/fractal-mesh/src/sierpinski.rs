//! # Sierpinski Scene
//!
//! The 2D fractal: an outer triangle fitted to a canvas, with the central
//! triangle of every subdivision step painted over it.
//!
//! ## Drawing order
//!
//! 1. Clear the canvas.
//! 2. Outer triangle in `OUTER_TRIANGLE_COLOR`.
//! 3. Every central triangle, depth-first, in `CENTRAL_TRIANGLE_COLOR`.
//!    In outline mode the centrals are stroked in the outer color instead.

use config::constants::{CANVAS_MARGIN, CENTRAL_TRIANGLE_COLOR, OUTER_TRIANGLE_COLOR};
use fractal_subdivide::{central_triangles, render_subdivisions, Depth, Triangle};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{limit_depth, MeshError, MeshResult};
use crate::mesh::Mesh;

/// How triangles are put on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Solid triangles.
    #[default]
    Fill,
    /// Triangle edges only.
    Outline,
}

/// A 2D drawing surface the scene renders into.
///
/// Coordinates are canvas units with y pointing down.
pub trait Canvas2d {
    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Draws one triangle in `color` (RGBA in [0, 1]).
    fn draw_triangle(&mut self, triangle: &Triangle<DVec2>, mode: RenderMode, color: [f32; 4]);
}

/// Sierpinski triangle scene.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{RenderMode, SierpinskiScene, SvgCanvas};
/// use fractal_subdivide::Depth;
///
/// let scene = SierpinskiScene::fit_canvas(600.0, 600.0, 40.0)?;
/// let mut canvas = SvgCanvas::new(600.0, 600.0);
/// let drawn = scene.render(Depth::from(2), &mut canvas)?;
/// assert_eq!(drawn, 5); // outer + 1 + 3
/// assert!(canvas.finish().contains("<polygon"));
/// # Ok::<(), fractal_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SierpinskiScene {
    outer: Triangle<DVec2>,
    mode: RenderMode,
}

impl SierpinskiScene {
    /// Creates a scene around an arbitrary outer triangle.
    pub fn new(outer: Triangle<DVec2>) -> Self {
        Self {
            outer,
            mode: RenderMode::default(),
        }
    }

    /// Fits an equilateral triangle into a `width × height` canvas.
    ///
    /// The triangle's height is the canvas height minus `margin` top and
    /// bottom; its apex sits at the top center and its base is centered.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidCanvas`] if a dimension is not finite or
    /// not positive, the margin is negative, or the margins leave no height.
    pub fn fit_canvas(width: f64, height: f64, margin: f64) -> MeshResult<Self> {
        let valid = width.is_finite()
            && height.is_finite()
            && margin.is_finite()
            && width > 0.0
            && margin >= 0.0
            && height > 2.0 * margin;
        if !valid {
            return Err(MeshError::InvalidCanvas {
                width,
                height,
                margin,
            });
        }

        let triangle_height = height - 2.0 * margin;
        let side = 2.0 * triangle_height / 3f64.sqrt();
        let base_y = height - margin;

        Ok(Self::new(Triangle::new(
            DVec2::new(width / 2.0, margin),
            DVec2::new((width - side) / 2.0, base_y),
            DVec2::new((width + side) / 2.0, base_y),
        )))
    }

    /// Fits the scene using the default `CANVAS_MARGIN`.
    ///
    /// # Errors
    ///
    /// See [`SierpinskiScene::fit_canvas`].
    pub fn for_canvas(width: f64, height: f64) -> MeshResult<Self> {
        Self::fit_canvas(width, height, CANVAS_MARGIN)
    }

    /// Sets the render mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the outer triangle.
    pub fn outer(&self) -> Triangle<DVec2> {
        self.outer
    }

    /// Returns the render mode.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Color used for central triangles in the current mode.
    pub fn central_color(&self) -> [f32; 4] {
        match self.mode {
            RenderMode::Fill => CENTRAL_TRIANGLE_COLOR,
            RenderMode::Outline => OUTER_TRIANGLE_COLOR,
        }
    }

    /// Redraws the whole scene at `depth` and returns the number of
    /// triangles drawn, `1 + (3^depth - 1) / 2`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DepthTooLarge`] above `MAX_SUBDIVISION_DEPTH`;
    /// the canvas is left untouched in that case.
    pub fn render<C>(&self, depth: Depth, canvas: &mut C) -> MeshResult<usize>
    where
        C: Canvas2d + ?Sized,
    {
        let depth = limit_depth(depth)?;
        let mode = self.mode;
        let central_color = self.central_color();

        canvas.clear();
        canvas.draw_triangle(&self.outer, mode, OUTER_TRIANGLE_COLOR);
        let centrals = render_subdivisions(
            self.outer,
            depth,
            &mut |triangle: Triangle<DVec2>, _depth: Depth| {
                canvas.draw_triangle(&triangle, mode, central_color);
            },
        );

        debug!(depth = depth.get(), ?mode, centrals, "rendered sierpinski scene");
        Ok(1 + centrals)
    }

    /// Builds a flat (z = 0) mesh of the scene: the outer triangle followed
    /// by every central triangle, each with its scene color.
    ///
    /// Triangles overlap; draw them in index order for the fractal to show.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DepthTooLarge`] above `MAX_SUBDIVISION_DEPTH`.
    pub fn to_mesh(&self, depth: Depth) -> MeshResult<Mesh> {
        let depth = limit_depth(depth)?;
        let centrals = central_triangles(self.outer, depth);
        let central_color = self.central_color();

        let mut mesh = Mesh::with_triangle_capacity(1 + centrals.size_hint().0);
        mesh.push_triangle(self.outer.map(|p| p.extend(0.0)), OUTER_TRIANGLE_COLOR);
        for triangle in centrals {
            mesh.push_triangle(triangle.map(|p| p.extend(0.0)), central_color);
        }

        debug!(
            depth = depth.get(),
            triangles = mesh.triangle_count(),
            "built sierpinski mesh"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::MAX_SUBDIVISION_DEPTH;

    /// Records every call for inspection.
    #[derive(Default)]
    struct RecordingCanvas {
        clears: usize,
        calls: Vec<(Triangle<DVec2>, RenderMode, [f32; 4])>,
    }

    impl Canvas2d for RecordingCanvas {
        fn clear(&mut self) {
            self.clears += 1;
            self.calls.clear();
        }

        fn draw_triangle(&mut self, triangle: &Triangle<DVec2>, mode: RenderMode, color: [f32; 4]) {
            self.calls.push((*triangle, mode, color));
        }
    }

    #[test]
    fn test_fit_canvas_geometry() {
        let scene = SierpinskiScene::fit_canvas(600.0, 600.0, 40.0).unwrap();
        let outer = scene.outer();
        let side = 2.0 * 520.0 / 3f64.sqrt();

        assert_eq!(outer.a, DVec2::new(300.0, 40.0));
        assert_relative_eq!(outer.b.x, (600.0 - side) / 2.0);
        assert_relative_eq!(outer.c.x, (600.0 + side) / 2.0);
        assert_eq!(outer.b.y, 560.0);
        assert_eq!(outer.c.y, 560.0);

        // Equilateral
        let ab = outer.a.distance(outer.b);
        let bc = outer.b.distance(outer.c);
        let ca = outer.c.distance(outer.a);
        assert_relative_eq!(ab, bc, max_relative = 1e-12);
        assert_relative_eq!(bc, ca, max_relative = 1e-12);
    }

    #[test]
    fn test_fit_canvas_rejects_bad_sizes() {
        assert!(SierpinskiScene::fit_canvas(0.0, 600.0, 40.0).is_err());
        assert!(SierpinskiScene::fit_canvas(600.0, 80.0, 40.0).is_err());
        assert!(SierpinskiScene::fit_canvas(600.0, 600.0, -1.0).is_err());
        assert!(SierpinskiScene::fit_canvas(f64::NAN, 600.0, 40.0).is_err());
        assert!(SierpinskiScene::fit_canvas(f64::INFINITY, 600.0, 40.0).is_err());
    }

    #[test]
    fn test_for_canvas_uses_default_margin() {
        let scene = SierpinskiScene::for_canvas(800.0, 600.0).unwrap();
        assert_eq!(scene.outer().a.y, CANVAS_MARGIN);
    }

    #[test]
    fn test_render_depth_zero_draws_outer_only() {
        let scene = SierpinskiScene::for_canvas(400.0, 400.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        let drawn = scene.render(Depth::ZERO, &mut canvas).unwrap();
        assert_eq!(drawn, 1);
        assert_eq!(canvas.clears, 1);
        assert_eq!(
            canvas.calls,
            vec![(scene.outer(), RenderMode::Fill, OUTER_TRIANGLE_COLOR)]
        );
    }

    #[test]
    fn test_render_fill_colors() {
        let scene = SierpinskiScene::for_canvas(400.0, 400.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        let drawn = scene.render(Depth::from(3), &mut canvas).unwrap();
        assert_eq!(drawn, 14);
        assert_eq!(canvas.calls.len(), 14);
        assert_eq!(canvas.calls[1].0, scene.outer().central());
        assert!(canvas.calls[1..]
            .iter()
            .all(|(_, mode, color)| *mode == RenderMode::Fill && *color == CENTRAL_TRIANGLE_COLOR));
    }

    #[test]
    fn test_render_outline_strokes_in_outer_color() {
        let scene = SierpinskiScene::for_canvas(400.0, 400.0)
            .unwrap()
            .with_mode(RenderMode::Outline);
        let mut canvas = RecordingCanvas::default();
        scene.render(Depth::from(2), &mut canvas).unwrap();
        assert!(canvas
            .calls
            .iter()
            .all(|(_, mode, color)| *mode == RenderMode::Outline && *color == OUTER_TRIANGLE_COLOR));
    }

    #[test]
    fn test_rerender_replaces_previous_frame() {
        let scene = SierpinskiScene::for_canvas(400.0, 400.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        scene.render(Depth::from(4), &mut canvas).unwrap();
        scene.render(Depth::from(1), &mut canvas).unwrap();
        assert_eq!(canvas.clears, 2);
        assert_eq!(canvas.calls.len(), 2);
    }

    #[test]
    fn test_render_rejects_excessive_depth() {
        let scene = SierpinskiScene::for_canvas(400.0, 400.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        let err = scene
            .render(Depth::from(MAX_SUBDIVISION_DEPTH + 1), &mut canvas)
            .unwrap_err();
        assert!(matches!(err, MeshError::DepthTooLarge { .. }));
        assert_eq!(canvas.clears, 0);
    }

    #[test]
    fn test_to_mesh_matches_render() {
        let scene = SierpinskiScene::for_canvas(400.0, 400.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        scene.render(Depth::from(3), &mut canvas).unwrap();

        let mesh = scene.to_mesh(Depth::from(3)).unwrap();
        assert_eq!(mesh.triangle_count(), canvas.calls.len());
        assert!(mesh.validate());
        for (i, (triangle, _, color)) in canvas.calls.iter().enumerate() {
            assert_eq!(mesh.triangle(i), Some(triangle.map(|p| p.extend(0.0))));
            let vertex = mesh.triangles()[i][0] as usize;
            assert_eq!(mesh.colors().unwrap()[vertex], *color);
        }
        assert!(mesh.vertices().iter().all(|v| v.z == 0.0));
    }
}
