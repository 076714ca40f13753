//! SVG output for 2D scenes.

use std::fmt::Write;

use fractal_subdivide::Triangle;
use glam::DVec2;

use crate::color::to_hex;
use crate::sierpinski::{Canvas2d, RenderMode};

/// A [`Canvas2d`] that records triangles as SVG `<polygon>` elements.
///
/// Canvas and SVG both use y-down coordinates, so points are written as is.
///
/// # Example
///
/// ```
/// use fractal_mesh::{Canvas2d, RenderMode, SvgCanvas};
/// use fractal_subdivide::Triangle;
/// use glam::DVec2;
///
/// let mut canvas = SvgCanvas::new(100.0, 100.0);
/// let t = Triangle::new(DVec2::new(50.0, 10.0), DVec2::new(10.0, 90.0), DVec2::new(90.0, 90.0));
/// canvas.draw_triangle(&t, RenderMode::Fill, [1.0, 1.0, 1.0, 1.0]);
/// let svg = canvas.finish();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r##"fill="#ffffff""##));
/// ```
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    stroke_width: f64,
    body: String,
    shapes: usize,
}

impl SvgCanvas {
    /// Creates an empty canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stroke_width: 1.0,
            body: String::new(),
            shapes: 0,
        }
    }

    /// Sets the stroke width used in outline mode.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Number of shapes drawn since the last clear.
    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    /// Closes the document and returns it.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas2d for SvgCanvas {
    fn clear(&mut self) {
        self.body.clear();
        self.shapes = 0;
    }

    fn draw_triangle(&mut self, triangle: &Triangle<DVec2>, mode: RenderMode, color: [f32; 4]) {
        let mut points = String::new();
        for (i, p) in triangle.vertices().iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            let _ = write!(points, "{:.3},{:.3}", p.x, p.y);
        }

        let hex = to_hex(color);
        let _ = match mode {
            RenderMode::Fill => writeln!(
                self.body,
                r#"  <polygon points="{points}" fill="{hex}" fill-opacity="{:.3}"/>"#,
                color[3]
            ),
            RenderMode::Outline => writeln!(
                self.body,
                r#"  <polygon points="{points}" fill="none" stroke="{hex}" stroke-width="{:.2}"/>"#,
                self.stroke_width
            ),
        };
        self.shapes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sierpinski::SierpinskiScene;
    use fractal_subdivide::Depth;

    fn triangle() -> Triangle<DVec2> {
        Triangle::new(DVec2::new(0.0, 0.0), DVec2::new(4.0, 0.0), DVec2::new(2.0, 4.0))
    }

    #[test]
    fn test_empty_canvas() {
        let svg = SvgCanvas::new(800.0, 600.0).finish();
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_fill_polygon() {
        let mut canvas = SvgCanvas::new(10.0, 10.0);
        canvas.draw_triangle(&triangle(), RenderMode::Fill, [1.0, 0.0, 0.0, 1.0]);
        let svg = canvas.finish();
        assert!(svg.contains(r#"points="0.000,0.000 4.000,0.000 2.000,4.000""#));
        assert!(svg.contains(r##"fill="#ff0000""##));
    }

    #[test]
    fn test_outline_polygon() {
        let mut canvas = SvgCanvas::new(10.0, 10.0).with_stroke_width(2.0);
        canvas.draw_triangle(&triangle(), RenderMode::Outline, [0.0, 0.0, 1.0, 1.0]);
        let svg = canvas.finish();
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#0000ff""##));
        assert!(svg.contains(r#"stroke-width="2.00""#));
    }

    #[test]
    fn test_clear_discards_shapes() {
        let mut canvas = SvgCanvas::new(10.0, 10.0);
        canvas.draw_triangle(&triangle(), RenderMode::Fill, [1.0; 4]);
        assert_eq!(canvas.shape_count(), 1);
        canvas.clear();
        assert_eq!(canvas.shape_count(), 0);
        assert!(!canvas.finish().contains("<polygon"));
    }

    #[test]
    fn test_scene_into_svg() {
        let scene = SierpinskiScene::for_canvas(600.0, 600.0).unwrap();
        let mut canvas = SvgCanvas::new(600.0, 600.0);
        let drawn = scene.render(Depth::from(3), &mut canvas).unwrap();
        assert_eq!(canvas.shape_count(), drawn);
        let svg = canvas.finish();
        assert_eq!(svg.matches("<polygon").count(), 14);
        assert_eq!(svg.matches(r##"fill="#0d65b8""##).count(), 1);
        assert_eq!(svg.matches(r##"fill="#ffffff""##).count(), 13);
    }
}
