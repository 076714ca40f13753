//! # Colors
//!
//! Evenly spaced hue scale for coloring subdivided faces, plus RGBA helpers.

use config::constants::{COLOR_SCALE_SATURATION, COLOR_SCALE_VALUE};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Converts HSV (all components in [0, 1]) to RGB.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::color::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
/// assert_eq!(hsv_to_rgb(0.5, 0.0, 0.5), [0.5, 0.5, 0.5]);
/// ```
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (sector as i32).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Formats an RGBA color as a CSS hex string (`#rrggbb`), ignoring alpha.
///
/// # Example
///
/// ```rust
/// use config::constants::OUTER_TRIANGLE_COLOR;
/// use fractal_mesh::color::to_hex;
///
/// assert_eq!(to_hex(OUTER_TRIANGLE_COLOR), "#0d65b8");
/// ```
pub fn to_hex(color: [f32; 4]) -> String {
    let [r, g, b, _] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `n` hues spread evenly around the color wheel.
///
/// Hue `i` is `i / n`; saturation and value come from the config crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<[f32; 3]>,
}

impl ColorScale {
    /// Builds a scale of `n` colors.
    pub fn new(n: usize) -> Self {
        let colors = (0..n)
            .map(|i| hsv_to_rgb(i as f32 / n as f32, COLOR_SCALE_SATURATION, COLOR_SCALE_VALUE))
            .collect();
        Self { colors }
    }

    /// Reorders the colors with a seeded shuffle.
    ///
    /// Neighbouring entries then get unrelated hues, which keeps adjacent
    /// faces apart. The same seed always gives the same order.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.colors.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        self
    }

    /// Number of colors in the scale.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the scale has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns color `index` as RGB.
    pub fn get(&self, index: usize) -> Option<[f32; 3]> {
        self.colors.get(index).copied()
    }

    /// Returns every color as RGBA with the given alpha.
    pub fn as_rgba(&self, alpha: f32) -> Vec<[f32; 4]> {
        self.colors
            .iter()
            .map(|&[r, g, b]| [r, g, b, alpha])
            .collect()
    }
}
