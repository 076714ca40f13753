//! # Config Crate
//!
//! Centralized configuration constants for the fractal subdivision pipeline.
//! Limits, colors and reference geometry live here so the subdivider, the
//! scene adapters and the WASM boundary all agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_SUBDIVISION_DEPTH, central_triangle_count};
//!
//! let depth = 3;
//! assert!(depth <= MAX_SUBDIVISION_DEPTH);
//! assert_eq!(central_triangle_count(depth), 13);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Demo Compatible**: Colors and layout match the canvas demos

pub mod constants;
