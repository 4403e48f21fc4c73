//! Swatch - color derivation and gradient engine for terminal dashboards
//!
//! Swatch turns dashboard values into colors: hex parsing and formatting,
//! perceptual blending, progress-bar ramps, stable colors for arbitrary
//! labels, legible text colors, and fixed color scales for hours worked,
//! latency and HTTP status. Every operation is a pure function; nothing here
//! holds global state.

pub mod color;
pub mod config;
pub mod error;
pub mod gradient;
pub mod semantic;
pub mod style;

pub use color::{Color, blend_perceptual, hash_to_color, lighten, pick_foreground};
pub use config::Config;
pub use error::ParseError;
pub use gradient::{Gradient, interpolate_hex, make_ramp, make_tri_stop_gradient};
pub use semantic::{
    StatusColors, color_for_hours_worked, color_for_http_status, color_for_latency_seconds,
};
