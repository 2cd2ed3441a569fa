//! Value types and numerics for Newton-fractal rendering: complex
//! arithmetic, root-built polynomials, the root set with its palette, the
//! plane↔pixel viewport transform, and render configuration.

pub mod complex;
pub mod config;
pub mod error;
pub mod palette;
pub mod pixel_rect;
pub mod polynomial;
pub mod root_set;
pub mod viewport;

pub use complex::Complex;
pub use config::{RenderConfig, StopRule, STEP_RULE_EPSILON};
pub use error::{ConfigError, MathError};
pub use palette::{rainbow_palette, Rgb};
pub use pixel_rect::PixelRect;
pub use polynomial::Polynomial;
pub use root_set::{RootSet, DEFAULT_ROOTS, DEMO_ROOTS, MAX_ROOTS};
pub use viewport::{Marker, Viewport, DEFAULT_EXTENT, MARKER_SIZE};
