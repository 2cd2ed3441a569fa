//! Newton-fractal rendering engine: the per-pixel solver, RGBA pixel
//! buffers, region rendering with trajectory coloring, and the canvas-level
//! partial-redraw protocol.
//!
//! The engine is synchronous and single-threaded: a render call fully
//! populates its buffer before returning, and receives the root set,
//! viewport, and configuration read-only.

pub mod canvas;
pub mod pixel_buffer;
pub mod renderer;
pub mod solver;

pub use canvas::CanvasRenderer;
pub use pixel_buffer::PixelBuffer;
pub use renderer::{render_canvas, render_region, shade_by_rate, DIVERGENT_COLOR, OVERSAMPLING_FACTOR};
pub use solver::{check_stop, newton_step, proximity, solve, Outcome};
