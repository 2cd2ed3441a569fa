//! The visible rectangle of the complex plane and its pixel mapping.
//!
//! A viewport is a center plus plane-unit extents that exactly cover the
//! pixel canvas. The vertical axis flips between the two spaces: increasing
//! imaginary part moves up on the plane but down in pixel coordinates.

use crate::complex::Complex;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default extent of the visible plane rectangle, both axes.
pub const DEFAULT_EXTENT: f64 = 20.0;

/// On-screen size of a root marker in pixels. Markers whose top-left corner
/// would hang past the right or bottom canvas edge are hidden.
pub const MARKER_SIZE: f64 = 30.0;

/// Fixed wheel sensitivity divisor for additive zoom steps.
const WHEEL_SENSITIVITY: f64 = 1020.0;

/// Fraction of the cursor-to-center distance covered per zoom event.
const ZOOM_EASING: f64 = 0.1;

/// A root's position on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center: Complex,
    xwidth: f64,
    ywidth: f64,
}

impl Viewport {
    pub fn new(center: Complex, xwidth: f64, ywidth: f64) -> Result<Self, ConfigError> {
        check_extent(xwidth)?;
        check_extent(ywidth)?;
        Ok(Self {
            center,
            xwidth,
            ywidth,
        })
    }

    pub fn center(&self) -> Complex {
        self.center
    }

    pub fn xwidth(&self) -> f64 {
        self.xwidth
    }

    pub fn ywidth(&self) -> f64 {
        self.ywidth
    }

    /// Replace the horizontal extent. Rejected values leave the prior one.
    pub fn set_xwidth(&mut self, xwidth: f64) -> Result<(), ConfigError> {
        check_extent(xwidth)?;
        self.xwidth = xwidth;
        Ok(())
    }

    /// Replace the vertical extent. Rejected values leave the prior one.
    pub fn set_ywidth(&mut self, ywidth: f64) -> Result<(), ConfigError> {
        check_extent(ywidth)?;
        self.ywidth = ywidth;
        Ok(())
    }

    /// Map a plane point to (possibly fractional) pixel coordinates.
    pub fn plane_to_pixel(&self, p: &Complex, pixel_w: u32, pixel_h: u32) -> (f64, f64) {
        let scale_x = pixel_w as f64 / self.xwidth;
        let scale_y = pixel_h as f64 / self.ywidth;
        (
            pixel_w as f64 / 2.0 + scale_x * (p.re - self.center.re),
            pixel_h as f64 / 2.0 - scale_y * (p.im - self.center.im),
        )
    }

    /// Map pixel coordinates to the plane point under them. Exact algebraic
    /// inverse of [`plane_to_pixel`](Self::plane_to_pixel).
    pub fn pixel_to_plane(&self, x: f64, y: f64, pixel_w: u32, pixel_h: u32) -> Complex {
        let scale_x = self.xwidth / pixel_w as f64;
        let scale_y = self.ywidth / pixel_h as f64;
        Complex::new(
            self.center.re + scale_x * (x - pixel_w as f64 / 2.0),
            self.center.im - scale_y * (y - pixel_h as f64 / 2.0),
        )
    }

    /// Translate the center by plane-unit deltas.
    pub fn shift_center(&mut self, dx: f64, dy: f64) {
        self.center.re += dx;
        self.center.im += dy;
    }

    /// Translate the center for a canvas drag of `(delta_x, delta_y)` pixels.
    ///
    /// Dragging moves the visible window opposite to the dragged content, so
    /// the horizontal shift negates the cursor displacement; the vertical
    /// shift keeps its sign because the pixel axis is already inverted.
    pub fn drag_shift(&mut self, delta_x: i32, delta_y: i32, pixel_w: u32, pixel_h: u32) {
        self.shift_center(
            -delta_x as f64 * self.xwidth / pixel_w as f64,
            delta_y as f64 * self.ywidth / pixel_h as f64,
        );
    }

    /// Ease the center 10% of the way toward the plane point under a pixel.
    /// Used for zoom-to-cursor.
    pub fn move_center(&mut self, toward_x: f64, toward_y: f64, pixel_w: u32, pixel_h: u32) {
        let target = self.pixel_to_plane(toward_x, toward_y, pixel_w, pixel_h);
        self.center.re += (target.re - self.center.re) * ZOOM_EASING;
        self.center.im += (target.im - self.center.im) * ZOOM_EASING;
    }

    /// Additive horizontal zoom step. A delta that would make the extent
    /// non-positive (or non-finite) is dropped and the prior value retained.
    pub fn rescale_xwidth(&mut self, delta: f64) {
        let next = self.xwidth + delta;
        if next.is_finite() && next > 0.0 {
            self.xwidth = next;
        }
    }

    /// Additive vertical zoom step, same rejection rule as the horizontal one.
    pub fn rescale_ywidth(&mut self, delta: f64) {
        let next = self.ywidth + delta;
        if next.is_finite() && next > 0.0 {
            self.ywidth = next;
        }
    }

    /// Apply one wheel event to both extents: each grows or shrinks by
    /// `delta_y × extent / 1020`, keeping zoom speed proportional to the
    /// current magnification.
    pub fn wheel_rescale(&mut self, delta_y: f64) {
        self.rescale_xwidth(delta_y * self.xwidth / WHEEL_SENSITIVITY);
        self.rescale_ywidth(delta_y * self.ywidth / WHEEL_SENSITIVITY);
    }

    /// Back to the default view: centered at the origin, 20×20 plane units.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pixel positions for every root, flagged hidden when outside the
    /// canvas shrunk by the marker size on the right and bottom edges.
    pub fn marker_positions(&self, roots: &[Complex], pixel_w: u32, pixel_h: u32) -> Vec<Marker> {
        roots
            .iter()
            .map(|root| {
                let (x, y) = self.plane_to_pixel(root, pixel_w, pixel_h);
                let visible = x > 0.0
                    && x < pixel_w as f64 - MARKER_SIZE
                    && y > 0.0
                    && y < pixel_h as f64 - MARKER_SIZE;
                Marker { x, y, visible }
            })
            .collect()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            xwidth: DEFAULT_EXTENT,
            ywidth: DEFAULT_EXTENT,
        }
    }
}

fn check_extent(extent: f64) -> Result<(), ConfigError> {
    if extent.is_finite() && extent > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidExtent(extent))
    }
}
