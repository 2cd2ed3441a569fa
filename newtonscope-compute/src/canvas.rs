//! Frame ownership and the partial-redraw protocol used while panning.
//!
//! During a drag the view shifts by whole pixels, so most of the previous
//! frame is still valid: it is translated into place and only the newly
//! exposed strip(s) are recomputed, with the trajectory-coloring
//! optimization on. That keeps per-pointer-move work proportional to the
//! exposed area instead of the whole canvas.

use crate::pixel_buffer::PixelBuffer;
use crate::renderer::{render_canvas, render_region};
use newtonscope_core::{PixelRect, RenderConfig, RootSet, Viewport};

pub struct CanvasRenderer {
    width: u32,
    height: u32,
    frame: PixelBuffer,
}

impl CanvasRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame: PixelBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The live frame. All-sentinel until the first render.
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    /// Full recompute, honoring the high-definition flag. Used when an
    /// interaction settles (drag release, zoom, root count change).
    pub fn refresh(&mut self, root_set: &RootSet, viewport: &Viewport, config: &RenderConfig) {
        self.frame = render_canvas(self.width, self.height, root_set, viewport, config);
    }

    /// Full optimized recompute. Used mid-interaction (dragging a root),
    /// where speed matters more than per-pixel fidelity.
    pub fn drag_refresh(&mut self, root_set: &RootSet, viewport: &Viewport, config: &RenderConfig) {
        self.frame = render_region(
            PixelRect::canvas(self.width, self.height),
            self.width,
            self.height,
            root_set,
            viewport,
            config,
            true,
        );
    }

    /// Partial redraw after the view shifted by `(dx, dy)` pixels — positive
    /// dx for a rightward drag, positive dy for a downward one. `viewport`
    /// must already carry the matching center shift (see
    /// [`Viewport::drag_shift`]).
    ///
    /// The surviving sub-rectangle of the prior frame is translated by
    /// `(dx, dy)` and the exposed strip(s) are recomputed optimized: one
    /// strip when the shift is axis-aligned, two L-shaped strips otherwise.
    /// A shift of a full canvas dimension or more degenerates to a full
    /// optimized recompute.
    pub fn pan(
        &mut self,
        dx: i32,
        dy: i32,
        root_set: &RootSet,
        viewport: &Viewport,
        config: &RenderConfig,
    ) {
        if dx == 0 && dy == 0 {
            return;
        }
        if dx.unsigned_abs() >= self.width || dy.unsigned_abs() >= self.height {
            log::debug!("pan ({dx}, {dy}) exposes the whole canvas; full recompute");
            self.drag_refresh(root_set, viewport, config);
            return;
        }

        let keep_w = self.width - dx.unsigned_abs();
        let keep_h = self.height - dy.unsigned_abs();
        let src = PixelRect::new((-dx).max(0) as u32, (-dy).max(0) as u32, keep_w, keep_h);
        let (dest_x, dest_y) = (dx.max(0) as u32, dy.max(0) as u32);
        self.frame.copy_rect_within(src, dest_x, dest_y);

        for strip in exposed_strips(dx, dy, self.width, self.height) {
            log::debug!(
                "pan strip {}x{} at ({}, {})",
                strip.width,
                strip.height,
                strip.x,
                strip.y
            );
            let buffer = render_region(
                strip,
                self.width,
                self.height,
                root_set,
                viewport,
                config,
                true,
            );
            self.frame.blit(&buffer, strip.x, strip.y);
        }
    }
}

/// The canvas area exposed by a `(dx, dy)` pixel shift, as one or two
/// strips: a vertical strip spanning the full height on the exposed side,
/// plus the remaining horizontal band when both components are nonzero.
///
/// Callers guarantee `|dx| < width` and `|dy| < height`, and that at least
/// one component is nonzero.
fn exposed_strips(dx: i32, dy: i32, width: u32, height: u32) -> Vec<PixelRect> {
    let dxu = dx.unsigned_abs();
    let dyu = dy.unsigned_abs();
    match (dx.signum(), dy.signum()) {
        // Content moved left: a vertical strip on the right edge.
        (-1, -1) => vec![
            PixelRect::new(0, height - dyu, width - dxu, dyu),
            PixelRect::new(width - dxu, 0, dxu, height),
        ],
        (-1, 0) => vec![PixelRect::new(width - dxu, 0, dxu, height)],
        (-1, 1) => vec![
            PixelRect::new(0, 0, width - dxu, dyu),
            PixelRect::new(width - dxu, 0, dxu, height),
        ],
        // Pure vertical shift: a single horizontal band.
        (0, -1) => vec![PixelRect::new(0, height - dyu, width, dyu)],
        (0, 1) => vec![PixelRect::new(0, 0, width, dyu)],
        // Content moved right: a vertical strip on the left edge.
        (1, -1) => vec![
            PixelRect::new(0, 0, dxu, height - dyu),
            PixelRect::new(0, height - dyu, width, dyu),
        ],
        (1, 0) => vec![PixelRect::new(0, 0, dxu, height)],
        (1, 1) => vec![
            PixelRect::new(0, 0, dxu, height),
            PixelRect::new(dxu, 0, width - dxu, dyu),
        ],
        _ => Vec::new(),
    }
}
