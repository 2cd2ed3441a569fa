//! Region rendering: the per-pixel Newton classification loop, the
//! trajectory-coloring optimization, convergence-rate shading, and the
//! oversampled high-definition path.

use crate::pixel_buffer::PixelBuffer;
use crate::solver::{check_stop, newton_step, solve, Outcome};
use newtonscope_core::{PixelRect, RenderConfig, Rgb, RootSet, Viewport};

/// Non-convergent points are black.
pub const DIVERGENT_COLOR: Rgb = [0, 0, 0];

/// Fixed integer oversampling factor for high-definition renders.
pub const OVERSAMPLING_FACTOR: u32 = 2;

/// Render one region of a logical canvas.
///
/// `region` is expressed in the canvas's pixel coordinates and
/// `(canvas_w, canvas_h)` are the full logical canvas dimensions, so the
/// plane mapping keeps a consistent scale when the region is a sub-rectangle
/// (the pan protocol's exposed strips). The returned buffer is
/// `region.width × region.height`.
///
/// With `optimized` set, every Newton trajectory retroactively colors all
/// the in-region pixels it visits and short-circuits on pixels an earlier
/// trajectory already resolved. Unoptimized renders classify every pixel
/// independently, which is what convergence-rate shading and HD passes need.
pub fn render_region(
    region: PixelRect,
    canvas_w: u32,
    canvas_h: u32,
    root_set: &RootSet,
    viewport: &Viewport,
    config: &RenderConfig,
    optimized: bool,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(region.width, region.height);

    if root_set.is_empty() {
        // Documented precondition violation: nothing to converge to. Leave
        // the buffer in its unprocessed state rather than failing.
        log::warn!("render_region called with an empty root set; returning sentinel buffer");
        return buffer;
    }

    log::debug!(
        "render_region {}x{} at ({}, {}), optimized={}",
        region.width,
        region.height,
        region.x,
        region.y,
        optimized
    );

    for x in 0..region.width {
        for y in 0..region.height {
            if buffer.is_painted(x, y) {
                continue;
            }
            if optimized {
                trace_trajectory(&mut buffer, region, x, y, canvas_w, canvas_h, root_set, viewport, config);
            } else {
                render_point(&mut buffer, region, x, y, canvas_w, canvas_h, root_set, viewport, config);
            }
        }
    }

    buffer
}

/// Render a full canvas, honoring the high-definition flag: HD renders the
/// whole canvas unoptimized at a fixed oversampling factor and box-averages
/// the result down to the requested dimensions.
pub fn render_canvas(
    canvas_w: u32,
    canvas_h: u32,
    root_set: &RootSet,
    viewport: &Viewport,
    config: &RenderConfig,
) -> PixelBuffer {
    if config.high_definition {
        let hi_w = canvas_w * OVERSAMPLING_FACTOR;
        let hi_h = canvas_h * OVERSAMPLING_FACTOR;
        log::debug!("high-definition pass at {hi_w}x{hi_h}");
        let hi = render_region(
            PixelRect::canvas(hi_w, hi_h),
            hi_w,
            hi_h,
            root_set,
            viewport,
            config,
            false,
        );
        hi.downsample(OVERSAMPLING_FACTOR)
    } else {
        render_region(
            PixelRect::canvas(canvas_w, canvas_h),
            canvas_w,
            canvas_h,
            root_set,
            viewport,
            config,
            false,
        )
    }
}

/// Unoptimized path: classify the seed point alone and paint its pixel,
/// applying convergence-rate shading when configured.
#[allow(clippy::too_many_arguments)]
fn render_point(
    buffer: &mut PixelBuffer,
    region: PixelRect,
    x: u32,
    y: u32,
    canvas_w: u32,
    canvas_h: u32,
    root_set: &RootSet,
    viewport: &Viewport,
    config: &RenderConfig,
) {
    let z0 = viewport.pixel_to_plane(
        (region.x + x) as f64,
        (region.y + y) as f64,
        canvas_w,
        canvas_h,
    );
    let (color, iterations) = match solve(z0, root_set.roots(), root_set.polynomial(), config) {
        Outcome::Converged { root, iterations } => (root_set.palette()[root], iterations),
        Outcome::Diverged => (DIVERGENT_COLOR, config.iteration_max()),
    };
    let color = if config.convergence_rate_shading {
        shade_by_rate(color, iterations)
    } else {
        color
    };
    buffer.set_rgb(x, y, color);
}

/// Optimized path: walk one Newton trajectory, remembering every in-region
/// pixel it visits, then paint them all with the trajectory's resolved
/// color. A visited pixel that is already painted resolves the trajectory
/// immediately with that pixel's color.
#[allow(clippy::too_many_arguments)]
fn trace_trajectory(
    buffer: &mut PixelBuffer,
    region: PixelRect,
    seed_x: u32,
    seed_y: u32,
    canvas_w: u32,
    canvas_h: u32,
    root_set: &RootSet,
    viewport: &Viewport,
    config: &RenderConfig,
) {
    let mut sequence: Vec<(u32, u32)> = vec![(seed_x, seed_y)];
    let mut z_prev = viewport.pixel_to_plane(
        (region.x + seed_x) as f64,
        (region.y + seed_y) as f64,
        canvas_w,
        canvas_h,
    );
    let mut resolved: Option<Rgb> = None;
    let mut k = 0;

    while resolved.is_none() && k < config.iteration_max() {
        let z_next = match newton_step(root_set.polynomial(), &z_prev) {
            Ok(next) => next,
            // Vanishing derivative: the whole trajectory is non-convergent.
            Err(_) => break,
        };

        if let Some(root) = check_stop(
            config.stop_rule,
            &z_next,
            &z_prev,
            root_set.roots(),
            config.epsilon(),
        ) {
            resolved = Some(root_set.palette()[root]);
        }

        // Remember the pixel under this iterate when it lands in the region.
        let (px, py) = viewport.plane_to_pixel(&z_next, canvas_w, canvas_h);
        if px.is_finite() && py.is_finite() {
            let px = px.round() as i64 - region.x as i64;
            let py = py.round() as i64 - region.y as i64;
            if (0..region.width as i64).contains(&px) && (0..region.height as i64).contains(&py) {
                let (px, py) = (px as u32, py as u32);
                if buffer.is_painted(px, py) {
                    // An earlier trajectory went through here; reuse its
                    // color instead of iterating further.
                    resolved = Some(buffer.rgb(px, py));
                } else {
                    sequence.push((px, py));
                }
            }
        }

        z_prev = z_next;
        k += 1;
    }

    let color = resolved.unwrap_or(DIVERGENT_COLOR);
    for (px, py) in sequence {
        buffer.set_rgb(px, py, color);
    }
}

/// Darken a color by convergence speed: fast convergence keeps nearly full
/// brightness, slow convergence fades toward black on a logistic curve.
pub fn shade_by_rate(color: Rgb, iterations: u32) -> Rgb {
    let darkness = 1.0 / (1.0 + libm::exp(0.12 * (iterations as f64 - 18.0))) + 0.1;
    color.map(|channel| (channel as f64 * darkness).floor() as u8)
}
