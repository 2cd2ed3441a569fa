//! RGBA8 pixel buffers with an unprocessed-pixel sentinel.
//!
//! Alpha 0 means "not yet processed"; every painted pixel gets alpha 255.
//! The renderer leans on the sentinel twice: to skip pixels a previous
//! trajectory already resolved, and to short-circuit a trajectory that walks
//! into already-colored territory.

use newtonscope_core::{PixelRect, Rgb};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// All-sentinel buffer (every byte zero).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    #[inline]
    pub fn is_painted(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y) + 3] != 0
    }

    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Paint a pixel opaque.
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: Rgb) {
        let i = self.index(x, y);
        self.data[i] = rgb[0];
        self.data[i + 1] = rgb[1];
        self.data[i + 2] = rgb[2];
        self.data[i + 3] = 255;
    }

    /// Copy `src` into this buffer with its top-left at `(dest_x, dest_y)`,
    /// clipped to this buffer's bounds.
    pub fn blit(&mut self, src: &PixelBuffer, dest_x: u32, dest_y: u32) {
        let copy_w = src.width.min(self.width.saturating_sub(dest_x)) as usize;
        let copy_h = src.height.min(self.height.saturating_sub(dest_y));
        for row in 0..copy_h {
            let src_start = src.index(0, row);
            let dest_start = self.index(dest_x, dest_y + row);
            self.data[dest_start..dest_start + copy_w * 4]
                .copy_from_slice(&src.data[src_start..src_start + copy_w * 4]);
        }
    }

    /// Translate a sub-rectangle of this buffer to `(dest_x, dest_y)`.
    /// Source and destination may overlap, which is the common case when a
    /// pan keeps most of the prior frame valid.
    pub fn copy_rect_within(&mut self, src: PixelRect, dest_x: u32, dest_y: u32) {
        if src.is_empty() {
            return;
        }
        debug_assert!(src.right() <= self.width && src.bottom() <= self.height);
        debug_assert!(dest_x + src.width <= self.width && dest_y + src.height <= self.height);

        // Snapshot the source rows so overlapping moves stay exact.
        let row_bytes = src.width as usize * 4;
        let mut snapshot = Vec::with_capacity(row_bytes * src.height as usize);
        for row in 0..src.height {
            let start = self.index(src.x, src.y + row);
            snapshot.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        for row in 0..src.height {
            let dest_start = self.index(dest_x, dest_y + row);
            self.data[dest_start..dest_start + row_bytes]
                .copy_from_slice(&snapshot[row as usize * row_bytes..(row as usize + 1) * row_bytes]);
        }
    }

    /// Box-average downsample by an integer factor. The receiver must be
    /// exactly `factor` times larger than the returned buffer in both axes.
    pub fn downsample(&self, factor: u32) -> PixelBuffer {
        debug_assert!(factor > 0 && self.width % factor == 0 && self.height % factor == 0);
        let out_w = self.width / factor;
        let out_h = self.height / factor;
        let mut out = PixelBuffer::new(out_w, out_h);
        let samples = factor * factor;

        for y in 0..out_h {
            for x in 0..out_w {
                let mut sum = [0u32; 3];
                for sy in 0..factor {
                    for sx in 0..factor {
                        let i = self.index(x * factor + sx, y * factor + sy);
                        sum[0] += self.data[i] as u32;
                        sum[1] += self.data[i + 1] as u32;
                        sum[2] += self.data[i + 2] as u32;
                    }
                }
                out.set_rgb(
                    x,
                    y,
                    [
                        (sum[0] / samples) as u8,
                        (sum[1] / samples) as u8,
                        (sum[2] / samples) as u8,
                    ],
                );
            }
        }
        out
    }
}
