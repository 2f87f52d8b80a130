//! Frame abstraction for drawing primitives
//!
//! Provides a small, safe API over the pixel buffer so rendering code never
//! indexes the buffer directly.

use slidein::overlay::{blend_pixel, OverlayBounds};

/// A frame buffer wrapper providing clipped drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    pub fn fill_bounds(&mut self, bounds: &OverlayBounds, color: u32) {
        self.fill_rect_px(bounds.x, bounds.y, bounds.width, bounds.height, color);
    }

    /// Fill a rectangle with alpha blending (pixel coordinates, ARGB format)
    pub fn blend_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let alpha = (color >> 24) & 0xFF;
        if alpha == 0 {
            return;
        }
        if alpha == 0xFF {
            return self.fill_rect_px(x, y, w, h, color);
        }

        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            for pixel in &mut self.buffer[row_start + x0..row_start + x1] {
                *pixel = blend_pixel(color, *pixel);
            }
        }
    }
}

/// Scale the alpha channel of an ARGB color by `factor` (0.0 - 1.0)
#[inline]
pub fn scale_alpha(color: u32, factor: f32) -> u32 {
    let alpha = ((color >> 24) & 0xFF) as f32 * factor.clamp(0.0, 1.0);
    ((alpha.round() as u32) << 24) | (color & 0x00FF_FFFF)
}
