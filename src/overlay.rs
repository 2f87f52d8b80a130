//! Slide-in overlay geometry and compositing
//!
//! The slide-in panel is anchored to the right edge of the viewport and
//! spans its full height. Everything left of it is backdrop.

use crate::config::ConsoleConfig;

/// Computed overlay bounds (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayBounds {
    /// X position in pixels
    pub x: usize,
    /// Y position in pixels
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl OverlayBounds {
    /// Get the right edge X coordinate
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Whether a point lies inside the bounds
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64 && x < self.right() as f64 && y >= self.y as f64 && y < self.bottom() as f64
    }
}

/// Panel widths for regular and wide slide-ins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideInGeometry {
    pub panel_width: usize,
    pub wide_panel_width: usize,
}

impl SlideInGeometry {
    pub fn new(panel_width: usize, wide_panel_width: usize) -> Self {
        Self {
            panel_width,
            wide_panel_width,
        }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.panel_width, config.wide_panel_width)
    }

    /// Panel rect for a fully shown slide-in.
    /// Width is clamped to the viewport.
    pub fn panel_bounds(&self, viewport_width: usize, viewport_height: usize, wide: bool) -> OverlayBounds {
        self.sliding_bounds(viewport_width, viewport_height, wide, 1.0)
    }

    /// Panel rect while sliding. `shown` runs from 0.0 (off screen to the
    /// right) to 1.0 (fully shown).
    pub fn sliding_bounds(
        &self,
        viewport_width: usize,
        viewport_height: usize,
        wide: bool,
        shown: f32,
    ) -> OverlayBounds {
        let width = if wide {
            self.wide_panel_width
        } else {
            self.panel_width
        }
        .min(viewport_width);

        let shown = shown.clamp(0.0, 1.0);
        let visible = (width as f32 * shown).round() as usize;
        let x = viewport_width.saturating_sub(visible);

        OverlayBounds {
            x,
            y: 0,
            width: visible.min(viewport_width - x),
            height: viewport_height,
        }
    }

    /// Whether a click at (x, y) lands on the backdrop of an open panel
    pub fn is_backdrop_hit(
        &self,
        x: f64,
        y: f64,
        viewport_width: usize,
        viewport_height: usize,
        wide: bool,
    ) -> bool {
        if x < 0.0 || y < 0.0 || x >= viewport_width as f64 || y >= viewport_height as f64 {
            return false;
        }
        !self
            .panel_bounds(viewport_width, viewport_height, wide)
            .contains(x, y)
    }
}

impl Default for SlideInGeometry {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

/// Blend a source pixel (with alpha) onto a destination pixel
///
/// Both colors are in ARGB format. The source alpha determines
/// the blend ratio.
#[inline]
pub fn blend_pixel(src: u32, dst: u32) -> u32 {
    let alpha = (src >> 24) & 0xFF;
    if alpha == 0 {
        return dst;
    }
    if alpha == 255 {
        return src | 0xFF000000;
    }

    let inv_alpha = 255 - alpha;

    let r = ((((src >> 16) & 0xFF) * alpha + ((dst >> 16) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let g = ((((src >> 8) & 0xFF) * alpha + ((dst >> 8) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let b = (((src & 0xFF) * alpha + (dst & 0xFF) * inv_alpha) / 255) & 0xFF;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Blend `color` over every pixel inside `bounds`
pub fn blend_region(
    buffer: &mut [u32],
    bounds: &OverlayBounds,
    color: u32,
    buffer_width: usize,
    buffer_height: usize,
) {
    let y_end = bounds.bottom().min(buffer_height);
    let x_end = bounds.right().min(buffer_width);

    for py in bounds.y..y_end {
        for px in bounds.x..x_end {
            let idx = py * buffer_width + px;
            if idx < buffer.len() {
                buffer[idx] = blend_pixel(color, buffer[idx]);
            }
        }
    }
}
