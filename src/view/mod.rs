//! View module - renders the console page and the slide-in host
//!
//! Drawing happens into a persistent back buffer which is copied to the
//! softbuffer surface on present.

pub mod frame;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::window::Window;

use slidein::model::AppModel;
use slidein::navigation::Route;

use frame::{scale_alpha, Frame};

const PAGE_BG: u32 = 0xFFF4F5F7;
const TOOLBAR_BG: u32 = 0xFF1F2937;
const TAB_BG: u32 = 0xFF374151;
const TAB_ACTIVE_BG: u32 = 0xFF0095D5;
const CONTENT_ROW_A: u32 = 0xFFFFFFFF;
const CONTENT_ROW_B: u32 = 0xFFE5E7EB;
const PANEL_BG: u32 = 0xFFFFFFFF;
const PANEL_HEADER_BG: u32 = 0xFF0095D5;
const PANEL_ROW_KEY: u32 = 0xFF9CA3AF;
const PANEL_ROW_VALUE: u32 = 0xFF374151;
const PANEL_EDGE: u32 = 0xFFD1D5DB;

const TOOLBAR_HEIGHT: usize = 48;
const TAB_WIDTH: usize = 120;
const TAB_GAP: usize = 8;
const CONTENT_ROW_HEIGHT: usize = 56;
const PANEL_HEADER_HEIGHT: usize = 56;
const PANEL_ROW_HEIGHT: usize = 32;
const PANEL_PADDING: usize = 16;
/// Pixel width drawn per character of a row label or value
const GLYPH_WIDTH: usize = 7;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            back_buffer: vec![PAGE_BG; (width * height) as usize],
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        self.width = width;
        self.height = height;
        self.back_buffer = vec![PAGE_BG; (width * height) as usize];
        Ok(())
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (self.width as usize, self.height as usize);
        {
            let mut frame = Frame::new(&mut self.back_buffer, width, height);
            render_page(&mut frame, model);
            render_slide_in(&mut frame, model);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get buffer: {}", e))?;
        let len = buffer.len().min(self.back_buffer.len());
        buffer[..len].copy_from_slice(&self.back_buffer[..len]);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Route tabs plus scrollable content stripes
fn render_page(frame: &mut Frame, model: &AppModel) {
    let width = frame.width();
    let height = frame.height();
    frame.clear(PAGE_BG);

    let offset = model.page.scroll_offset().max(0) as usize;
    let first_row = offset / CONTENT_ROW_HEIGHT;
    let mut y = TOOLBAR_HEIGHT as isize - (offset % CONTENT_ROW_HEIGHT) as isize;
    let mut row = first_row;
    while y < height as isize {
        let color = if row % 2 == 0 { CONTENT_ROW_A } else { CONTENT_ROW_B };
        let top = y.max(TOOLBAR_HEIGHT as isize) as usize;
        let visible = (y + CONTENT_ROW_HEIGHT as isize - top as isize).max(0) as usize;
        frame.fill_rect_px(0, top, width, visible, color);
        y += CONTENT_ROW_HEIGHT as isize;
        row += 1;
    }

    frame.fill_rect_px(0, 0, width, TOOLBAR_HEIGHT, TOOLBAR_BG);
    let current = model.nav.current();
    for route in Route::ALL {
        let x = TAB_GAP + route.index() * (TAB_WIDTH + TAB_GAP);
        let color = if route == current { TAB_ACTIVE_BG } else { TAB_BG };
        frame.fill_rect_px(x, TAB_GAP, TAB_WIDTH, TOOLBAR_HEIGHT - 2 * TAB_GAP, color);
    }
}

/// Backdrop and panel. While a clear is pending the panel slides out and
/// the backdrop fades with it.
fn render_slide_in(frame: &mut Frame, model: &AppModel) {
    let Some(content) = model.host.content() else {
        return;
    };

    let shown = if model.host.is_open() {
        1.0
    } else {
        match model.host.pending_clear() {
            Some(timer) => {
                let delay = model.host.close_delay_ms().max(1) as f32;
                1.0 - timer.started_at.elapsed().as_millis() as f32 / delay
            }
            None => 0.0,
        }
    };
    if shown <= 0.0 {
        return;
    }

    let (width, height) = (frame.width(), frame.height());
    let backdrop = scale_alpha(model.config.backdrop_color, shown);
    frame.blend_rect_px(0, 0, width, height, backdrop);

    let bounds = model
        .geometry()
        .sliding_bounds(width, height, content.wide, shown);
    frame.fill_bounds(&bounds, PANEL_BG);
    frame.fill_rect_px(bounds.x, bounds.y, 1, bounds.height, PANEL_EDGE);
    frame.fill_rect_px(
        bounds.x,
        bounds.y,
        bounds.width,
        PANEL_HEADER_HEIGHT,
        PANEL_HEADER_BG,
    );

    let inner_x = bounds.x + PANEL_PADDING;
    let inner_width = bounds.width.saturating_sub(2 * PANEL_PADDING);
    let mut y = bounds.y + PANEL_HEADER_HEIGHT + PANEL_PADDING;
    for (key, value) in content.panel.rows() {
        if y + PANEL_ROW_HEIGHT > bounds.bottom() {
            break;
        }
        let key_width = (key.chars().count() * GLYPH_WIDTH).min(inner_width / 3);
        let value_width = (value.chars().count() * GLYPH_WIDTH)
            .min(inner_width.saturating_sub(inner_width / 3 + PANEL_PADDING));
        frame.fill_rect_px(inner_x, y + 10, key_width, 12, PANEL_ROW_KEY);
        frame.fill_rect_px(
            inner_x + inner_width / 3 + PANEL_PADDING,
            y + 10,
            value_width,
            12,
            PANEL_ROW_VALUE,
        );
        y += PANEL_ROW_HEIGHT;
    }
}
