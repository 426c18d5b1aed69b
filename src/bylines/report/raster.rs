//! CPU rasterizer: executes a layout plan into an RGB8 framebuffer and
//! encodes it as PNG.
//!
//! Pixels are plain row-major RGB8. Rect and line ops overwrite pixels;
//! text coverage is alpha-blended onto the existing canvas contents. All
//! ops clip at the canvas edge rather than panicking.

use super::font::Font;
use super::layout::Plan;
use super::paint::{Color, DrawOp};
use crate::error::{BylinesError, Result};

pub struct Canvas {
    width: u32,
    height: u32,
    px: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32, background: Color) -> Self {
        let mut px = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for _ in 0..(width as usize) * (height as usize) {
            px.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Self { width, height, px }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.px
    }

    /// Execute every op, in order, onto a fresh canvas of the plan's
    /// declared size.
    pub fn execute(plan: &Plan, font: &Font) -> Canvas {
        let mut canvas = Canvas::new(plan.width, plan.height, Color::WHITE);
        for op in &plan.ops {
            canvas.apply(op, font);
        }
        canvas
    }

    fn apply(&mut self, op: &DrawOp, font: &Font) {
        match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => self.fill_rect(*x, *y, *width, *height, *color),
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => self.line(*x1, *y1, *x2, *y2, *color),
            DrawOp::Text {
                x,
                y,
                px,
                color,
                text,
            } => {
                font.for_each_pixel(text, *px, *x, *y, |cx, cy, coverage| {
                    self.blend(cx, cy, *color, coverage);
                });
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w as i32).min(self.width as i32);
        let y1 = y.saturating_add(h as i32).min(self.height as i32);
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.set(xx, yy, color);
            }
        }
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        // Bresenham; the layout only emits axis-aligned rules today, but the
        // op is not restricted to them
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.set(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 3) as usize;
        self.px[i] = color.r;
        self.px[i + 1] = color.g;
        self.px[i + 2] = color.b;
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let cov = coverage.clamp(0.0, 1.0);
        let i = ((y as u32 * self.width + x as u32) * 3) as usize;
        for (offset, channel) in [color.r, color.g, color.b].into_iter().enumerate() {
            let old = self.px[i + offset] as f32;
            self.px[i + offset] = (old + (channel as f32 - old) * cov).round() as u8;
        }
    }

    /// Encode the framebuffer as an RGB8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| BylinesError::Render(e.to_string()))?;
        writer
            .write_image_data(&self.px)
            .map_err(|e| BylinesError::Render(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| BylinesError::Render(e.to_string()))?;
        Ok(out)
    }
}
