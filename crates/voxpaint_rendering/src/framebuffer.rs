//! CPU framebuffer sink.
//!
//! Fills quads with an even-odd scanline rule using integer edge
//! intersections. Pixels that land outside the buffer are skipped; polygons
//! are not clipped, there is no depth buffer and no anti-aliasing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use voxpaint_core::{Rgb, ScreenPoint};

use crate::error::RenderResult;
use crate::sink::DrawSink;

/// RGB pixel buffer, row-major, origin top-left.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    presented: u64,
    /// Scratch for scanline crossings, reused across fills.
    crossings: Vec<i64>,
}

impl Framebuffer {
    /// Creates a black framebuffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
            presented: 0,
            crossings: Vec::with_capacity(8),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames presented.
    #[must_use]
    pub const fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel data as packed RGB bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Counts pixels of exactly `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Writes the frame as binary PPM (`P6`).
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(self.as_bytes())?;
        writer.flush()
    }

    /// Saves the frame as a PPM file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::Io`] if the file cannot be written.
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let file = File::create(path.as_ref())?;
        self.write_ppm(BufWriter::new(file))?;
        tracing::info!(path = %path.as_ref().display(), "saved frame");
        Ok(())
    }

    /// Fills columns `x0..=x1` of row `y`, skipping anything off-buffer.
    fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgb) {
        let width = i64::from(self.width);
        let start = x0.max(0);
        let end = x1.min(width - 1);
        if start > end {
            return;
        }
        // Bounds checked above; all three fit the buffer.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (row, start, end) = ((y * width) as usize, start as usize, end as usize);
        self.pixels[row + start..=row + end].fill(color);
    }

    /// Even-odd scanline fill of an arbitrary simple polygon.
    fn fill(&mut self, points: &[ScreenPoint], color: Rgb) {
        if points.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let min_y = points.iter().map(|p| i64::from(p.y)).min().unwrap_or(0);
        let max_y = points.iter().map(|p| i64::from(p.y)).max().unwrap_or(0);
        let first_row = min_y.max(0);
        let last_row = max_y.min(i64::from(self.height) - 1);

        let mut crossings = std::mem::take(&mut self.crossings);
        for y in first_row..=last_row {
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (top, bottom) = if a.y <= b.y { (*a, b) } else { (b, *a) };
                let (x1, y1) = (i64::from(top.x), i64::from(top.y));
                let (x2, y2) = (i64::from(bottom.x), i64::from(bottom.y));
                if y1 == y2 {
                    continue;
                }

                // Half-open edges, except the bottom row closes the polygon.
                let spans = (y >= y1 && y < y2) || (y == max_y && y > y1 && y <= y2);
                if spans {
                    crossings.push(x1 + (y - y1) * (x2 - x1) / (y2 - y1));
                }
            }

            crossings.sort_unstable();
            for pair in crossings.chunks_exact(2) {
                self.hline(pair[0], pair[1], y, color);
            }
        }
        self.crossings = crossings;
    }
}

impl DrawSink for Framebuffer {
    fn clear(&mut self, color: Rgb) -> RenderResult<()> {
        self.pixels.fill(color);
        Ok(())
    }

    fn fill_polygon(&mut self, quad: &[ScreenPoint; 4], color: Rgb) -> RenderResult<()> {
        self.fill(quad, color);
        Ok(())
    }

    fn present(&mut self) -> RenderResult<()> {
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> [ScreenPoint; 4] {
        [
            ScreenPoint::new(x0, y0),
            ScreenPoint::new(x1, y0),
            ScreenPoint::new(x1, y1),
            ScreenPoint::new(x0, y1),
        ]
    }

    #[test]
    fn test_fill_square_inclusive() {
        let mut fb = Framebuffer::new(10, 10);
        fb.fill_polygon(&square(2, 2, 5, 5), RED).unwrap();

        assert_eq!(fb.count_pixels(RED), 16);
        assert_eq!(fb.pixel(2, 2), Some(RED));
        assert_eq!(fb.pixel(5, 5), Some(RED));
        assert_eq!(fb.pixel(6, 5), Some(Rgb::BLACK));
        assert_eq!(fb.pixel(1, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let mut cw = Framebuffer::new(10, 10);
        let mut ccw = Framebuffer::new(10, 10);
        let mut quad = square(1, 1, 7, 4);
        cw.fill_polygon(&quad, RED).unwrap();
        quad.reverse();
        ccw.fill_polygon(&quad, RED).unwrap();
        assert_eq!(cw.pixels(), ccw.pixels());
    }

    #[test]
    fn test_later_fill_overdraws() {
        let mut fb = Framebuffer::new(10, 10);
        fb.fill_polygon(&square(0, 0, 5, 5), RED).unwrap();
        fb.fill_polygon(&square(3, 3, 8, 8), BLUE).unwrap();

        assert_eq!(fb.pixel(4, 4), Some(BLUE));
        assert_eq!(fb.pixel(1, 1), Some(RED));
    }

    #[test]
    fn test_offscreen_pixels_skipped() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_polygon(&square(-100, -100, 100, 100), RED).unwrap();
        assert_eq!(fb.count_pixels(RED), 16);

        fb.clear(Rgb::BLACK).unwrap();
        fb.fill_polygon(&square(10, 10, 20, 20), RED).unwrap();
        assert_eq!(fb.count_pixels(RED), 0);
    }

    #[test]
    fn test_triangle_shaped_quad() {
        // Two corners coincide: the quad degenerates to a triangle.
        let mut fb = Framebuffer::new(10, 10);
        let quad = [
            ScreenPoint::new(0, 0),
            ScreenPoint::new(8, 0),
            ScreenPoint::new(0, 8),
            ScreenPoint::new(0, 8),
        ];
        fb.fill_polygon(&quad, RED).unwrap();

        assert_eq!(fb.pixel(1, 1), Some(RED));
        assert_eq!(fb.pixel(7, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn test_ppm_output() {
        let mut fb = Framebuffer::new(2, 1);
        fb.clear(BLUE).unwrap();
        let mut out = Vec::new();
        fb.write_ppm(&mut out).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0, 0, 255, 0, 0, 255]);
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = Framebuffer::new(1, 1);
        fb.present().unwrap();
        fb.present().unwrap();
        assert_eq!(fb.presented_frames(), 2);
    }
}
