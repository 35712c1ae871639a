//! Drawing surface for wallpaper rendering.
//!
//! A `Surface` is an opaque RGBA buffer owned by a single render. It is
//! created with a background color, drawn into, encoded to PNG and dropped.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops::FilterType};
use std::io::Cursor;

use super::color::Rgb;
use crate::error::DotcalError;

/// Largest accepted canvas edge, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

pub struct Surface {
    img: RgbaImage,
}

impl Surface {
    /// Create a surface filled with `background`.
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let width = width.clamp(1, MAX_DIMENSION);
        let height = height.clamp(1, MAX_DIMENSION);
        let fill = Rgba([background.r, background.g, background.b, 255]);
        Self {
            img: RgbaImage::from_pixel(width, height, fill),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Color at a pixel. Out-of-bounds coordinates return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.img.get_pixel(x, y);
        Some(Rgb {
            r: p[0],
            g: p[1],
            b: p[2],
        })
    }

    /// Composite `color` onto one pixel with the given coverage.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 || alpha <= 0.0
        {
            return;
        }
        let p = self.img.get_pixel_mut(x as u32, y as u32);
        let below = Rgb {
            r: p[0],
            g: p[1],
            b: p[2],
        };
        let out = color.over(below, alpha);
        *p = Rgba([out.r, out.g, out.b, 255]);
    }

    /// Composite a flat color over the whole surface.
    pub fn fill(&mut self, color: Rgb, alpha: f32) {
        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                self.blend(x, y, color, alpha);
            }
        }
    }

    /// Fill an anti-aliased circle.
    ///
    /// Coverage falls off over one pixel at the edge, measured from each
    /// pixel's center. Non-positive radii draw nothing. Only the part of the
    /// bounding box that lies on the surface is visited.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f32) {
        if radius <= 0.0 || !(cx.is_finite() && cy.is_finite() && radius.is_finite()) {
            return;
        }

        let min_x = ((cx - radius - 1.0).floor() as i64).max(0);
        let max_x = ((cx + radius + 1.0).ceil() as i64).min(self.width() as i64 - 1);
        let min_y = ((cy - radius - 1.0).floor() as i64).max(0);
        let max_y = ((cy + radius + 1.0).ceil() as i64).min(self.height() as i64 - 1);
        if min_x > max_x || min_y > max_y {
            return;
        }

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0) as f32;
                if coverage > 0.0 {
                    self.blend(px, py, color, alpha * coverage);
                }
            }
        }
    }

    /// Stretch `image` over the whole surface, ignoring its aspect ratio.
    pub fn draw_stretched(&mut self, image: &DynamicImage) {
        let resized = image
            .resize_exact(self.width(), self.height(), FilterType::Triangle)
            .to_rgba8();

        for (x, y, p) in resized.enumerate_pixels() {
            let color = Rgb {
                r: p[0],
                g: p[1],
                b: p[2],
            };
            self.blend(x as i64, y as i64, color, p[3] as f32 / 255.0);
        }
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, DotcalError> {
        let mut png_bytes = Vec::new();
        self.img
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| DotcalError::Image(format!("PNG encoding failed: {}", e)))?;
        Ok(png_bytes)
    }

    #[cfg(test)]
    pub(crate) fn into_image(self) -> RgbaImage {
        self.img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::rgb;

    const BG: Rgb = rgb(0x2a2a2a);
    const DOT: Rgb = rgb(0x7d95b2);

    #[test]
    fn test_new_fills_background() {
        let surface = Surface::new(4, 3, BG);
        assert_eq!(surface.width(), 4);
        assert_eq!(surface.height(), 3);
        assert_eq!(surface.pixel(3, 2), Some(BG));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_dimensions_are_clamped() {
        let surface = Surface::new(0, MAX_DIMENSION + 10, BG);
        assert_eq!(surface.width(), 1);
        assert_eq!(surface.height(), MAX_DIMENSION);
    }

    #[test]
    fn test_fill_circle_solid_center_and_clean_outside() {
        let mut surface = Surface::new(40, 40, BG);
        surface.fill_circle(20.0, 20.0, 8.0, DOT, 1.0);

        assert_eq!(surface.pixel(20, 20), Some(DOT));
        assert_eq!(surface.pixel(14, 20), Some(DOT));
        assert_eq!(surface.pixel(0, 0), Some(BG));
        assert_eq!(surface.pixel(20, 30), Some(BG));
    }

    #[test]
    fn test_fill_circle_edge_is_antialiased() {
        let mut surface = Surface::new(40, 40, BG);
        surface.fill_circle(20.0, 20.0, 7.5, DOT, 1.0);

        let edge_values: Vec<Rgb> = (0..40)
            .filter_map(|x| surface.pixel(x, 19))
            .filter(|&c| c != BG && c != DOT)
            .collect();
        assert!(!edge_values.is_empty());
    }

    #[test]
    fn test_fill_circle_with_opacity() {
        let mut surface = Surface::new(20, 20, BG);
        surface.fill_circle(10.0, 10.0, 5.0, DOT, 0.3);
        assert_eq!(surface.pixel(10, 10), Some(DOT.over(BG, 0.3)));
    }

    #[test]
    fn test_degenerate_radius_draws_nothing() {
        let mut surface = Surface::new(10, 10, BG);
        surface.fill_circle(5.0, 5.0, 0.0, DOT, 1.0);
        surface.fill_circle(5.0, 5.0, -3.0, DOT, 1.0);
        assert!(surface.into_image().pixels().all(|p| p[0] == BG.r));
    }

    #[test]
    fn test_off_surface_circle_is_skipped() {
        let mut surface = Surface::new(10, 10, BG);
        let started = std::time::Instant::now();
        surface.fill_circle(-5_000_000.0, -5_000_000.0, 1_000_000.0, DOT, 1.0);
        surface.fill_circle(f64::NAN, 5.0, 3.0, DOT, 1.0);

        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert!(surface.into_image().pixels().all(|p| p[0] == BG.r));
    }

    #[test]
    fn test_huge_circle_is_clipped_to_surface() {
        let mut surface = Surface::new(10, 10, BG);
        let started = std::time::Instant::now();
        surface.fill_circle(5.0, 5.0, 40_000.0, DOT, 1.0);

        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert!(surface.into_image().pixels().all(|p| p[0] == DOT.r));
    }

    #[test]
    fn test_fill_overlay() {
        let mut surface = Surface::new(2, 2, rgb(0xffffff));
        surface.fill(rgb(0x000000), 0.4);
        // 255 * 0.6 = 153
        assert_eq!(surface.pixel(1, 1), Some(rgb(0x999999)));
    }

    #[test]
    fn test_draw_stretched() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let mut surface = Surface::new(10, 6, BG);
        surface.draw_stretched(&DynamicImage::ImageRgba8(source));
        assert_eq!(surface.pixel(9, 5), Some(rgb(0xff0000)));
    }

    #[test]
    fn test_encode_png_signature() {
        let surface = Surface::new(3, 3, BG);
        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
