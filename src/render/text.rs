//! Positioned text: alignment and baseline handling on top of [`FontSet`].

use super::canvas::Surface;
use super::color::Rgb;
use super::font::{FontRole, FontSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `x` is the left end of the line.
    Left,
    /// `x` is the horizontal middle of the line.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// `y` is the top of the text box.
    Top,
    /// `y` is the alphabetic baseline.
    Alphabetic,
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub role: FontRole,
    /// Font size in pixels.
    pub size: f32,
    pub color: Rgb,
    pub align: TextAlign,
    pub baseline: Baseline,
}

impl TextStyle {
    pub fn new(role: FontRole, size: f32, color: Rgb) -> Self {
        Self {
            role,
            size,
            color,
            align: TextAlign::Left,
            baseline: Baseline::Top,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    pub fn alphabetic(mut self) -> Self {
        self.baseline = Baseline::Alphabetic;
        self
    }
}

impl FontSet {
    /// Advance width of `text` in `style`.
    pub fn measure(&self, style: &TextStyle, text: &str) -> f32 {
        self.face(style.role).measure(text, style.size)
    }

    /// Draw one line of text anchored at (`x`, `y`) per the style's
    /// alignment and baseline.
    pub fn draw_text(&self, surface: &mut Surface, style: &TextStyle, text: &str, x: f64, y: f64) {
        let face = self.face(style.role);

        let left = match style.align {
            TextAlign::Left => x as f32,
            TextAlign::Center => x as f32 - face.measure(text, style.size) / 2.0,
        };
        let baseline_y = match style.baseline {
            Baseline::Top => y as f32 + face.ascent(style.size),
            Baseline::Alphabetic => y as f32,
        };

        face.draw_line(surface, text, left, baseline_y, style.size, style.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::rgb;

    const BG: Rgb = rgb(0xffffff);
    const INK: Rgb = rgb(0x000000);

    /// Bounding box of inked pixels: (min_x, min_y, max_x, max_y).
    fn ink_bounds(surface: &Surface) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if surface.pixel(x, y) != Some(BG) {
                    bounds = Some(match bounds {
                        None => (x, y, x, y),
                        Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
                    });
                }
            }
        }
        bounds
    }

    #[test]
    fn test_centered_text_straddles_anchor() {
        let fonts = FontSet::builtin();
        let style = TextStyle::new(FontRole::Text, 24.0, INK).centered();
        let mut surface = Surface::new(200, 50, BG);
        fonts.draw_text(&mut surface, &style, "HHHH", 100.0, 10.0);

        let (min_x, _, max_x, _) = ink_bounds(&surface).unwrap();
        // "HHHH" is 48px wide, so it spans 76..124.
        assert!(min_x >= 76 && min_x < 100);
        assert!(max_x > 100 && max_x < 124);
    }

    #[test]
    fn test_top_baseline_draws_below_anchor() {
        let fonts = FontSet::builtin();
        let style = TextStyle::new(FontRole::Display, 24.0, INK);
        let mut surface = Surface::new(100, 80, BG);
        fonts.draw_text(&mut surface, &style, "Jan", 10.0, 30.0);

        let (min_x, min_y, _, _) = ink_bounds(&surface).unwrap();
        assert!(min_x >= 10);
        assert!(min_y >= 30);
    }

    #[test]
    fn test_alphabetic_baseline_draws_above_anchor() {
        let fonts = FontSet::builtin();
        let style = TextStyle::new(FontRole::Text, 24.0, INK).alphabetic();
        let mut surface = Surface::new(100, 80, BG);
        fonts.draw_text(&mut surface, &style, "HH", 10.0, 50.0);

        let (_, min_y, _, max_y) = ink_bounds(&surface).unwrap();
        assert!(min_y < 50);
        // Only descenders may reach below the baseline.
        assert!(max_y < 56);
    }

    #[test]
    fn test_measure_uses_role_face() {
        let fonts = FontSet::builtin();
        let style = TextStyle::new(FontRole::Italic, 48.0, INK);
        assert_eq!(fonts.measure(&style, "ab"), 48.0);
    }
}
