//! Font faces used for labels and captions.
//!
//! Outline fonts (OTF/TTF) are loaded once at startup with ab_glyph and
//! shared read-only by every render. When no font directory is configured,
//! every role falls back to the Spleen 12x24 bitmap font compiled into the
//! binary, scaled to the requested pixel size.

use ab_glyph::{Font, FontArc, ScaleFont, point};
use spleen_font::{FONT_12X24, PSF2Font};
use std::path::Path;
use tracing::info;

use super::canvas::Surface;
use super::color::Rgb;
use crate::error::DotcalError;

/// Spleen 12x24 cell size.
const BITMAP_CELL_WIDTH: usize = 12;
const BITMAP_CELL_HEIGHT: usize = 24;
/// Row of the Spleen 12x24 baseline, counted from the top of the cell.
const BITMAP_BASELINE_ROW: f32 = 19.0;

/// Font file names expected inside a font directory, per role.
pub const TEXT_FONT_FILE: &str = "SF-Pro-Text-Regular.otf";
pub const DISPLAY_FONT_FILE: &str = "SF-Pro-Display-Regular.otf";
pub const ITALIC_FONT_FILE: &str = "SF-Pro-Display-RegularItalic.otf";

/// What a piece of text is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Progress counters.
    Text,
    /// Month labels and body copy.
    Display,
    /// Verse references.
    Italic,
}

/// A single typeface.
#[derive(Clone)]
pub enum Face {
    Outline(FontArc),
    /// Built-in Spleen bitmap font.
    Bitmap,
}

impl Face {
    /// Load an OTF/TTF font file.
    pub fn load(path: &Path) -> Result<Self, DotcalError> {
        let bytes = std::fs::read(path)
            .map_err(|e| DotcalError::Font(format!("Failed to read {}: {}", path.display(), e)))?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| DotcalError::Font(format!("Invalid font {}: {}", path.display(), e)))?;
        Ok(Face::Outline(font))
    }

    /// Advance width of `text` at `pixel_size`.
    pub fn measure(&self, text: &str, pixel_size: f32) -> f32 {
        match self {
            Face::Outline(font) => {
                let scaled = font.as_scaled(pixel_size);
                let mut width = 0.0f32;
                let mut previous = None;
                for ch in text.chars() {
                    let id = font.glyph_id(ch);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                width
            }
            Face::Bitmap => {
                text.chars().count() as f32 * BITMAP_CELL_WIDTH as f32 * bitmap_scale(pixel_size)
            }
        }
    }

    /// Distance from the top of the text box to the alphabetic baseline.
    pub fn ascent(&self, pixel_size: f32) -> f32 {
        match self {
            Face::Outline(font) => font.as_scaled(pixel_size).ascent(),
            Face::Bitmap => BITMAP_BASELINE_ROW * bitmap_scale(pixel_size),
        }
    }

    /// Draw one line of text with its left end at `x` and its alphabetic
    /// baseline at `baseline_y`.
    pub fn draw_line(
        &self,
        surface: &mut Surface,
        text: &str,
        x: f32,
        baseline_y: f32,
        pixel_size: f32,
        color: Rgb,
    ) {
        match self {
            Face::Outline(font) => {
                draw_outline_line(font, surface, text, x, baseline_y, pixel_size, color)
            }
            Face::Bitmap => draw_bitmap_line(surface, text, x, baseline_y, pixel_size, color),
        }
    }
}

fn bitmap_scale(pixel_size: f32) -> f32 {
    (pixel_size / BITMAP_CELL_HEIGHT as f32).max(0.0)
}

fn draw_outline_line(
    font: &FontArc,
    surface: &mut Surface,
    text: &str,
    x: f32,
    baseline_y: f32,
    pixel_size: f32,
    color: Rgb,
) {
    let scaled = font.as_scaled(pixel_size);
    let mut caret_x = x;
    let mut previous = None;

    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret_x += scaled.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(pixel_size, point(caret_x, baseline_y));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let gx = px as i64 + bounds.min.x as i64;
                let gy = py as i64 + bounds.min.y as i64;
                surface.blend(gx, gy, color, coverage.min(1.0));
            });
        }

        caret_x += scaled.h_advance(glyph_id);
        previous = Some(glyph_id);
    }
}

fn draw_bitmap_line(
    surface: &mut Surface,
    text: &str,
    x: f32,
    baseline_y: f32,
    pixel_size: f32,
    color: Rgb,
) {
    let scale = bitmap_scale(pixel_size);
    if scale <= 0.0 {
        return;
    }
    let Ok(mut spleen) = PSF2Font::new(FONT_12X24) else {
        return;
    };

    let cell_width = BITMAP_CELL_WIDTH as f32 * scale;
    let dst_w = cell_width.ceil() as usize;
    let dst_h = (BITMAP_CELL_HEIGHT as f32 * scale).ceil() as usize;
    let top = (baseline_y - BITMAP_BASELINE_ROW * scale).round() as i64;
    let mut caret_x = x;

    for ch in text.chars() {
        let utf8 = ch.to_string();
        if let Some(glyph) = spleen.glyph_for_utf8(utf8.as_bytes()) {
            let mut bits = vec![false; BITMAP_CELL_WIDTH * BITMAP_CELL_HEIGHT];
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < BITMAP_CELL_HEIGHT && col_x < BITMAP_CELL_WIDTH {
                        bits[row_y * BITMAP_CELL_WIDTH + col_x] = on;
                    }
                }
            }

            // Nearest-neighbour scale into the destination cell.
            let left = caret_x.round() as i64;
            for dy in 0..dst_h {
                let sy = ((dy as f32 / scale) as usize).min(BITMAP_CELL_HEIGHT - 1);
                for dx in 0..dst_w {
                    let sx = ((dx as f32 / scale) as usize).min(BITMAP_CELL_WIDTH - 1);
                    if bits[sy * BITMAP_CELL_WIDTH + sx] {
                        surface.blend(left + dx as i64, top + dy as i64, color, 1.0);
                    }
                }
            }
        }
        caret_x += cell_width;
    }
}

/// The faces for every role, shared by all renders.
#[derive(Clone)]
pub struct FontSet {
    pub text: Face,
    pub display: Face,
    pub italic: Face,
}

impl FontSet {
    /// The built-in bitmap face for every role.
    pub fn builtin() -> Self {
        Self {
            text: Face::Bitmap,
            display: Face::Bitmap,
            italic: Face::Bitmap,
        }
    }

    /// Load the three role fonts from `dir`. Any missing or unreadable
    /// file is an error.
    pub fn load_dir(dir: &Path) -> Result<Self, DotcalError> {
        let load = |file: &str| -> Result<Face, DotcalError> {
            let path = dir.join(file);
            let face = Face::load(&path)?;
            info!(path = %path.display(), "registered font");
            Ok(face)
        };

        Ok(Self {
            text: load(TEXT_FONT_FILE)?,
            display: load(DISPLAY_FONT_FILE)?,
            italic: load(ITALIC_FONT_FILE)?,
        })
    }

    /// Load from `dir` when given, otherwise use the built-in face.
    pub fn from_option(dir: Option<&Path>) -> Result<Self, DotcalError> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => {
                info!("no font directory configured, using built-in bitmap font");
                Ok(Self::builtin())
            }
        }
    }

    pub fn face(&self, role: FontRole) -> &Face {
        match role {
            FontRole::Text => &self.text,
            FontRole::Display => &self.display,
            FontRole::Italic => &self.italic,
        }
    }

    pub fn is_builtin(&self) -> bool {
        [&self.text, &self.display, &self.italic]
            .iter()
            .all(|face| matches!(face, Face::Bitmap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::rgb;

    #[test]
    fn test_bitmap_measure_scales_with_size() {
        let face = Face::Bitmap;
        assert_eq!(face.measure("abc", 24.0), 36.0);
        assert_eq!(face.measure("abc", 48.0), 72.0);
        assert_eq!(face.measure("", 24.0), 0.0);
    }

    #[test]
    fn test_bitmap_ascent() {
        assert_eq!(Face::Bitmap.ascent(24.0), 19.0);
        assert_eq!(Face::Bitmap.ascent(48.0), 38.0);
    }

    #[test]
    fn test_bitmap_draw_marks_pixels() {
        let bg = rgb(0xffffff);
        let ink = rgb(0x000000);
        let mut surface = Surface::new(100, 60, bg);
        Face::Bitmap.draw_line(&mut surface, "Mar", 10.0, 40.0, 24.0, ink);

        let inked = surface.into_image().pixels().filter(|p| p[0] == 0).count();
        assert!(inked > 0);
    }

    #[test]
    fn test_bitmap_draw_stays_in_cells() {
        let bg = rgb(0xffffff);
        let mut surface = Surface::new(100, 60, bg);
        Face::Bitmap.draw_line(&mut surface, "WWW", 20.0, 40.0, 24.0, rgb(0x000000));

        for y in 0..60 {
            for x in 0..20 {
                assert_eq!(surface.pixel(x, y), Some(bg), "ink left of text at {},{}", x, y);
            }
        }
    }

    #[test]
    fn test_missing_font_dir_is_an_error() {
        let result = FontSet::load_dir(Path::new("/nonexistent/fonts"));
        assert!(matches!(result, Err(DotcalError::Font(_))));
    }

    #[test]
    fn test_builtin_set() {
        let fonts = FontSet::builtin();
        assert!(fonts.is_builtin());
        assert!(matches!(fonts.face(FontRole::Italic), Face::Bitmap));
    }
}
