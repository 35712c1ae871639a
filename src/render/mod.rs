//! # Rendering
//!
//! Turns layouts into pixels.
//!
//! ## Architecture
//!
//! ```text
//! Clock → CalendarDate → YearProgress ─┐
//!                                      ├→ render_wallpaper / render_days → Surface → PNG bytes
//! query params → Options → layouts ────┘
//! ```
//!
//! Each render owns a fresh [`canvas::Surface`]. Fonts are the only shared
//! input and are read-only.

pub mod canvas;
pub mod color;
pub mod days;
pub mod font;
pub mod text;
pub mod wallpaper;

pub use canvas::Surface;
pub use color::Rgb;
pub use days::{DaysOptions, render_days};
pub use font::{FontRole, FontSet};
pub use wallpaper::{WallpaperOptions, render_wallpaper};

use crate::progress::DayState;

/// Fill color and opacity for a dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub color: Rgb,
    pub opacity: f32,
}

impl DotStyle {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    pub const fn faded(color: Rgb, opacity: f32) -> Self {
        Self { color, opacity }
    }
}

/// Dot styles for each day state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPalette {
    pub past: DotStyle,
    pub today: DotStyle,
    pub future: DotStyle,
}

impl DotPalette {
    pub fn style(&self, state: DayState) -> DotStyle {
        match state {
            DayState::Past => self.past,
            DayState::Today => self.today,
            DayState::Future => self.future,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::rgb;

    #[test]
    fn test_palette_selects_by_state() {
        let palette = DotPalette {
            past: DotStyle::solid(rgb(0x7d95b2)),
            today: DotStyle::solid(rgb(0xd8cec6)),
            future: DotStyle::faded(rgb(0x7d95b2), 0.3),
        };

        assert_eq!(palette.style(DayState::Past).opacity, 1.0);
        assert_eq!(palette.style(DayState::Today).color, rgb(0xd8cec6));
        assert_eq!(palette.style(DayState::Future).opacity, 0.3);
        assert_eq!(
            palette.style(DayState::Past).color,
            palette.style(DayState::Future).color
        );
    }
}
