//! # Year Grid
//!
//! One dot per day of the year in a fixed 15x25 grid, under a wrapped verse
//! and above a days-left counter. Unlike the mosaic, every state uses its own
//! color at full opacity.

use tracing::debug;

use super::canvas::Surface;
use super::color::{Rgb, rgb};
use super::font::{FontRole, FontSet};
use super::text::TextStyle;
use super::{DotPalette, DotStyle};
use crate::layout::{GridLayout, GridSpec, wrap_text};
use crate::params::{self, Params};
use crate::progress::{CalendarDate, DayState, YearProgress};

pub const DEFAULT_WIDTH: u32 = 1170;
pub const DEFAULT_HEIGHT: u32 = 2532;

pub const DEFAULT_BACKGROUND: Rgb = rgb(0xf6f3ef);
/// Days not yet reached.
pub const DEFAULT_DOT: Rgb = rgb(0xcfcac4);
/// Days already passed.
pub const DEFAULT_PASSED: Rgb = rgb(0x0e151f);
pub const DEFAULT_TODAY: Rgb = rgb(0xd06b4a);

pub const DEFAULT_SIDE_PADDING: i32 = 50;
pub const DEFAULT_TOP_PADDING: i32 = 900;
pub const DEFAULT_BOTTOM_PADDING: i32 = 310;
pub const DEFAULT_GAP: i32 = 13;

pub const GRID_COLUMNS: u32 = 15;
pub const GRID_ROWS: u32 = 25;

pub const VERSE_REFERENCE: &str = "Isaiah 40";
pub const VERSE_TEXT: &str = concat!(
    "³⁰ Even youths shall faint and be weary,\n",
    "     and young men shall fall exhausted;\n",
    "³¹ but they who wait for the Lord shall renew their strength,\n",
    "     they shall mount up with wings like eagles,\n",
    "   they shall run and not be weary,\n",
    "     they shall walk and not faint.",
);
/// Verse color unless the request sets `text`.
pub const VERSE_COLOR: Rgb = rgb(0x0e151f);

const VERSE_TOP: f64 = 660.0;
const VERSE_SIDE_MARGIN: i32 = 120;
const REFERENCE_SIZE: f32 = 32.0;
/// Space from the top of the reference to the top of the verse body.
const REFERENCE_ADVANCE: f64 = 40.0;
const VERSE_SIZE: f32 = 25.0;
const VERSE_LINE_HEIGHT: f64 = 22.0;

const CAPTION_SIZE: f32 = 32.0;
/// Caption baseline distance from the bottom edge.
const CAPTION_BOTTOM_OFFSET: i32 = 270;

/// Everything `/days` can be asked for (besides the key).
#[derive(Debug, Clone, PartialEq)]
pub struct DaysOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub dot: Rgb,
    pub passed: Rgb,
    pub today: Rgb,
    /// Verse color override.
    pub text: Option<Rgb>,
    pub side_padding: i32,
    pub top_padding: i32,
    pub bottom_padding: i32,
    pub gap: i32,
}

impl Default for DaysOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: DEFAULT_BACKGROUND,
            dot: DEFAULT_DOT,
            passed: DEFAULT_PASSED,
            today: DEFAULT_TODAY,
            text: None,
            side_padding: DEFAULT_SIDE_PADDING,
            top_padding: DEFAULT_TOP_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
            gap: DEFAULT_GAP,
        }
    }
}

impl DaysOptions {
    pub fn from_params(p: &Params) -> Self {
        Self {
            width: params::dimension_param(p, "width", DEFAULT_WIDTH),
            height: params::dimension_param(p, "height", DEFAULT_HEIGHT),
            background: params::color_param(p, "bg", DEFAULT_BACKGROUND),
            dot: params::color_param(p, "dot", DEFAULT_DOT),
            passed: params::color_param(p, "passed", DEFAULT_PASSED),
            today: params::color_param(p, "today", DEFAULT_TODAY),
            text: p.get("text").and_then(|v| Rgb::parse_hex(v)),
            side_padding: params::int_param(p, "side", DEFAULT_SIDE_PADDING),
            top_padding: params::int_param(p, "top", DEFAULT_TOP_PADDING),
            bottom_padding: params::int_param(p, "bottom", DEFAULT_BOTTOM_PADDING),
            gap: params::int_param(p, "gap", DEFAULT_GAP),
        }
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            canvas_width: self.width as i32,
            canvas_height: self.height as i32,
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            side_padding: self.side_padding,
            top_padding: self.top_padding,
            bottom_padding: self.bottom_padding,
            gap: self.gap,
        }
    }

    pub fn palette(&self) -> DotPalette {
        DotPalette {
            past: DotStyle::solid(self.passed),
            today: DotStyle::solid(self.today),
            future: DotStyle::solid(self.dot),
        }
    }

    pub fn verse_color(&self) -> Rgb {
        self.text.unwrap_or(VERSE_COLOR)
    }
}

/// Counter shown under the grid.
pub fn caption(progress: &YearProgress) -> String {
    format!("{} days left · {}%", progress.days_left, progress.percentage)
}

/// Draw the verse centered at the top of the canvas. Returns the Y cursor
/// below its last line.
fn draw_verse(surface: &mut Surface, fonts: &FontSet, color: Rgb) -> f64 {
    let center_x = surface.width() as f64 / 2.0;
    let max_width = (surface.width() as i32 - 2 * VERSE_SIDE_MARGIN) as f64;

    let reference_style = TextStyle::new(FontRole::Italic, REFERENCE_SIZE, color).centered();
    fonts.draw_text(surface, &reference_style, VERSE_REFERENCE, center_x, VERSE_TOP);

    let body_style = TextStyle::new(FontRole::Display, VERSE_SIZE, color).centered();
    wrap_text(
        VERSE_TEXT,
        max_width,
        VERSE_LINE_HEIGHT,
        VERSE_TOP + REFERENCE_ADVANCE,
        |line| fonts.measure(&body_style, line) as f64,
        |line, y| fonts.draw_text(surface, &body_style, line, center_x, y),
    )
}

/// Render the year grid for the year containing `today`.
pub fn render_days(options: &DaysOptions, today: CalendarDate, fonts: &FontSet) -> Surface {
    let mut surface = Surface::new(options.width, options.height, options.background);
    let verse_bottom = draw_verse(&mut surface, fonts, options.verse_color());

    let progress = YearProgress::for_date(today);
    let layout = GridLayout::new(&options.grid_spec());
    let palette = options.palette();

    if layout.is_degenerate() {
        debug!(diameter = layout.diameter, "degenerate grid, no dots drawn");
    }

    for dot in layout.positions(progress.total_days) {
        let style = palette.style(DayState::for_ordinal(dot.index, progress.day_of_year));
        surface.fill_circle(dot.center_x, dot.center_y, dot.radius(), style.color, style.opacity);
    }

    let caption_x = surface.width() as f64 / 2.0;
    let caption_y = (surface.height() as i32 - CAPTION_BOTTOM_OFFSET) as f64;
    let caption_style = TextStyle::new(FontRole::Display, CAPTION_SIZE, options.today)
        .centered()
        .alphabetic();
    fonts.draw_text(
        &mut surface,
        &caption_style,
        &caption(&progress),
        caption_x,
        caption_y,
    );

    debug!(
        width = surface.width(),
        height = surface.height(),
        date = %today,
        day_of_year = progress.day_of_year,
        diameter = layout.diameter,
        verse_bottom,
        "rendered year grid"
    );
    surface
}
