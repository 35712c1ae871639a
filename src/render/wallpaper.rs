//! # Month Mosaic Wallpaper
//!
//! Twelve month calendars, three per row, with one dot per day and a
//! days-left counter near the bottom. Past days use the dot color, today
//! uses its own color, and future days use the dot color faded.
//!
//! An optional background image is stretched over the canvas and darkened.
//! If it cannot be fetched or decoded, the flat background color is used
//! instead and the request still succeeds.

use image::DynamicImage;
use tracing::{debug, warn};

use super::canvas::Surface;
use super::color::{BLACK, Rgb, rgb};
use super::font::{FontRole, FontSet};
use super::text::TextStyle;
use super::{DotPalette, DotStyle};
use crate::error::DotcalError;
use crate::layout::MosaicSpec;
use crate::params::{self, Params};
use crate::progress::{CalendarDate, DayState, YearProgress};

pub const DEFAULT_WIDTH: u32 = 1170;
pub const DEFAULT_HEIGHT: u32 = 2532;

pub const DEFAULT_BACKGROUND: Rgb = rgb(0x2a2a2a);
pub const DEFAULT_DOT: Rgb = rgb(0x7d95b2);
pub const DEFAULT_TODAY: Rgb = rgb(0xd8cec6);
pub const DEFAULT_TEXT: Rgb = rgb(0xf3ede8);

/// Opacity of days after today.
pub const FUTURE_OPACITY: f32 = 0.3;
/// Black overlay opacity over a background image.
pub const BACKGROUND_DIM: f32 = 0.4;

const LABEL_SIZE: f32 = 27.0;
const CAPTION_SIZE: f32 = 35.0;
/// Caption baseline distance from the bottom edge.
const CAPTION_BOTTOM_OFFSET: i32 = 575;

/// Everything `/wallpaper` can be asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub dot: Rgb,
    pub today: Rgb,
    pub text: Rgb,
    /// URL of an image to stretch behind the calendar.
    pub background_image: Option<String>,
}

impl Default for WallpaperOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: DEFAULT_BACKGROUND,
            dot: DEFAULT_DOT,
            today: DEFAULT_TODAY,
            text: DEFAULT_TEXT,
            background_image: None,
        }
    }
}

impl WallpaperOptions {
    pub fn from_params(p: &Params) -> Self {
        Self {
            width: params::dimension_param(p, "width", DEFAULT_WIDTH),
            height: params::dimension_param(p, "height", DEFAULT_HEIGHT),
            background: params::color_param(p, "bg", DEFAULT_BACKGROUND),
            dot: params::color_param(p, "dot", DEFAULT_DOT),
            today: params::color_param(p, "today", DEFAULT_TODAY),
            text: params::color_param(p, "text", DEFAULT_TEXT),
            background_image: params::string_param(p, "bgImage"),
        }
    }

    pub fn palette(&self) -> DotPalette {
        DotPalette {
            past: DotStyle::solid(self.dot),
            today: DotStyle::solid(self.today),
            future: DotStyle::faded(self.dot, FUTURE_OPACITY),
        }
    }
}

/// Counter shown under the mosaic.
pub fn caption(progress: &YearProgress) -> String {
    format!("{}d left · {}%", progress.days_left, progress.percentage)
}

/// Render the month mosaic for the year containing `today`.
pub fn render_wallpaper(
    options: &WallpaperOptions,
    background_image: Option<&DynamicImage>,
    today: CalendarDate,
    fonts: &FontSet,
) -> Surface {
    let mut surface = Surface::new(options.width, options.height, options.background);
    if let Some(image) = background_image {
        surface.draw_stretched(image);
        surface.fill(BLACK, BACKGROUND_DIM);
    }

    let width = surface.width() as i32;
    let height = surface.height() as i32;
    let mosaic = MosaicSpec::for_canvas(width);
    let palette = options.palette();
    let label_style = TextStyle::new(FontRole::Display, LABEL_SIZE, options.text);

    for block in mosaic.blocks(today.year()) {
        fonts.draw_text(
            &mut surface,
            &label_style,
            block.label(),
            block.left as f64,
            block.top as f64,
        );

        for day in 1..=block.days_in_month {
            let Some(date) = CalendarDate::from_ymd(today.year(), block.month_index, day) else {
                continue;
            };
            let style = palette.style(DayState::classify(date, today));
            let (cx, cy) = block.day_center(day);
            surface.fill_circle(cx, cy, block.radius(), style.color, style.opacity);
        }
    }

    let progress = YearProgress::for_date(today);
    let caption_style = TextStyle::new(FontRole::Text, CAPTION_SIZE, options.today)
        .centered()
        .alphabetic();
    fonts.draw_text(
        &mut surface,
        &caption_style,
        &caption(&progress),
        width as f64 / 2.0,
        (height - CAPTION_BOTTOM_OFFSET) as f64,
    );

    debug!(
        width,
        height,
        date = %today,
        day_of_year = progress.day_of_year,
        "rendered wallpaper"
    );
    surface
}

/// Download and decode an image.
pub async fn fetch_background(
    client: &reqwest::Client,
    url: &str,
) -> Result<DynamicImage, DotcalError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DotcalError::Image(format!("Failed to download {}: {}", url, e)))?;
    if !response.status().is_success() {
        return Err(DotcalError::Image(format!(
            "Failed to download {}: HTTP {}",
            url,
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| DotcalError::Image(format!("Failed to read image data: {}", e)))?;

    image::load_from_memory(&bytes)
        .map_err(|e| DotcalError::Image(format!("Failed to decode image: {}", e)))
}

/// Fetch the background image if one was requested. Failures are logged and
/// treated as "no image".
pub async fn load_background(
    client: &reqwest::Client,
    options: &WallpaperOptions,
) -> Option<DynamicImage> {
    let url = options.background_image.as_deref()?;
    match fetch_background(client, url).await {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(url, error = %e, "background image unavailable, using flat fill");
            None
        }
    }
}
