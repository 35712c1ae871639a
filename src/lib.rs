//! # dotcal - Year Progress Dot Calendars
//!
//! dotcal renders phone wallpapers that show how much of the year has gone
//! by: one dot per day, colored by whether the day is past, today or still
//! ahead. It provides:
//!
//! - **Date progress**: day of year, days left and percentage for a date
//! - **Layouts**: a fitted row-major dot grid, a twelve-month mosaic and
//!   greedy text wrapping
//! - **Rendering**: anti-aliased dots and text on an RGBA surface, encoded to PNG
//! - **Server**: `/wallpaper` and `/days` HTTP endpoints
//!
//! ## Quick Start
//!
//! ```
//! use dotcal::{
//!     progress::CalendarDate,
//!     render::{FontSet, WallpaperOptions, render_wallpaper},
//! };
//!
//! let today = CalendarDate::from_ymd(2024, 2, 15).unwrap();
//! let options = WallpaperOptions::default();
//! let fonts = FontSet::builtin();
//!
//! let surface = render_wallpaper(&options, None, today, &fonts);
//! let png = surface.encode_png()?;
//! assert!(!png.is_empty());
//!
//! # Ok::<(), dotcal::error::DotcalError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`progress`] | Calendar dates, year progress and day states |
//! | [`layout`] | Dot grid, month mosaic and text wrapping geometry |
//! | [`render`] | Drawing surface, fonts and the two wallpapers |
//! | [`params`] | Lenient query parameter parsing |
//! | [`server`] | HTTP endpoints |
//! | [`error`] | Error types |

pub mod error;
pub mod layout;
pub mod params;
pub mod progress;
pub mod render;
pub mod server;

// Re-exports for convenience
pub use error::DotcalError;
pub use progress::{CalendarDate, Clock, YearProgress};
