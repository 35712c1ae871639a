//! # Layout
//!
//! Pure geometry: where every dot and every line of text goes.
//!
//! Nothing in this module draws. Each layout takes a handful of numeric knobs
//! and produces pixel coordinates that the renderers feed to a drawing
//! surface, which keeps the numbers testable without rasterizing anything.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`grid`] | Row-major dot grid fitted into a padded canvas |
//! | [`month`] | Twelve day-of-week aligned month blocks, three per row |
//! | [`wrap`] | Greedy word wrapping against a width measure |

pub mod grid;
pub mod month;
pub mod wrap;

pub use grid::{DotPosition, GridLayout, GridSpec, layout_grid};
pub use month::{MonthBlock, MosaicSpec, layout_month};
pub use wrap::wrap_text;

/// Round to the nearest integer, with halves going up (towards +inf).
#[inline]
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
