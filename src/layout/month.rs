//! Month mosaic: twelve small calendars, three per row.
//!
//! Each month is a 7-column week grid (Sunday first) with its day-1 dot offset
//! by the weekday of the 1st. Rows of months share a fixed vertical pitch sized
//! for a six-week month, so every block lines up regardless of how many weeks
//! it actually spans.

use chrono::{Datelike, NaiveDate};

use super::round_half_up;

/// Short month labels, indexed by zero-based month.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days in a week row.
pub const WEEK_COLUMNS: u32 = 7;

/// Week rows reserved per month. No month spans more than six.
pub const MAX_WEEK_ROWS: u32 = 6;

/// Placement knobs for the month mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicSpec {
    pub canvas_width: i32,
    /// Y of the top of the first row's month labels.
    pub top: i32,
    /// Distance between the left edges of horizontally adjacent months.
    pub month_pitch_x: i32,
    pub dot_diameter: i32,
    /// Blank space between dot edges.
    pub dot_gap: i32,
    /// Distance from the top of a month label to its first dot row.
    pub label_gap: i32,
    /// Blank space below one month row before the next row's labels.
    pub vertical_gap: i32,
    pub months_per_row: u32,
}

impl MosaicSpec {
    /// Default wallpaper mosaic for a canvas of the given width.
    pub fn for_canvas(canvas_width: i32) -> Self {
        Self {
            canvas_width,
            top: 875,
            month_pitch_x: 240,
            dot_diameter: 15,
            dot_gap: 15,
            label_gap: 30,
            vertical_gap: 60,
            months_per_row: 3,
        }
    }

    pub fn dot_pitch(&self) -> i32 {
        self.dot_diameter + self.dot_gap
    }

    /// Edge-to-edge width of one month's dots.
    pub fn month_width(&self) -> i32 {
        WEEK_COLUMNS as i32 * self.dot_diameter + (WEEK_COLUMNS as i32 - 1) * self.dot_gap
    }

    /// Width from the first month's left dot edge to the last month's right
    /// dot edge in one row.
    pub fn row_span(&self) -> i32 {
        (self.months_per_row as i32 - 1) * self.month_pitch_x + self.month_width()
    }

    /// Left edge of the first month in each row, centering the row.
    pub fn start_x(&self) -> i32 {
        round_half_up((self.canvas_width - self.row_span()) as f64 / 2.0)
    }

    /// Vertical distance between month rows.
    pub fn row_height(&self) -> i32 {
        self.label_gap + MAX_WEEK_ROWS as i32 * self.dot_pitch() + self.vertical_gap
    }

    /// Blocks for all twelve months of `year`, in reading order.
    pub fn blocks(&self, year: i32) -> Vec<MonthBlock> {
        (0..12)
            .filter_map(|month_index| layout_month(month_index, year, self))
            .collect()
    }
}

/// One month's placement and calendar shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBlock {
    /// Zero-based month (0 = January).
    pub month_index: u32,
    /// Left edge of the label and of the first dot column.
    pub left: i32,
    /// Top of the month label.
    pub top: i32,
    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub start_day_of_week: u32,
    pub days_in_month: u32,
    pub dot_diameter: i32,
    pub dot_gap: i32,
    pub label_gap: i32,
}

impl MonthBlock {
    pub fn label(&self) -> &'static str {
        MONTH_LABELS[self.month_index as usize % 12]
    }

    pub fn radius(&self) -> f64 {
        self.dot_diameter as f64 / 2.0
    }

    /// Week-grid column and row of a day of the month (1-based).
    pub fn cell(&self, day: u32) -> (u32, u32) {
        let position = self.start_day_of_week + day.saturating_sub(1);
        (position % WEEK_COLUMNS, position / WEEK_COLUMNS)
    }

    /// Pixel center of a day's dot.
    pub fn day_center(&self, day: u32) -> (f64, f64) {
        let (column, row) = self.cell(day);
        let pitch = (self.dot_diameter + self.dot_gap) as f64;
        let radius = self.radius();
        (
            self.left as f64 + radius + column as f64 * pitch,
            (self.top + self.label_gap) as f64 + radius + row as f64 * pitch,
        )
    }

    /// Number of week rows this month actually occupies.
    #[cfg(test)]
    fn week_rows(&self) -> u32 {
        (self.start_day_of_week + self.days_in_month).div_ceil(WEEK_COLUMNS)
    }
}

/// Place month `month_index` (0-based) of `year` in the mosaic.
///
/// Returns `None` for month indexes outside 0..12 or years chrono cannot
/// represent.
pub fn layout_month(month_index: u32, year: i32, spec: &MosaicSpec) -> Option<MonthBlock> {
    let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1)?;
    let next_first = if month_index == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month_index + 2, 1)?
    };
    let days_in_month = next_first.signed_duration_since(first).num_days() as u32;

    let per_row = spec.months_per_row.max(1);
    let column = month_index % per_row;
    let row = month_index / per_row;

    Some(MonthBlock {
        month_index,
        left: spec.start_x() + column as i32 * spec.month_pitch_x,
        top: spec.top + row as i32 * spec.row_height(),
        start_day_of_week: first.weekday().num_days_from_sunday(),
        days_in_month,
        dot_diameter: spec.dot_diameter,
        dot_gap: spec.dot_gap,
        label_gap: spec.label_gap,
    })
}
