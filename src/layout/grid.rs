//! Row-major dot grid fitted inside a padded canvas.
//!
//! The dot diameter is derived from the canvas and spacing knobs: whichever
//! axis is tighter bounds the grid, and the result is floored to whole pixels
//! so neighbouring dots never leave sub-pixel seams. The grid is then centered
//! horizontally in the full canvas and vertically within the padded region.

use super::round_half_up;

/// Canvas dimensions and spacing knobs for a dot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub columns: u32,
    pub rows: u32,
    pub side_padding: i32,
    pub top_padding: i32,
    pub bottom_padding: i32,
    pub gap: i32,
}

impl GridSpec {
    /// Width left for the grid once both side paddings are removed.
    ///
    /// Computed in `i64` so any pair of `i32` knobs fits.
    pub fn available_width(&self) -> i64 {
        self.canvas_width as i64 - 2 * self.side_padding as i64
    }

    /// Height left for the grid between the top and bottom paddings.
    pub fn available_height(&self) -> i64 {
        self.canvas_height as i64 - self.top_padding as i64 - self.bottom_padding as i64
    }
}

/// A single dot of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPosition {
    /// 1-based ordinal (day of year for the year grid).
    pub index: u32,
    pub column: u32,
    pub row: u32,
    pub center_x: f64,
    pub center_y: f64,
    pub diameter: i32,
}

impl DotPosition {
    pub fn radius(&self) -> f64 {
        self.diameter as f64 / 2.0
    }
}

/// Resolved grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    /// Whole-pixel dot diameter. Zero or negative for degenerate specs.
    pub diameter: i32,
    pub gap: i32,
    /// Top-left corner of the first dot's bounding box.
    pub origin_x: i32,
    pub origin_y: i32,
}

impl GridLayout {
    pub fn new(spec: &GridSpec) -> Self {
        let columns = spec.columns.max(1);
        let rows = spec.rows.max(1);
        let available_width = spec.available_width() as f64;
        let available_height = spec.available_height() as f64;
        let gap = spec.gap as f64;

        let from_width = (available_width - (columns - 1) as f64 * gap) / columns as f64;
        let from_height = (available_height - (rows - 1) as f64 * gap) / rows as f64;
        let diameter = from_width.min(from_height).floor() as i32;

        let mut layout = Self {
            columns,
            rows,
            diameter,
            gap: spec.gap,
            origin_x: 0,
            origin_y: 0,
        };

        // Center using the floored size, not the raw available space.
        layout.origin_x = round_half_up((spec.canvas_width as i64 - layout.width()) as f64 / 2.0);
        layout.origin_y = round_half_up(
            spec.top_padding as f64 + (available_height - layout.height() as f64) / 2.0,
        );
        layout
    }

    /// Center-to-center distance between neighbouring dots.
    pub fn pitch(&self) -> i64 {
        self.diameter as i64 + self.gap as i64
    }

    pub fn radius(&self) -> f64 {
        self.diameter as f64 / 2.0
    }

    /// True when the spacing leaves no room for a visible dot.
    pub fn is_degenerate(&self) -> bool {
        self.diameter <= 0
    }

    /// Occupied width from the left edge of the first column to the right
    /// edge of the last.
    pub fn width(&self) -> i64 {
        span(self.columns, self.diameter, self.gap)
    }

    /// Occupied height from the top of the first row to the bottom of the last.
    pub fn height(&self) -> i64 {
        span(self.rows, self.diameter, self.gap)
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> u32 {
        self.columns * self.rows
    }

    /// Column and row of a 1-based ordinal in row-major order.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        let idx = index.saturating_sub(1);
        (idx % self.columns, idx / self.columns)
    }

    /// Position of the dot with the given 1-based ordinal.
    pub fn position(&self, index: u32) -> DotPosition {
        let (column, row) = self.cell(index);
        let pitch = self.pitch() as f64;
        let radius = self.radius();

        DotPosition {
            index,
            column,
            row,
            center_x: self.origin_x as f64 + radius + column as f64 * pitch,
            center_y: self.origin_y as f64 + radius + row as f64 * pitch,
            diameter: self.diameter,
        }
    }

    /// Positions for ordinals `1..=count`.
    pub fn positions(&self, count: u32) -> impl Iterator<Item = DotPosition> + '_ {
        (1..=count).map(move |index| self.position(index))
    }
}

/// Extent of `count` dots of `diameter` separated by `gap`.
fn span(count: u32, diameter: i32, gap: i32) -> i64 {
    let count = count as i64;
    count * diameter as i64 + (count - 1) * gap as i64
}

/// Lay out `count` dots and return the shared diameter with every position.
pub fn layout_grid(spec: &GridSpec, count: u32) -> (i32, Vec<DotPosition>) {
    let layout = GridLayout::new(spec);
    (layout.diameter, layout.positions(count).collect())
}
