//! # Year Progress
//!
//! Maps a point in time to its position within the calendar year.
//!
//! Everything here works on calendar days: an instant is first converted to a
//! date in its own time zone, and only then turned into a day-of-year ordinal.
//! Elapsed wall-clock time is never divided by 24 hours, so there is no drift
//! around midnight or daylight-saving transitions.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dotcal::progress::{CalendarDate, YearProgress};
//!
//! let date = CalendarDate::from(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! let progress = YearProgress::for_date(date);
//!
//! assert_eq!(progress.day_of_year, 75);
//! assert_eq!(progress.total_days, 366);
//! assert_eq!(progress.days_left, 291);
//! assert_eq!(progress.percentage, 20);
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A Gregorian calendar date.
///
/// Months are exposed zero-based (`0` = January) because the month mosaic
/// indexes its blocks that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a zero-based month index. Returns `None` for dates
    /// that do not exist (e.g. February 30th).
    pub fn from_ymd(year: i32, month_index: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month_index + 1, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January .. 11 = December).
    pub fn month_index(&self) -> u32 {
        self.0.month0()
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// 1-based day of the year (January 1st = 1).
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Number of days in a Gregorian year: 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// How far through its year a date is.
///
/// Invariant: `day_of_year + days_left == total_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearProgress {
    /// 1-based ordinal of the date within its year.
    pub day_of_year: u32,
    /// 365 or 366.
    pub total_days: u32,
    /// Days remaining after the date itself.
    pub days_left: u32,
    /// `round(100 * day_of_year / total_days)`, halves rounded up.
    pub percentage: u32,
}

impl YearProgress {
    pub fn for_date(date: CalendarDate) -> Self {
        let day_of_year = date.ordinal();
        let total_days = days_in_year(date.year());
        // Integer form of round-half-up on 100 * doy / total.
        let percentage = (200 * day_of_year + total_days) / (2 * total_days);

        Self {
            day_of_year,
            total_days,
            days_left: total_days - day_of_year,
            percentage,
        }
    }
}

/// Progress for an instant, using the calendar date in the instant's own
/// time zone.
pub fn compute_progress<Tz: TimeZone>(now: &DateTime<Tz>) -> YearProgress {
    YearProgress::for_date(CalendarDate::from(now.date_naive()))
}

/// Whether a day lies before, on, or after the render date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Past,
    Today,
    Future,
}

impl DayState {
    pub fn classify(date: CalendarDate, today: CalendarDate) -> Self {
        Self::from_ordering(date.cmp(&today))
    }

    /// Classify by day-of-year ordinal within the same year.
    pub fn for_ordinal(ordinal: u32, today_ordinal: u32) -> Self {
        Self::from_ordering(ordinal.cmp(&today_ordinal))
    }

    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => DayState::Past,
            Ordering::Equal => DayState::Today,
            Ordering::Greater => DayState::Future,
        }
    }
}

/// Source of the render-time date.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// The host's local time zone.
    #[default]
    Local,
    /// Current UTC time shifted by a fixed offset.
    Offset(FixedOffset),
    /// Always the same date. Used for reproducible renders.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> CalendarDate {
        let date = match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Offset(offset) => Utc::now().with_timezone(offset).date_naive(),
            Clock::Fixed(date) => *date,
        };
        CalendarDate::from(date)
    }
}
