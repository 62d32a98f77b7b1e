//! Calendar periods: inclusive date windows and the month cursor driven by navigation.

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Earliest year a cursor may point at.
pub const MIN_YEAR: i32 = 1;
/// Latest year a cursor may point at. Dates are persisted as `YYYY-MM-DD`,
/// so years stay within four digits to keep text ordering chronological.
pub const MAX_YEAR: i32 = 9999;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end < start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every date in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn day_count(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must not precede start"),
        }
    }
}

impl std::error::Error for DateWindowError {}

/// Navigation request sent by the client alongside a view request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavCommand {
    Next,
    Prev,
}

impl NavCommand {
    /// Parses the query-string form. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "next" => Some(NavCommand::Next),
            "prev" => Some(NavCommand::Prev),
            _ => None,
        }
    }

    fn step(self) -> i32 {
        match self {
            NavCommand::Next => 1,
            NavCommand::Prev => -1,
        }
    }
}

impl fmt::Display for NavCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NavCommand::Next => "next",
            NavCommand::Prev => "prev",
        };
        f.write_str(label)
    }
}

/// The month currently displayed. Always normalized to the first day, `month` in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CursorParts", into = "CursorParts")]
pub struct PeriodCursor {
    year: i32,
    month: u32,
}

/// Unvalidated `{year, month}` form of a cursor, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorParts {
    pub year: i32,
    pub month: u32,
}

impl PeriodCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CursorError> {
        if !(1..=12).contains(&month) {
            return Err(CursorError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CursorError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Cursor for the month containing `date`, clamped to the supported year range.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(MIN_YEAR, MAX_YEAR),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("cursor holds a valid month")
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day_count())
            .expect("cursor holds a valid month")
    }

    pub fn day_count(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// First to last day of the cursor month.
    pub fn month_window(&self) -> DateWindow {
        DateWindow {
            start: self.first_day(),
            end: self.last_day(),
        }
    }

    /// January 1st to December 31st of the cursor year.
    pub fn year_window(&self) -> DateWindow {
        DateWindow {
            start: NaiveDate::from_ymd_opt(self.year, 1, 1).expect("year within range"),
            end: NaiveDate::from_ymd_opt(self.year, 12, 31).expect("year within range"),
        }
    }

    /// Moves the cursor by one calendar month per the command, rolling the year over.
    pub fn advance(self, command: Option<NavCommand>) -> Self {
        match command {
            Some(command) => self.shift_months(command.step()),
            None => self,
        }
    }

    /// Moves the cursor by one year per the command, keeping the month.
    pub fn shift_year(self, command: Option<NavCommand>) -> Self {
        match command {
            Some(command) => {
                let year = self.year + command.step();
                Self::new(year, self.month).unwrap_or(self)
            }
            None => self,
        }
    }

    /// Moves the cursor by `months` (may be negative). Stays put at the edges of the supported range.
    pub fn shift_months(self, months: i32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        i32::try_from(year)
            .ok()
            .and_then(|year| Self::new(year, month).ok())
            .unwrap_or(self)
    }
}

impl fmt::Display for PeriodCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<CursorParts> for PeriodCursor {
    type Error = CursorError;

    fn try_from(parts: CursorParts) -> Result<Self, Self::Error> {
        PeriodCursor::new(parts.year, parts.month)
    }
}

impl From<PeriodCursor> for CursorParts {
    fn from(cursor: PeriodCursor) -> Self {
        CursorParts {
            year: cursor.year,
            month: cursor.month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised when building a [`PeriodCursor`] from raw parts.
pub enum CursorError {
    InvalidMonth(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::InvalidMonth(month) => write!(f, "month {month} is outside 1..=12"),
            CursorError::YearOutOfRange(year) => {
                write!(f, "year {year} is outside {MIN_YEAR}..={MAX_YEAR}")
            }
        }
    }
}

impl std::error::Error for CursorError {}

/// Number of days (28-31) in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// English month name, `""` for values outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .map(|month| month.name())
        .unwrap_or("")
}
