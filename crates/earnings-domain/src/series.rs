//! Dense aggregated series produced for the monthly and yearly views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::{month_name, PeriodCursor};

/// Summed earnings for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAmount {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Summed earnings for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: u32,
    pub amount: f64,
}

impl MonthlyAmount {
    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// One value per day of the cursor month, plus summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyView {
    pub cursor: PeriodCursor,
    pub series: Vec<DailyAmount>,
    pub total: f64,
    pub max: f64,
    pub average: f64,
}

impl MonthlyView {
    pub fn year(&self) -> i32 {
        self.cursor.year()
    }

    pub fn month_name(&self) -> &'static str {
        self.cursor.month_name()
    }

    pub fn day_count(&self) -> usize {
        self.series.len()
    }

    /// Amount recorded on the given day of the month (1-based).
    pub fn amount_on(&self, day: u32) -> Option<f64> {
        let index = usize::try_from(day).ok()?.checked_sub(1)?;
        self.series.get(index).map(|entry| entry.amount)
    }
}

/// Twelve monthly values for one year, plus summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyView {
    pub year: i32,
    pub series: Vec<MonthlyAmount>,
    pub total: f64,
    pub max: f64,
    pub min: f64,
    pub average: f64,
}

impl YearlyView {
    /// Amount recorded in the given month (1-based).
    pub fn amount_in(&self, month: u32) -> Option<f64> {
        self.series
            .iter()
            .find(|entry| entry.month == month)
            .map(|entry| entry.amount)
    }
}
