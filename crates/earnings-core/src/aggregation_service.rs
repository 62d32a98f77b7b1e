use chrono::Datelike;
use earnings_domain::{
    DailyAmount, EarningRecord, MonthlyAmount, MonthlyView, NavCommand, PeriodCursor, YearlyView,
};

use crate::{storage::RecordStore, CoreError};

/// Folds stored records into dense, gap-filled series for a month or a year.
pub struct AggregationService;

impl AggregationService {
    /// One entry per day of the cursor month. A month without records is a valid all-zero series.
    pub fn aggregate_month(
        store: &dyn RecordStore,
        cursor: PeriodCursor,
    ) -> Result<MonthlyView, CoreError> {
        let window = cursor.month_window();
        tracing::debug!(start = %window.start, end = %window.end, "aggregating month");
        let records = store.query(window)?;
        Ok(Self::fold_month(cursor, &records))
    }

    /// Applies `command` to the cursor year, then returns the moved cursor and its twelve-month series.
    ///
    /// Unlike the monthly view, a year without any record is reported as [`CoreError::NoData`].
    pub fn aggregate_year(
        store: &dyn RecordStore,
        cursor: PeriodCursor,
        command: Option<NavCommand>,
    ) -> Result<(PeriodCursor, YearlyView), CoreError> {
        let cursor = cursor.shift_year(command);
        let window = cursor.year_window();
        tracing::debug!(start = %window.start, end = %window.end, "aggregating year");
        let records = store.query(window)?;
        if records.is_empty() {
            tracing::warn!(year = cursor.year(), "no earnings recorded for year");
            return Err(CoreError::NoData {
                year: cursor.year(),
            });
        }
        Ok((cursor, Self::fold_year(cursor.year(), &records)))
    }

    /// Builds the daily series from records already restricted to the cursor month.
    pub fn fold_month(cursor: PeriodCursor, records: &[EarningRecord]) -> MonthlyView {
        let window = cursor.month_window();
        let mut series: Vec<DailyAmount> = window
            .days()
            .map(|date| DailyAmount { date, amount: 0.0 })
            .collect();
        for record in records.iter().filter(|record| window.contains(record.date)) {
            let index = (record.date - window.start).num_days() as usize;
            if let Some(entry) = series.get_mut(index) {
                entry.amount += record.amount;
            }
        }

        let values: Vec<f64> = series.iter().map(|entry| entry.amount).collect();
        let stats = SeriesStats::of(&values);
        MonthlyView {
            cursor,
            series,
            total: stats.total,
            max: stats.max,
            average: stats.average,
        }
    }

    /// Builds the twelve-month series from records already restricted to `year`.
    pub fn fold_year(year: i32, records: &[EarningRecord]) -> YearlyView {
        let mut totals = [0.0_f64; 12];
        for record in records {
            if record.date.year() != year {
                continue;
            }
            let index = record.date.month0() as usize;
            totals[index] += record.amount;
        }

        let stats = SeriesStats::of(&totals);
        let series = totals
            .iter()
            .zip(1u32..)
            .map(|(amount, month)| MonthlyAmount {
                month,
                amount: *amount,
            })
            .collect();
        YearlyView {
            year,
            series,
            total: stats.total,
            max: stats.max,
            min: stats.min,
            average: stats.average,
        }
    }
}

/// Total, extremes and mean of a series. All zero for an empty slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub total: f64,
    pub max: f64,
    pub min: f64,
    pub average: f64,
}

impl SeriesStats {
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                total: 0.0,
                max: 0.0,
                min: 0.0,
                average: 0.0,
            };
        }
        let total: f64 = values.iter().sum();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            total,
            max,
            min,
            average: total / values.len() as f64,
        }
    }
}
