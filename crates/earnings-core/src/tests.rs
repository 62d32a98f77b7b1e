use chrono::NaiveDate;
use earnings_domain::{DateWindow, NavCommand, PeriodCursor};

use crate::{
    aggregation_service::AggregationService, earning_service::EarningService,
    storage::{MemoryRecordStore, RecordStore},
    CoreError, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cursor(y: i32, m: u32) -> PeriodCursor {
    PeriodCursor::new(y, m).unwrap()
}

#[test]
fn inserted_earning_is_returned_by_covering_query() {
    let store = MemoryRecordStore::new();
    let id = EarningService::add(&store, date(2024, 5, 9), 123.45).expect("add earning");

    let window = DateWindow::new(date(2024, 5, 1), date(2024, 5, 31)).unwrap();
    let records = store.query(window).expect("query");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].amount, 123.45);
}

#[test]
fn query_bounds_are_inclusive_and_sorted() {
    let store = MemoryRecordStore::new();
    EarningService::add(&store, date(2024, 1, 31), 3.0).unwrap();
    EarningService::add(&store, date(2024, 1, 1), 1.0).unwrap();
    EarningService::add(&store, date(2024, 2, 1), 9.0).unwrap();
    EarningService::add(&store, date(2024, 1, 15), 2.0).unwrap();

    let records = store.query(cursor(2024, 1).month_window()).unwrap();
    let amounts: Vec<f64> = records.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
}

#[test]
fn monthly_series_length_matches_calendar_for_every_month() {
    let store = MemoryRecordStore::new();
    let expected_2023 = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (index, days) in expected_2023.iter().enumerate() {
        let view = AggregationService::aggregate_month(&store, cursor(2023, index as u32 + 1))
            .expect("aggregate month");
        assert_eq!(view.day_count(), *days, "month {}", index + 1);
    }
    let leap = AggregationService::aggregate_month(&store, cursor(2024, 2)).unwrap();
    assert_eq!(leap.day_count(), 29);
}

#[test]
fn same_day_records_are_summed() {
    let store = MemoryRecordStore::new();
    EarningService::add(&store, date(2024, 3, 3), 10.0).unwrap();
    EarningService::add(&store, date(2024, 3, 3), 5.0).unwrap();

    let view = AggregationService::aggregate_month(&store, cursor(2024, 3)).unwrap();
    assert_eq!(view.amount_on(3), Some(15.0));
    assert_eq!(view.total, 15.0);
    assert_eq!(view.max, 15.0);
    assert_eq!(view.average, 15.0 / 31.0);
}

#[test]
fn empty_month_is_zero_filled_not_an_error() {
    let store = MemoryRecordStore::new();
    let view = AggregationService::aggregate_month(&store, cursor(2024, 4)).unwrap();
    assert_eq!(view.day_count(), 30);
    assert!(view.series.iter().all(|entry| entry.amount == 0.0));
    assert_eq!(view.average, 0.0);
    assert_eq!(view.max, 0.0);
    assert_eq!(view.total, 0.0);
}

#[test]
fn empty_year_is_reported_as_no_data() {
    let store = MemoryRecordStore::new();
    EarningService::add(&store, date(2023, 6, 1), 10.0).unwrap();

    let err = AggregationService::aggregate_year(&store, cursor(2024, 6), None)
        .expect_err("empty year should fail");
    assert!(matches!(err, CoreError::NoData { year: 2024 }));
    assert_eq!(err.to_string(), "Earning not found");
}

#[test]
fn yearly_series_folds_months_and_reports_min() {
    let store = MemoryRecordStore::new();
    EarningService::add(&store, date(2024, 1, 15), 100.0).unwrap();
    EarningService::add(&store, date(2024, 2, 10), 50.0).unwrap();

    let (moved, view) = AggregationService::aggregate_year(&store, cursor(2024, 8), None).unwrap();
    assert_eq!(moved, cursor(2024, 8));
    assert_eq!(view.year, 2024);
    assert_eq!(view.series.len(), 12);
    assert_eq!(view.amount_in(1), Some(100.0));
    assert_eq!(view.amount_in(2), Some(50.0));
    assert!((3..=12).all(|month| view.amount_in(month) == Some(0.0)));
    assert_eq!(view.max, 100.0);
    assert_eq!(view.min, 0.0);
    assert_eq!(view.average, 12.5);
    assert_eq!(view.series[0].name(), "January");
}

#[test]
fn yearly_command_moves_the_year_before_querying() {
    let store = MemoryRecordStore::new();
    EarningService::add(&store, date(2025, 3, 1), 40.0).unwrap();

    let (moved, view) =
        AggregationService::aggregate_year(&store, cursor(2024, 3), Some(NavCommand::Next)).unwrap();
    assert_eq!(moved, cursor(2025, 3));
    assert_eq!(view.year, 2025);
    assert_eq!(view.amount_in(3), Some(40.0));

    let err = AggregationService::aggregate_year(&store, cursor(2024, 3), Some(NavCommand::Prev))
        .expect_err("2023 has no data");
    assert!(err.is_not_found());
}

#[test]
fn malformed_date_persists_nothing() {
    let store = MemoryRecordStore::new();
    let err = EarningService::add_raw(&store, Some("15-01-2024"), Some("100")).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::InvalidDate(_))
    ));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn non_finite_amount_is_rejected_by_typed_insert() {
    let store = MemoryRecordStore::new();
    let err = EarningService::add(&store, date(2024, 1, 1), f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::InvalidAmount(_))
    ));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn raw_input_round_trips_through_the_store() {
    let store = MemoryRecordStore::new();
    EarningService::add_raw(&store, Some("2024-07-04"), Some("-12.75")).unwrap();
    let view = AggregationService::aggregate_month(&store, cursor(2024, 7)).unwrap();
    assert_eq!(view.amount_on(4), Some(-12.75));
    assert_eq!(view.max, 0.0);
}
