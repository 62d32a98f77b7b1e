use chrono::NaiveDate;
use earnings_core::{AggregationService, CoreError, EarningService, RecordStore};
use earnings_domain::{DateWindow, NewEarning, PeriodCursor};
use earnings_storage_sqlite::SqliteRecordStore;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn records_survive_reopening_the_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("earnings.db");

    {
        let store = SqliteRecordStore::open(&path).expect("open store");
        EarningService::add(&store, date(2024, 1, 15), 100.0).expect("add");
        EarningService::add(&store, date(2024, 2, 10), 50.0).expect("add");
    }

    let reopened = SqliteRecordStore::open(&path).expect("reopen store");
    assert_eq!(reopened.count().unwrap(), 2);
    assert_eq!(reopened.path(), Some(path.as_path()));

    let cursor = PeriodCursor::new(2024, 5).unwrap();
    let (_, view) = AggregationService::aggregate_year(&reopened, cursor, None).expect("year");
    assert_eq!(view.amount_in(1), Some(100.0));
    assert_eq!(view.amount_in(2), Some(50.0));
    assert_eq!(view.min, 0.0);
    assert_eq!(view.average, 12.5);
}

#[test]
fn query_is_inclusive_and_ordered_by_date() {
    let store = SqliteRecordStore::open_in_memory().expect("open");
    for (d, amount) in [(31, 3.0), (1, 1.0), (15, 2.0)] {
        store.insert(&NewEarning::new(date(2023, 12, d), amount)).unwrap();
    }
    store.insert(&NewEarning::new(date(2024, 1, 1), 99.0)).unwrap();

    let window = DateWindow::new(date(2023, 12, 1), date(2023, 12, 31)).unwrap();
    let records = store.query(window).expect("query");
    let amounts: Vec<f64> = records.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
}

#[test]
fn empty_range_is_not_an_error() {
    let store = SqliteRecordStore::open_in_memory().expect("open");
    let window = DateWindow::new(date(2020, 1, 1), date(2020, 12, 31)).unwrap();
    assert!(store.query(window).expect("query").is_empty());
}

#[test]
fn exact_amounts_round_trip() {
    let store = SqliteRecordStore::open_in_memory().expect("open");
    let id = EarningService::add(&store, date(2024, 3, 3), 0.1 + 0.2).unwrap();

    let window = DateWindow::new(date(2024, 3, 3), date(2024, 3, 3)).unwrap();
    let records = store.query(window).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].amount, 0.1 + 0.2);
}

#[test]
fn rejected_input_leaves_table_untouched() {
    let store = SqliteRecordStore::open_in_memory().expect("open");
    let err = EarningService::add_raw(&store, Some("15-01-2024"), Some("10")).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));

    let err = store
        .insert(&NewEarning::new(date(2024, 1, 15), f64::INFINITY))
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn same_day_entries_sum_in_monthly_view() {
    let store = SqliteRecordStore::open_in_memory().expect("open");
    EarningService::add(&store, date(2024, 3, 3), 10.0).unwrap();
    EarningService::add(&store, date(2024, 3, 3), 5.0).unwrap();

    let view =
        AggregationService::aggregate_month(&store, PeriodCursor::new(2024, 3).unwrap()).unwrap();
    assert_eq!(view.day_count(), 31);
    assert_eq!(view.amount_on(3), Some(15.0));
}
