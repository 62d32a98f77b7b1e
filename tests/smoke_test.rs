mod common;

use chrono::NaiveDate;
use earnings_core::{AggregationService, EarningService, NavigationState};
use earnings_domain::{NavCommand, PeriodCursor};
use earnings_storage_sqlite::SqliteRecordStore;
use earnings_tracker::presentation::{monthly_chart, render_chart, yearly_chart, ChartType};

#[test]
fn store_aggregate_and_render_flow() {
    earnings_tracker::init(None);
    let base = common::scratch_dir();
    let store = SqliteRecordStore::open(&base.join("earnings.db")).expect("open store");

    EarningService::add_raw(&store, Some("2024-12-31"), Some("20")).expect("add");
    EarningService::add_raw(&store, Some("2025-01-01"), Some("30")).expect("add");

    let navigation = NavigationState::new(PeriodCursor::new(2024, 12).unwrap());
    let december = AggregationService::aggregate_month(&store, navigation.current().unwrap())
        .expect("december");
    assert_eq!(december.amount_on(31), Some(20.0));

    let cursor = navigation.advance(Some(NavCommand::Next)).unwrap();
    let january = AggregationService::aggregate_month(&store, cursor).expect("january");
    assert_eq!(january.amount_on(1), Some(30.0));
    assert_eq!(january.total, 30.0);

    let chart = monthly_chart(&january);
    assert_eq!(chart.chart_type, ChartType::Line);
    let html = render_chart(&chart).expect("render monthly");
    assert!(html.contains("January 2025"));

    let (_, year) = AggregationService::aggregate_year(&store, cursor, Some(NavCommand::Prev))
        .expect("2024 has one record");
    let chart = yearly_chart(&year);
    assert_eq!(chart.values[11], 20.0);
    assert_eq!(chart.summary.min, Some(0.0));
    assert!(render_chart(&chart).expect("render yearly").contains("Yearly Earnings"));

    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    EarningService::add(&store, date, 1.5).expect("typed add");
    let (_, year) =
        AggregationService::aggregate_year(&store, PeriodCursor::new(2024, 1).unwrap(), None)
            .expect("2024");
    assert_eq!(year.total, 21.5);
}
