//! Command line front end: `serve` (default), `add`, `month`, `year`, `version`.

use std::{io::Write, process::ExitCode, sync::Arc};

use earnings_config::{Config, ConfigManager};
use earnings_core::{
    validation, AggregationService, EarningService, RecordStore, SystemClock,
};
use earnings_domain::PeriodCursor;
use earnings_storage_sqlite::SqliteRecordStore;

use crate::{
    errors::AppError,
    server::{self, AppState},
    utils::build_info,
};

pub const USAGE: &str = "\
usage: earnings [command]

commands:
  serve                     run the HTTP server (default)
  add <YYYY-MM-DD> <amount> record an earning
  month <YYYY-MM>           print the monthly summary
  year <YYYY>               print the yearly summary
  version                   print build information";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Serve,
    Add { date: String, amount: String },
    Month(PeriodCursor),
    Year(i32),
    Version,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, AppError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            [] | ["serve"] => Ok(Command::Serve),
            ["add", date, amount] => Ok(Command::Add {
                date: date.to_string(),
                amount: amount.to_string(),
            }),
            ["month", period] => parse_month(period).map(Command::Month),
            ["year", year] => year
                .parse()
                .ok()
                .and_then(|year| PeriodCursor::new(year, 1).ok())
                .map(|cursor| Command::Year(cursor.year()))
                .ok_or_else(|| AppError::Usage(format!("invalid year `{year}`"))),
            ["version"] | ["--version"] => Ok(Command::Version),
            _ => Err(AppError::Usage(USAGE.to_string())),
        }
    }
}

fn parse_month(raw: &str) -> Result<PeriodCursor, AppError> {
    let first_day = format!("{}-01", raw.trim());
    let date = validation::parse_date(&first_day)
        .map_err(|_| AppError::Usage(format!("invalid month `{raw}`, expected YYYY-MM")))?;
    Ok(PeriodCursor::containing(date))
}

/// Entry point used by the `earnings` binary.
pub fn run_cli(args: &[String]) -> ExitCode {
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match execute(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<Config, AppError> {
    let manager = ConfigManager::default_location()?;
    let mut config = manager.load()?;
    config.apply_env();
    Ok(config)
}

fn open_store(config: &Config) -> Result<SqliteRecordStore, AppError> {
    Ok(SqliteRecordStore::open(&config.resolve_database_path())?)
}

fn execute(command: Command) -> Result<(), AppError> {
    if command == Command::Version {
        println!("{}", build_info::current());
        return Ok(());
    }

    let config = load_config()?;
    crate::init(config.log_filter.as_deref());
    let store = open_store(&config)?;
    let mut out = std::io::stdout().lock();

    match command {
        Command::Serve => {
            let state = AppState::new(Arc::new(store), &SystemClock);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::run_server(&config, state))?;
        }
        Command::Add { date, amount } => {
            let id = EarningService::add_raw(&store, Some(&date), Some(&amount))?;
            writeln!(out, "Earning added successfully (id {id})")?;
        }
        Command::Month(cursor) => print_month(&mut out, &store, cursor)?,
        Command::Year(year) => print_year(&mut out, &store, year)?,
        Command::Version => {}
    }
    Ok(())
}

fn print_month(
    out: &mut impl Write,
    store: &dyn RecordStore,
    cursor: PeriodCursor,
) -> Result<(), AppError> {
    let view = AggregationService::aggregate_month(store, cursor)?;
    writeln!(
        out,
        "{} {}: total {:.2}, max {:.2}, average {:.2}",
        view.month_name(),
        view.year(),
        view.total,
        view.max,
        view.average
    )?;
    for entry in view.series.iter().filter(|entry| entry.amount != 0.0) {
        writeln!(out, "  {}  {:>10.2}", entry.date, entry.amount)?;
    }
    Ok(())
}

fn print_year(out: &mut impl Write, store: &dyn RecordStore, year: i32) -> Result<(), AppError> {
    let cursor = PeriodCursor::new(year, 1)
        .map_err(|err| AppError::Usage(err.to_string()))?;
    let (_, view) = AggregationService::aggregate_year(store, cursor, None)?;
    writeln!(
        out,
        "{}: total {:.2}, max {:.2}, min {:.2}, average {:.2}",
        view.year, view.total, view.max, view.min, view.average
    )?;
    for entry in &view.series {
        writeln!(out, "  {:<10} {:>10.2}", entry.name(), entry.amount)?;
    }
    Ok(())
}
