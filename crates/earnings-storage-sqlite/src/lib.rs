//! SQLite-backed [`RecordStore`]: one local file holding the `earnings` table.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use chrono::NaiveDate;
use earnings_core::{validation, CoreError, RecordStore};
use earnings_domain::{DateWindow, EarningRecord, NewEarning, RecordId};
use rusqlite::{params, Connection};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS earnings (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    date   TEXT    NOT NULL,
    amount REAL    NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_earnings_date ON earnings (date);
";

/// Earnings persisted in a single SQLite database file.
///
/// Dates are stored as `YYYY-MM-DD` text so range filters compare chronologically.
#[derive(Debug)]
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteRecordStore {
    /// Opens (or creates) the database at `path`, creating parent directories and the schema.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                CoreError::Storage(format!("cannot create {}: {err}", parent.display()))
            })?;
        }
        let conn = Connection::open(path).map_err(storage_error)?;
        let store = Self::with_connection(conn, Some(path.to_path_buf()))?;
        tracing::info!(path = %path.display(), "opened earnings database");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(storage_error)?;
        Self::with_connection(conn, None)
    }

    fn with_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self, CoreError> {
        conn.execute_batch(SCHEMA_SQL).map_err(storage_error)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, CoreError> {
        self.conn
            .lock()
            .map_err(|_| CoreError::Storage("database mutex poisoned".into()))
    }
}

impl RecordStore for SqliteRecordStore {
    fn insert(&self, earning: &NewEarning) -> Result<RecordId, CoreError> {
        validation::validate(earning)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO earnings (date, amount) VALUES (?1, ?2)",
            params![earning.date.format(DATE_FORMAT).to_string(), earning.amount],
        )
        .map_err(storage_error)?;
        Ok(RecordId(conn.last_insert_rowid()))
    }

    fn query(&self, window: DateWindow) -> Result<Vec<EarningRecord>, CoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, date, amount FROM earnings
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, id ASC",
            )
            .map_err(storage_error)?;
        let rows = stmt
            .query_map(
                params![
                    window.start.format(DATE_FORMAT).to_string(),
                    window.end.format(DATE_FORMAT).to_string()
                ],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, f64>(2)?,
                    ))
                },
            )
            .map_err(storage_error)?;

        let mut records = Vec::new();
        for row in rows {
            let (id, date, amount) = row.map_err(storage_error)?;
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|err| {
                CoreError::Storage(format!("record {id} has malformed date `{date}`: {err}"))
            })?;
            records.push(EarningRecord::new(RecordId(id), date, amount));
        }
        Ok(records)
    }

    fn count(&self) -> Result<usize, CoreError> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM earnings", [], |row| row.get(0))
            .map_err(storage_error)?;
        Ok(count as usize)
    }
}

fn storage_error(err: rusqlite::Error) -> CoreError {
    tracing::error!(error = %err, "sqlite operation failed");
    CoreError::Storage(err.to_string())
}
