use std::sync::Mutex;

use earnings_domain::{DateWindow, EarningRecord, NewEarning, RecordId};

use crate::{validation, CoreError};

/// Abstraction over persistence backends holding earning records.
///
/// Records are append-only: there is no update or delete.
pub trait RecordStore: Send + Sync {
    /// Appends a record and returns its newly assigned id.
    fn insert(&self, earning: &NewEarning) -> Result<RecordId, CoreError>;

    /// Records with `window.start <= date <= window.end`, oldest first.
    fn query(&self, window: DateWindow) -> Result<Vec<EarningRecord>, CoreError>;

    /// Number of stored records.
    fn count(&self) -> Result<usize, CoreError>;
}

/// Volatile store used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<EarningRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<EarningRecord>>, CoreError> {
        self.records
            .lock()
            .map_err(|_| CoreError::Storage("record store lock poisoned".into()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn insert(&self, earning: &NewEarning) -> Result<RecordId, CoreError> {
        validation::validate(earning)?;
        let mut records = self.lock()?;
        let id = RecordId(records.len() as i64 + 1);
        records.push(earning.into_record(id));
        Ok(id)
    }

    fn query(&self, window: DateWindow) -> Result<Vec<EarningRecord>, CoreError> {
        let records = self.lock()?;
        let mut matched: Vec<EarningRecord> = records
            .iter()
            .filter(|record| window.contains(record.date))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(matched)
    }

    fn count(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }
}
