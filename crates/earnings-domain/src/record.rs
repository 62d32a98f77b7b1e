use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the record store when an earning is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored earning event. Records are never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub amount: f64,
}

impl EarningRecord {
    pub fn new(id: RecordId, date: NaiveDate, amount: f64) -> Self {
        Self { id, date, amount }
    }
}

/// An earning that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewEarning {
    pub date: NaiveDate,
    pub amount: f64,
}

impl NewEarning {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Attaches the store-assigned id.
    pub fn into_record(self, id: RecordId) -> EarningRecord {
        EarningRecord::new(id, self.date, self.amount)
    }
}
