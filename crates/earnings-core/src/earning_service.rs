use chrono::NaiveDate;
use earnings_domain::{NewEarning, RecordId};

use crate::{storage::RecordStore, validation, CoreError};

pub struct EarningService;

impl EarningService {
    /// Validates and persists one earning.
    pub fn add(
        store: &dyn RecordStore,
        date: NaiveDate,
        amount: f64,
    ) -> Result<RecordId, CoreError> {
        let earning = NewEarning::new(date, amount);
        validation::validate(&earning)?;
        let id = store.insert(&earning)?;
        tracing::info!(%id, %date, amount, "earning recorded");
        Ok(id)
    }

    /// Parses client-supplied parameters and persists the earning. Nothing is stored on failure.
    pub fn add_raw(
        store: &dyn RecordStore,
        date: Option<&str>,
        amount: Option<&str>,
    ) -> Result<RecordId, CoreError> {
        let earning = validation::parse_earning(date, amount).map_err(|err| {
            tracing::warn!(?date, ?amount, error = %err, "rejected earning input");
            err
        })?;
        Self::add(store, earning.date, earning.amount)
    }
}
