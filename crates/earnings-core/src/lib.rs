//! earnings-core
//!
//! Business logic for the earnings tracker: validation, period aggregation and navigation.
//! Depends on earnings-domain. No HTTP, no templates, no concrete storage engine.

pub mod aggregation_service;
pub mod earning_service;
pub mod error;
pub mod navigation;
pub mod storage;
pub mod time;
pub mod validation;

#[cfg(test)]
mod tests;

pub use aggregation_service::*;
pub use earning_service::*;
pub use error::{CoreError, ValidationError};
pub use navigation::*;
pub use storage::{MemoryRecordStore, RecordStore};
pub use time::{Clock, FixedClock, SystemClock};
