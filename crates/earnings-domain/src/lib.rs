//! earnings-domain
//!
//! Pure domain models (earning records, date windows, period cursor, aggregated views).
//! No I/O, no HTTP, no storage. Only data types and calendar helpers.

pub mod period;
pub mod record;
pub mod series;

pub use period::*;
pub use record::*;
pub use series::*;
