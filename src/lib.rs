#![doc(test(attr(deny(warnings))))]

//! Earnings Tracker records dated earnings and serves monthly and yearly chart
//! views of them over HTTP.

pub mod cli;
pub mod errors;
pub mod presentation;
pub mod server;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with an optional extra filter directive and emits a startup log.
pub fn init(extra_filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(extra_filter);
        tracing::info!("Earnings tracker tracing initialized.");
    });
}
