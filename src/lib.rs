#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the schedule, reconciliation, and aggregation
//! primitives behind a household cash-movement tracker: recurring bills are
//! split into equal monthly installments, recorded transactions are matched
//! back against them, and daily/monthly net movement is folded on demand.

pub mod calendar;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod report;
pub mod state;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
