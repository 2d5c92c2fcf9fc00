#![doc(test(attr(deny(warnings))))]

//! Budget Engine expands recurring transactions into concrete occurrence dates and
//! aggregates them into windowed balances, goal feasibility scores, and ordered views
//! for a personal budgeting app.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod time;
pub mod utils;

pub use errors::{EngineError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the build the engine was compiled from.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git = build.git_hash,
            profile = build.profile,
            "budget engine tracing initialized"
        );
    });
}
