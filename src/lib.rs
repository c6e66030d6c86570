#![doc(test(attr(deny(warnings))))]

//! FinTrack Core offers the domain models, portfolio analytics, and debt
//! repayment planning primitives that power the FinTrack personal finance
//! dashboard.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod planner;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinTrack Core tracing initialized.");
    });
}
