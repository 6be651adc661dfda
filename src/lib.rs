#![doc(test(attr(deny(warnings))))]

//! NextStep Core turns a career category, a student-debt balance and a
//! lifestyle preference into take-home pay, a thriving score, monthly savings
//! and a five-year wealth projection for every city, plus a resume keyword
//! gap analysis.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod resume;
pub mod utils;

pub use crate::core::Engine;
pub use errors::{NextStepError, NextStepResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("NextStep tracing initialized.");
    });
}
