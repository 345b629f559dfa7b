//! Reconciliation and classification logic for the attendance engine.
//!
//! This module contains the status classifier that maps one record and the
//! holiday calendar to an attendance status, the clock formatter that
//! renders fractional hours as `H:MM` strings, the calendar reconciler
//! that fills every missing day with a placeholder record, and the summary
//! aggregator that folds a classified record sequence into named metrics.

mod classify;
mod clock;
mod reconcile;
mod summary;

pub use classify::{OUT_OF_OFFICE_REASON, classify};
pub use clock::format_clock;
pub use reconcile::reconcile;
pub use summary::summarize;
