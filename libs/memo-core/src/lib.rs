//! Core spaced-repetition library for ASN Memo.
//!
//! Provides:
//! - The SM-2 variant update rule (ease factor, interval ladder)
//! - The card-state store with due/new selection and statistics
//! - Shared types (CardState, Rating, StudyStats)
//!
//! The library is pure: no I/O, no clocks. Hosts pass `now` in and own
//! persistence.

pub mod scheduler;
pub mod sm2;
pub mod types;

pub use scheduler::Scheduler;
pub use sm2::Sm2;
pub use types::{CardState, Rating, StudyStats};
