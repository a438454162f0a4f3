//! # veridex-verdict
//!
//! Folds per-article stance judgments into the final verdict: a
//! confidence-weighted stance in [-1,1], a mean evidentiary strength in
//! [0,100], and the True/False/Undetermined call.

pub mod aggregator;

pub use aggregator::{AggregateOutcome, EvidenceAggregator};
