//! Keep/discard gating for a batch of retrieval scores.
//!
//! The pipeline runs strictly forward:
//!
//! 1. Sort scores descending. Every index after this refers to sorted order.
//! 2. Locate the knee with [`find_knee`](crate::knee::find_knee).
//! 3. If the top score exceeds [`RICHNESS_BAR`](crate::constants::RICHNESS_BAR) and the
//!    decay from the top score to the knee score is below `richness_bias`, distrust the
//!    knee and split at `min_keep` instead.
//! 4. Read the threshold at the split, then run the absolute-floor check.
//! 5. Keep every sorted score `>=` the threshold.
//!
//! # Floor Check Ordering
//!
//! Under the default [`FloorPolicy::Inert`](crate::config::FloorPolicy::Inert) the
//! threshold is captured *before* the floor check, so a top score below
//! `absolute_floor` is reported in [`GateOutcome::floor_triggered`] but never changes the
//! mask. This matches the historical behavior of the gate. Callers who want the floor to
//! govern the threshold opt into
//! [`FloorPolicy::Enforced`](crate::config::FloorPolicy::Enforced).
//!
//! # Output Order
//!
//! Masks come back in descending-score order, not input order. [`Gatekeeper::filter`]
//! sorts `(item, score)` pairs together so decisions stay attached to their candidates.

pub mod error;
pub mod gatekeeper;
pub mod types;


pub use error::GateError;
pub use gatekeeper::{Gatekeeper, gatekeep, signal_decay, sort_descending};
pub use types::{GateOutcome, GatedCandidate};
