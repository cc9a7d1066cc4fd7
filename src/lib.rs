//! Relevance gatekeeper for retrieval candidates.
//!
//! Sits between a retriever and a downstream consumer (typically a generation step) and
//! decides, per score, whether a candidate is signal worth passing on or background noise.
//! The decision is a pure function of the scores and a few tunables: no I/O, no shared
//! state, safe to call from any number of threads.
//!
//! # Public API Surface
//!
//! - [`gatekeep`] - keep/discard mask for a slice of scores
//! - [`Gatekeeper`] - configured gate with [`evaluate`](Gatekeeper::evaluate) (full trace)
//!   and [`filter`](Gatekeeper::filter) (keeps identifiers attached to scores)
//! - [`GatekeeperConfig`], [`FloorPolicy`], [`ConfigError`] - tunables and env loading
//! - [`find_knee`], [`KneeSplit`] - the underlying L-Method changepoint search
//!
//! # Example
//!
//! ```
//! use gatekeeper::{GatekeeperConfig, gatekeep};
//!
//! let mask = gatekeep(&[0.30, 0.45, 0.20, 0.29], &GatekeeperConfig::default());
//! // Sorted order: 0.45, 0.30, 0.29, 0.20
//! assert_eq!(mask, vec![true, true, false, false]);
//! ```

pub mod config;
pub mod constants;
pub mod gate;
pub mod knee;

pub use config::{ConfigError, FloorPolicy, GatekeeperConfig};
pub use constants::{
    DEFAULT_ABSOLUTE_FLOOR, DEFAULT_MIN_KEEP, DEFAULT_RICHNESS_BIAS, INITIAL_SPLIT, RICHNESS_BAR,
};
pub use gate::{GateError, GateOutcome, GatedCandidate, Gatekeeper, gatekeep};
pub use knee::{KneeSplit, find_knee};
