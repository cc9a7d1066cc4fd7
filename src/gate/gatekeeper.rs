use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::config::{FloorPolicy, GatekeeperConfig};
use crate::constants::RICHNESS_BAR;
use crate::knee::find_knee;

use super::error::GateError;
use super::types::{GateOutcome, GatedCandidate};

/// Descending total order over scores. NaN sorts ahead of every number.
#[inline]
fn descending(a: f32, b: f32) -> Ordering {
    b.total_cmp(&a)
}

/// Sorts a copy of `scores` descending. Input order is not retained.
pub fn sort_descending(scores: &[f32]) -> Vec<f32> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| descending(*a, *b));
    sorted
}

/// Fractional drop from `top` to `at_knee`, or `None` when it cannot be computed.
pub fn signal_decay(top: f32, at_knee: f32) -> Option<f32> {
    if top == 0.0 {
        return None;
    }
    let decay = (top - at_knee) / top;
    decay.is_finite().then_some(decay)
}

#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: GatekeeperConfig,
}

impl Gatekeeper {
    pub fn new(config: GatekeeperConfig) -> Self {
        Self { config }
    }

    /// Builds a gatekeeper from `GATEKEEPER_*` environment variables.
    pub fn from_env() -> Result<Self, GateError> {
        let config = GatekeeperConfig::from_env()?;
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GatekeeperConfig {
        &self.config
    }

    /// Keep/discard mask in descending-score order.
    pub fn mask(&self, scores: &[f32]) -> Vec<bool> {
        self.evaluate(scores).mask
    }

    /// Runs the full pipeline and returns every intermediate decision.
    pub fn evaluate(&self, scores: &[f32]) -> GateOutcome {
        let sorted = sort_descending(scores);

        let Some(knee) = find_knee(&sorted) else {
            debug!(batch_len = sorted.len(), "Trivial batch, keeping all");
            return GateOutcome::keep_all(sorted);
        };

        let n = sorted.len();
        let top = sorted[0];
        let mut split = knee.index;

        debug!(
            batch_len = n,
            knee = knee.index,
            knee_error = ?knee.error,
            top_score = top,
            "Knee located"
        );

        let rich = top > RICHNESS_BAR;
        let decay = if rich {
            signal_decay(top, sorted[split])
        } else {
            None
        };

        let strictness_applied = matches!(decay, Some(d) if d < self.config.richness_bias);
        if strictness_applied {
            split = self.elite_split(n);
            debug!(
                signal_decay = ?decay,
                richness_bias = self.config.richness_bias,
                split,
                "Shallow decay in rich batch, keeping elite only"
            );
        }

        let floor_triggered = top < self.config.absolute_floor;
        let threshold = match self.config.floor_policy {
            FloorPolicy::Inert => {
                // Threshold is fixed first; the floor reassignment below never reaches it.
                let threshold = sorted[split];
                if floor_triggered {
                    debug!(
                        top_score = top,
                        absolute_floor = self.config.absolute_floor,
                        "Top score below floor (inert policy, threshold unchanged)"
                    );
                }
                threshold
            }
            FloorPolicy::Enforced => {
                if floor_triggered {
                    split = self.elite_split(n);
                    debug!(
                        top_score = top,
                        absolute_floor = self.config.absolute_floor,
                        split,
                        "Top score below floor, forcing elite split"
                    );
                }
                sorted[split]
            }
        };

        let mask: Vec<bool> = sorted.iter().map(|&s| s >= threshold).collect();

        GateOutcome {
            sorted_scores: sorted,
            knee: Some(knee),
            rich,
            signal_decay: decay,
            strictness_applied,
            floor_triggered,
            split: Some(split),
            threshold: Some(threshold),
            mask,
        }
    }

    /// Gates `(item, score)` pairs, returning every candidate in descending-score order.
    ///
    /// Items travel with their scores through the sort, so each decision stays attached
    /// to the candidate it belongs to. Equal scores keep their input order.
    pub fn filter<T>(&self, candidates: Vec<(T, f32)>) -> Vec<GatedCandidate<T>> {
        let mut candidates = candidates;
        candidates.sort_by(|a, b| descending(a.1, b.1));

        let scores: Vec<f32> = candidates.iter().map(|(_, score)| *score).collect();
        let mask = self.mask(&scores);

        candidates
            .into_iter()
            .zip(mask)
            .map(|((item, score), kept)| GatedCandidate::new(item, score, kept))
            .collect()
    }

    /// Kept items only, highest score first.
    pub fn retain<T>(&self, candidates: Vec<(T, f32)>) -> Vec<T> {
        self.filter(candidates)
            .into_iter()
            .filter(|c| c.kept)
            .map(GatedCandidate::into_item)
            .collect()
    }

    /// Like [`filter`](Self::filter), for identifiers and scores held in parallel arrays.
    pub fn filter_zipped<T>(
        &self,
        ids: Vec<T>,
        scores: &[f32],
    ) -> Result<Vec<GatedCandidate<T>>, GateError> {
        if ids.len() != scores.len() {
            return Err(GateError::LengthMismatch {
                ids: ids.len(),
                scores: scores.len(),
            });
        }

        Ok(self.filter(ids.into_iter().zip(scores.iter().copied()).collect()))
    }

    /// `min_keep` as a split index, clamped to the last position.
    fn elite_split(&self, n: usize) -> usize {
        let last = n - 1;
        if self.config.min_keep > last {
            warn!(
                min_keep = self.config.min_keep,
                batch_len = n,
                "min_keep exceeds batch, clamping to last position"
            );
            return last;
        }
        self.config.min_keep
    }
}

/// Keep/discard mask for `scores`, in descending-score order.
///
/// Batches of two or fewer scores are kept whole. The mask is not realigned to the
/// input order; use [`Gatekeeper::filter`] to keep identifiers attached.
pub fn gatekeep(scores: &[f32], config: &GatekeeperConfig) -> Vec<bool> {
    Gatekeeper::new(*config).mask(scores)
}
