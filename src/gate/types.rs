use serde::Serialize;

use crate::knee::KneeSplit;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Full trace of one gatekeeping decision.
///
/// Every per-position field is in descending-score order, not the caller's input order.
pub struct GateOutcome {
    /// Input scores sorted descending.
    pub sorted_scores: Vec<f32>,
    /// Knee search result (`None` for trivial batches).
    pub knee: Option<KneeSplit>,
    /// Top score exceeded the richness bar.
    pub rich: bool,
    /// Fractional drop from the top score to the knee score (rich batches only).
    pub signal_decay: Option<f32>,
    /// The knee was distrusted and replaced by the elite split.
    pub strictness_applied: bool,
    /// Top score was below the absolute floor.
    pub floor_triggered: bool,
    /// Index the threshold was read from.
    pub split: Option<usize>,
    /// Scores `>=` this value are kept (`None` for trivial batches).
    pub threshold: Option<f32>,
    /// Keep/discard per sorted position.
    pub mask: Vec<bool>,
}

impl GateOutcome {
    /// Outcome for batches too short to split: everything is kept.
    pub fn keep_all(sorted_scores: Vec<f32>) -> Self {
        let mask = vec![true; sorted_scores.len()];
        Self {
            sorted_scores,
            knee: None,
            rich: false,
            signal_decay: None,
            strictness_applied: false,
            floor_triggered: false,
            split: None,
            threshold: None,
            mask,
        }
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Returns `true` if no split was computed.
    pub fn is_trivial(&self) -> bool {
        self.threshold.is_none()
    }

    pub fn kept_count(&self) -> usize {
        self.mask.iter().filter(|&&kept| kept).count()
    }

    /// Kept scores, highest first.
    pub fn kept_scores(&self) -> Vec<f32> {
        self.sorted_scores
            .iter()
            .zip(&self.mask)
            .filter_map(|(&score, &kept)| kept.then_some(score))
            .collect()
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        if self.is_trivial() {
            "KEEP_ALL"
        } else if self.strictness_applied {
            "STRICT"
        } else {
            "KNEE"
        }
    }
}

impl std::fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.threshold {
            Some(threshold) => write!(
                f,
                "{} {}/{} (threshold: {:.4})",
                self.debug_status(),
                self.kept_count(),
                self.len(),
                threshold
            ),
            None => write!(f, "{} {}/{}", self.debug_status(), self.len(), self.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Caller-supplied item paired with its score and the keep decision.
pub struct GatedCandidate<T> {
    pub item: T,
    pub score: f32,
    pub kept: bool,
}

impl<T> GatedCandidate<T> {
    pub fn new(item: T, score: f32, kept: bool) -> Self {
        Self { item, score, kept }
    }

    pub fn into_item(self) -> T {
        self.item
    }
}
