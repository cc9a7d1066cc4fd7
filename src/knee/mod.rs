//! L-Method knee detection over a descending score curve.
//!
//! For every candidate split `c` in `1..=n-2`, two lines are fitted against rank:
//!
//! - the signal segment, positions `0..=c` (ranks `1..=c+1`)
//! - the noise segment, positions `c..n` (ranks `c+1..=n`)
//!
//! The segments overlap at `c`. Each segment's population RMSE is weighted by its length
//! and the split with the lowest combined error wins:
//!
//! ```text
//! error(c) = ((c + 1) * rmse_signal + (n - c) * rmse_noise) / n
//! ```
//!
//! Ties go to the earliest split. The search is `O(n²)`: one `O(n)` fit per split.

pub mod fit;


pub use fit::{LineFit, fit_line, segment_rmse};

use serde::Serialize;
use tracing::{trace, warn};

use crate::constants::{INITIAL_SPLIT, LARGE_BATCH_WARN_LEN, TRIVIAL_BATCH_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Split chosen by the knee search.
pub struct KneeSplit {
    /// Index into the sorted batch; the last position of the signal segment.
    pub index: usize,
    /// Weighted fit error at `index`. `None` when no split produced a finite error and
    /// the initial split was kept.
    pub error: Option<f64>,
}

/// Weighted two-segment fit error for split `c` of a sorted batch.
///
/// `c` must satisfy `1 <= c <= sorted.len() - 2`.
pub fn split_error(sorted: &[f32], c: usize) -> f64 {
    let n = sorted.len();
    let signal = segment_rmse(1, &sorted[..=c]);
    let noise = segment_rmse(c + 1, &sorted[c..]);

    ((c + 1) as f64 * signal + (n - c) as f64 * noise) / n as f64
}

/// Finds the knee of a batch already sorted in descending order.
///
/// Returns `None` for batches of two or fewer scores, where no split is computed.
pub fn find_knee(sorted: &[f32]) -> Option<KneeSplit> {
    let n = sorted.len();
    if n <= TRIVIAL_BATCH_LEN {
        return None;
    }

    if n > LARGE_BATCH_WARN_LEN {
        warn!(
            batch_len = n,
            limit = LARGE_BATCH_WARN_LEN,
            "Knee search is quadratic in batch length"
        );
    }

    let mut best = KneeSplit {
        index: INITIAL_SPLIT,
        error: None,
    };
    let mut min_error = f64::INFINITY;

    for c in 1..n - 1 {
        let error = split_error(sorted, c);
        trace!(split = c, error, "Scored candidate split");

        // NaN never compares less, so a NaN error can't displace the current best.
        if error < min_error {
            min_error = error;
            best = KneeSplit {
                index: c,
                error: Some(error),
            };
        }
    }

    Some(best)
}
