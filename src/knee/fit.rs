//! Ordinary least-squares line fit against rank index.

#[derive(Debug, Clone, Copy, PartialEq)]
/// Best-fit line `y = slope * rank + intercept`.
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    #[inline]
    pub fn predict(&self, rank: f64) -> f64 {
        self.slope * rank + self.intercept
    }
}

/// Fits a line to `values`, where `values[i]` sits at rank `first_rank + i`.
///
/// Returns `None` for fewer than two points.
pub fn fit_line(first_rank: usize, values: &[f32]) -> Option<LineFit> {
    if values.len() < 2 {
        return None;
    }

    let len = values.len() as f64;
    let mean_x = first_rank as f64 + (len - 1.0) / 2.0;
    let mean_y = values.iter().map(|&v| v as f64).sum::<f64>() / len;

    let (sxy, sxx) = values
        .iter()
        .enumerate()
        .fold((0.0f64, 0.0f64), |(sxy, sxx), (i, &v)| {
            let dx = (first_rank + i) as f64 - mean_x;
            (sxy + dx * (v as f64 - mean_y), sxx + dx * dx)
        });

    // Ranks are distinct, so sxx > 0 whenever there are two or more points.
    let slope = sxy / sxx;
    Some(LineFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Population RMSE of `values` around their best-fit line. Zero for a single point.
pub fn segment_rmse(first_rank: usize, values: &[f32]) -> f64 {
    let Some(line) = fit_line(first_rank, values) else {
        return 0.0;
    };

    let sse: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let residual = v as f64 - line.predict((first_rank + i) as f64);
            residual * residual
        })
        .sum();

    (sse / values.len() as f64).sqrt()
}
