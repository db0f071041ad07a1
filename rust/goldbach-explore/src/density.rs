//! Density comparisons between π and its Gauss approximation.

use serde::{Deserialize, Serialize};

use crate::error::ExploreError;

/// Least-squares line `y = slope * x + intercept` fitted against the index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

fn require_len(name: &'static str, len: usize, range_limit: u64) -> Result<(), ExploreError> {
    let required = range_limit.saturating_mul(2);
    if (len as u64) < required {
        return Err(ExploreError::ArrayTooShort { name, len, required });
    }
    Ok(())
}

/// π(2i) / π(i) for `i` in `0..range_limit`; `None` where π(i) = 0.
pub fn pi_ratio(range_limit: u64, pi: &[u64]) -> Result<Vec<Option<f64>>, ExploreError> {
    require_len("pi_n", pi.len(), range_limit)?;
    Ok((0..range_limit as usize)
        .map(|i| (pi[i] > 0).then(|| pi[2 * i] as f64 / pi[i] as f64))
        .collect())
}

/// gauss(2i) - gauss(i), the approximated number of primes in `[i, 2i)`.
pub fn gauss_range_estimate(range_limit: u64, gauss: &[f64]) -> Result<Vec<f64>, ExploreError> {
    require_len("gauss_pi_n", gauss.len(), range_limit)?;
    Ok((0..range_limit as usize)
        .map(|i| gauss[2 * i] - gauss[i])
        .collect())
}

/// gauss(2i) / gauss(i); `None` where gauss(i) = 0.
pub fn gauss_ratio(range_limit: u64, gauss: &[f64]) -> Result<Vec<Option<f64>>, ExploreError> {
    require_len("gauss_pi_n", gauss.len(), range_limit)?;
    Ok((0..range_limit as usize)
        .map(|i| (gauss[i] != 0.0).then(|| gauss[2 * i] / gauss[i]))
        .collect())
}

/// Fit `ys` against `0, 1, 2, ...`. Needs at least two points.
pub fn linear_fit(ys: &[f64]) -> Option<LinearFit> {
    if ys.len() < 2 {
        return None;
    }
    let n = ys.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut sxx, mut sxy) = (0.0, 0.0);
    for (i, &y) in ys.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = ys
        .iter()
        .enumerate()
        .map(|(i, y)| (y - (slope * i as f64 + intercept)).powi(2))
        .sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
