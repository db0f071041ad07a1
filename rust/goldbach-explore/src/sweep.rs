//! Parallel sweeps of the core functions over ranges of n.
//!
//! Every call is independent, so the ranges are split with rayon; results are
//! always indexed by n.

use goldbach_core::{symmetric_distances, twin_abundance, TwinAbundance};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Size and extremes of the symmetric distance set of one n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceSummary {
    pub n: u64,
    pub count: usize,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl DistanceSummary {
    pub fn new(n: u64, distances: &[u64]) -> Self {
        DistanceSummary {
            n,
            count: distances.len(),
            min: distances.first().copied(),
            max: distances.last().copied(),
        }
    }
}

/// Symmetric distance sets for every n in `0..limit`.
pub fn distance_sweep(limit: u64, primes: &[u64]) -> Vec<Vec<u64>> {
    (0..limit)
        .into_par_iter()
        .map(|n| symmetric_distances(n, primes))
        .collect()
}

pub fn summarize(distance_sets: &[Vec<u64>]) -> Vec<DistanceSummary> {
    distance_sets
        .iter()
        .enumerate()
        .map(|(n, distances)| DistanceSummary::new(n as u64, distances))
        .collect()
}

/// Every n >= 2 without a decomposition. Goldbach predicts none.
pub fn goldbach_violations(summaries: &[DistanceSummary]) -> Vec<u64> {
    summaries
        .iter()
        .filter(|s| s.n >= 2 && s.count == 0)
        .map(|s| s.n)
        .collect()
}

/// Number of symmetric distances per n when only twin primes may be used.
pub fn twin_distance_counts(limit: u64, twin_primes: &[u64]) -> Vec<usize> {
    (0..limit)
        .into_par_iter()
        .map(|n| symmetric_distances(n, twin_primes).len())
        .collect()
}

/// Twin abundance for each n, where `distance_sets[n]` holds the distances of n.
pub fn abundance_sweep(distance_sets: &[Vec<u64>], twin_primes: &[u64]) -> Vec<Option<TwinAbundance>> {
    distance_sets
        .par_iter()
        .enumerate()
        .map(|(n, distances)| twin_abundance(n as u64, distances, twin_primes))
        .collect()
}
