//! End-to-end exploration run: sieve (or cache), artifacts, sweeps, report.

use goldbach_core::{
    count_nto2n, gauss_pi, goldbach_pairs, sieve, twin_primes, CountingArray, PrimeArtifacts,
    PrimeError, PrimeList, TwinAbundance,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ExploreConfig;
use crate::density::{gauss_range_estimate, gauss_ratio, linear_fit, pi_ratio, LinearFit};
use crate::error::ExploreError;
use crate::io::{load_primes, primes_path, save_primes};
use crate::sweep::{
    abundance_sweep, distance_sweep, goldbach_violations, summarize, twin_distance_counts,
    DistanceSummary,
};

/// Everything an exploration run produces, indexed by n where it is a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationReport {
    pub config: ExploreConfig,
    pub prime_count: usize,
    pub twin_count: usize,
    pub largest_prime: Option<u64>,
    /// π over `0..limit`.
    pub pi_n: CountingArray,
    /// n / ln(n) over `0..limit`; the longer array is only used for the ratios.
    pub gauss_pi_n: Vec<f64>,
    pub range_counts: Vec<u64>,
    pub range_fit: Option<LinearFit>,
    pub pi_ratio: Vec<Option<f64>>,
    pub gauss_range_estimate: Vec<f64>,
    pub gauss_ratio: Vec<Option<f64>>,
    pub distance_summaries: Vec<DistanceSummary>,
    pub goldbach_violations: Vec<u64>,
    /// Prime pairs summing to 2n for the last n of the distance sweep, most balanced first.
    pub last_pairs: Vec<(u64, u64)>,
    pub twin_distance_counts: Vec<usize>,
    pub twin_abundance: Vec<Option<TwinAbundance>>,
    pub elapsed_secs: f64,
}

/// Primes below `config.limit`, taken from the output directory cache when a
/// previous run left one, otherwise sieved (resuming from `prefix_path`) and cached.
pub fn prepare_primes(config: &ExploreConfig) -> Result<PrimeList, ExploreError> {
    let cache = primes_path(&config.output_dir, config.limit);
    if cache.exists() {
        let primes = load_primes(&cache)?;
        check_coverage(&primes, config.limit).map_err(|reason| {
            ExploreError::Config(format!("stale prime cache {}: {reason}", cache.display()))
        })?;
        return Ok(primes);
    }

    let prefix = match &config.prefix_path {
        Some(path) => Some(load_primes(path)?),
        None => None,
    };
    let start = Instant::now();
    let primes = sieve(config.limit, prefix.as_deref())?;
    log::info!(
        "sieved {} primes below {} in {:.2?}",
        primes.len(),
        config.limit,
        start.elapsed()
    );
    save_primes(&primes, &cache)?;
    Ok(primes)
}

/// Reject a list that cannot be the complete primes below `limit`.
///
/// The largest entry must lie below `limit` and, for `limit >= 4`, at or above
/// `limit / 2`, since Bertrand's postulate puts a prime in `(limit / 2, limit)`.
fn check_coverage(primes: &[u64], limit: u64) -> Result<(), String> {
    let covers = match primes.last() {
        None => limit <= 2,
        Some(&last) if last >= limit => false,
        Some(&last) => limit < 4 || last >= limit / 2,
    };
    if covers {
        Ok(())
    } else {
        Err(format!(
            "{} primes ending at {:?} are not the primes below {limit}",
            primes.len(),
            primes.last()
        ))
    }
}

/// Run every sweep of `config` over `primes`, which must hold the primes below `config.limit`.
pub fn run_exploration(
    config: &ExploreConfig,
    primes: PrimeList,
) -> Result<ExplorationReport, ExploreError> {
    config.validate()?;
    check_coverage(&primes, config.limit).map_err(ExploreError::Config)?;
    let start = Instant::now();
    let range_limit = config.range_limit();

    let twins = twin_primes(&primes);
    let mut artifacts = PrimeArtifacts::from_primes(primes);
    artifacts.pi_n = Some(artifacts.counting_array(config.limit)?);
    artifacts.gauss_pi_n = Some(gauss_pi(config.gauss_limit())?);
    log::info!("prime artifacts ready after {:.2?}", start.elapsed());

    let range_counts = count_nto2n(range_limit, artifacts.range_source()?)?;
    let fit_input: Vec<f64> = range_counts.iter().map(|&c| c as f64).collect();
    let range_fit = linear_fit(&fit_input);

    let PrimeArtifacts {
        primes: Some(primes),
        pi_n: Some(pi),
        gauss_pi_n: Some(gauss),
    } = artifacts
    else {
        return Err(PrimeError::MissingPrimeSource.into());
    };

    let pi_ratio = pi_ratio(range_limit, &pi)?;
    let gauss_range_estimate = gauss_range_estimate(range_limit, &gauss)?;
    let gauss_ratio = gauss_ratio(range_limit, &gauss)?;
    log::info!("range counts for n < {range_limit} after {:.2?}", start.elapsed());

    let distance_sets = distance_sweep(config.distance_sweep_len(), &primes);
    let summaries = summarize(&distance_sets[..config.distance_limit as usize]);
    let violations = goldbach_violations(&summaries);
    if !violations.is_empty() {
        log::warn!("{} n without a Goldbach decomposition", violations.len());
    }
    let last_pairs = match config.distance_limit.checked_sub(1) {
        Some(n) => goldbach_pairs(n, &distance_sets[n as usize]),
        None => Vec::new(),
    };
    log::info!("distance sweep over n < {} after {:.2?}", config.distance_sweep_len(), start.elapsed());

    let twin_distance_counts = twin_distance_counts(config.twin_distance_limit, &twins);
    let twin_abundance =
        abundance_sweep(&distance_sets[..config.abundance_limit as usize], &twins);
    log::info!("twin sweeps done after {:.2?}", start.elapsed());

    Ok(ExplorationReport {
        config: config.clone(),
        prime_count: primes.len(),
        twin_count: twins.len(),
        largest_prime: primes.last().copied(),
        gauss_pi_n: gauss.iter().take(config.limit as usize).copied().collect(),
        pi_n: pi,
        range_counts,
        range_fit,
        pi_ratio,
        gauss_range_estimate,
        gauss_ratio,
        distance_summaries: summaries,
        goldbach_violations: violations,
        last_pairs,
        twin_distance_counts,
        twin_abundance,
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}

/// Sample points of the sweeps: 10, 100, 1000, ... below each limit.
fn sample_points(limit: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(10usize), |n| n.checked_mul(10)).take_while(move |&n| n < limit)
}

pub fn print_summary(report: &ExplorationReport) {
    let config = &report.config;
    println!("\n=== Goldbach exploration, limit = {} ===", config.limit);
    println!(
        "primes: {}  twin primes: {}  largest prime: {}",
        report.prime_count,
        report.twin_count,
        report
            .largest_prime
            .map_or_else(|| "-".to_string(), |p| p.to_string())
    );

    println!("\nPrimes in [n, 2n) for n < {}", config.range_limit());
    println!("{:>10} {:>10} {:>12} {:>12} {:>12}", "n", "count", "gauss est", "pi ratio", "gauss ratio");
    println!("{}", "-".repeat(60));
    for n in sample_points(report.range_counts.len()) {
        println!(
            "{:>10} {:>10} {:>12.1} {:>12} {:>12}",
            n,
            report.range_counts[n],
            report.gauss_range_estimate[n],
            fmt_ratio(report.pi_ratio[n]),
            fmt_ratio(report.gauss_ratio[n]),
        );
    }
    if let Some(fit) = report.range_fit {
        println!(
            "linear fit: count ≈ {:.6}·n + {:.3}  (R² = {:.4})",
            fit.slope, fit.intercept, fit.r_squared
        );
    }

    println!("\nSymmetric distances for n < {}", config.distance_limit);
    println!("{:>10} {:>10} {:>10} {:>10} {:>10} {:>10}", "n", "count", "min d", "max d", "twin cnt", "twin frac");
    println!("{}", "-".repeat(66));
    for n in sample_points(report.distance_summaries.len()) {
        let s = &report.distance_summaries[n];
        let twin_count = report.twin_distance_counts.get(n).copied();
        let abundance = report.twin_abundance.get(n).copied().flatten();
        println!(
            "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            n,
            s.count,
            fmt_opt(s.min),
            fmt_opt(s.max),
            twin_count.map_or_else(|| "-".to_string(), |c| c.to_string()),
            abundance.map_or_else(|| "-".to_string(), |a| format!("{:.4}", a.fraction)),
        );
    }
    if report.goldbach_violations.is_empty() {
        println!("every 2n with 2 <= n < {} is a sum of two primes", config.distance_limit);
    } else {
        println!("no decomposition for n = {:?}", report.goldbach_violations);
    }
    if let Some(&(p, q)) = report.last_pairs.first() {
        println!(
            "{} pairs for 2n = {}, the most balanced being {p} + {q}",
            report.last_pairs.len(),
            p + q
        );
    }
    println!("\nelapsed: {:.2}s", report.elapsed_secs);
}

fn fmt_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |r| format!("{r:.4}"))
}

fn fmt_opt(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
