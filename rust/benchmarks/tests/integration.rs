//! Cross-crate checks: core artifacts against the exploration driver and
//! against random n drawn at larger bounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use goldbach_core::{
    count_nto2n, goldbach_pairs, pi_of_n, primes_in_nto2n, sieve, symmetric_distances,
    twin_abundance, twin_primes, PrimeArtifacts, PrimeError, PrimeList, PrimeSource,
};
use goldbach_explore::io::report_path;
use goldbach_explore::{
    abundance_sweep, distance_sweep, prepare_primes, run_exploration, summarize, ExploreConfig,
};

/// Primality by trial division over an already sieved list.
fn is_prime_by(primes: &[u64], n: u64) -> bool {
    n >= 2
        && primes
            .iter()
            .take_while(|&&p| p * p <= n)
            .all(|&p| n % p != 0)
}

fn primes_below(bound: u64) -> PrimeList {
    sieve(bound, None).unwrap()
}

#[test]
fn test_random_n_decompose() {
    let primes = primes_below(2_000_000);
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..50 {
        let n = rng.gen_range(2..1_000_000u64);
        let distances = symmetric_distances(n, &primes);
        assert!(!distances.is_empty(), "no decomposition for 2n = {}", 2 * n);
        for (p, q) in goldbach_pairs(n, &distances) {
            assert_eq!(p + q, 2 * n);
            assert!(is_prime_by(&primes, p) && is_prime_by(&primes, q), "{p} + {q}");
        }
    }
}

#[test]
fn test_range_counts_match_point_counts() {
    let primes = primes_below(200_000);
    let pi = pi_of_n(200_000, &primes).unwrap();
    let counts = count_nto2n(100_000, PrimeSource::CountingArray(&pi)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let n = rng.gen_range(0..100_000u64);
        assert_eq!(counts[n as usize], primes_in_nto2n(n, &primes), "n = {n}");
    }
    // Bertrand: [n, 2n) holds a prime for n >= 2
    assert!(counts[2..].iter().all(|&c| c > 0));
}

#[test]
fn test_artifacts_without_source() {
    let empty = PrimeArtifacts::default();
    assert_eq!(empty.range_source(), Err(PrimeError::UnrecognizedSource));
    assert_eq!(empty.counting_array(10), Err(PrimeError::MissingPrimeSource));

    let artifacts = PrimeArtifacts::from_primes(primes_below(1_000));
    let source = artifacts.range_source().unwrap();
    assert_eq!(count_nto2n(500, source).unwrap().len(), 500);
}

#[test]
fn test_sweeps_agree_with_point_calls() {
    let primes = primes_below(20_000);
    let twins = twin_primes(&primes);
    let sets = distance_sweep(10_000, &primes);
    let summaries = summarize(&sets);
    let abundance = abundance_sweep(&sets, &twins);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let n = rng.gen_range(0..10_000u64);
        let distances = symmetric_distances(n, &primes);
        assert_eq!(summaries[n as usize].count, distances.len());
        assert_eq!(abundance[n as usize], twin_abundance(n, &distances, &twins));
    }
}

#[test]
fn test_exploration_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExploreConfig {
        limit: 20_000,
        distance_limit: 5_000,
        twin_distance_limit: 10_000,
        abundance_limit: 2_000,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let primes = prepare_primes(&config).unwrap();
    assert_eq!(primes.len(), 2_262);

    let report = run_exploration(&config, primes).unwrap();
    assert!(report.goldbach_violations.is_empty());
    assert_eq!(report.range_counts.len(), 10_000);
    assert_eq!(report.twin_abundance.len(), 2_000);

    goldbach_explore::io::write_json(&report, &report_path(dir.path(), config.limit)).unwrap();
    let text = std::fs::read_to_string(report_path(dir.path(), 20_000)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["prime_count"], 2_262);
    assert_eq!(value["config"]["limit"], 20_000);
}
