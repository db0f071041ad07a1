//! Scaling timings for the prime artifacts.
//!
//! Times the sieve (cold and resumed), the π array and the distance functions
//! at increasing bounds, and samples random n to check how the number of
//! Goldbach decompositions grows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use goldbach_core::{
    count_nto2n, gauss_pi, pi_of_n, sieve, symmetric_distances, twin_abundance, twin_primes,
    PrimeError, PrimeSource,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrimeError> {
    println!("================================================================");
    println!("  SCALING: prime artifacts by bound");
    println!("================================================================\n");

    let bounds: Vec<u64> = vec![10_000, 100_000, 1_000_000, 10_000_000];
    bench_sieve(&bounds)?;
    bench_counting(&bounds)?;

    let mut rng = StdRng::seed_from_u64(12345);
    bench_distances(&mut rng)?;
    Ok(())
}

// ============================================================================
// Sieve
// ============================================================================

fn bench_sieve(bounds: &[u64]) -> Result<(), PrimeError> {
    println!("  Sieve: cold vs resumed from the primes below bound / 2");
    println!(
        "  {:>10} {:>10} {:>12} {:>12} {:>8}",
        "bound", "#primes", "cold_us", "resume_us", "speedup"
    );
    println!("  {}", "-".repeat(58));

    for &bound in bounds {
        let start = Instant::now();
        let primes = sieve(bound, None)?;
        let cold = start.elapsed();

        let prefix = sieve(bound / 2, None)?;
        let start = Instant::now();
        let resumed = sieve(bound, Some(prefix.as_slice()))?;
        let resume = start.elapsed();

        let status = if resumed == primes { "" } else { "  MISMATCH" };
        println!(
            "  {:>10} {:>10} {:>12} {:>12} {:>7.2}x{}",
            bound,
            primes.len(),
            cold.as_micros(),
            resume.as_micros(),
            cold.as_secs_f64() / resume.as_secs_f64().max(1e-9),
            status
        );
    }
    println!();
    Ok(())
}

// ============================================================================
// Counting arrays
// ============================================================================

fn bench_counting(bounds: &[u64]) -> Result<(), PrimeError> {
    println!("  pi(n), n / ln(n) and primes in [n, 2n)");
    println!(
        "  {:>10} {:>10} {:>10} {:>12} {:>12} {:>10}",
        "bound", "pi_us", "gauss_us", "range_pi_us", "range_list_us", "pi/gauss"
    );
    println!("  {}", "-".repeat(72));

    for &bound in bounds {
        let primes = sieve(bound, None)?;

        let start = Instant::now();
        let pi = pi_of_n(bound, &primes)?;
        let pi_us = start.elapsed().as_micros();

        let start = Instant::now();
        let gauss = gauss_pi(bound)?;
        let gauss_us = start.elapsed().as_micros();

        let start = Instant::now();
        let from_pi = count_nto2n(bound / 2, PrimeSource::CountingArray(&pi))?;
        let range_pi_us = start.elapsed().as_micros();

        let start = Instant::now();
        let from_list = count_nto2n(bound / 2, PrimeSource::PrimeList(&primes))?;
        let range_list_us = start.elapsed().as_micros();
        let status = if from_pi == from_list { "" } else { "  MISMATCH" };

        let last = (bound - 1) as usize;
        println!(
            "  {:>10} {:>10} {:>10} {:>12} {:>12} {:>10.4}{}",
            bound,
            pi_us,
            gauss_us,
            range_pi_us,
            range_list_us,
            pi[last] as f64 / gauss[last],
            status
        );
    }
    println!();
    Ok(())
}

// ============================================================================
// Symmetric distances
// ============================================================================

fn bench_distances(rng: &mut StdRng) -> Result<(), PrimeError> {
    const SAMPLES: usize = 5;

    println!("  Symmetric distances at random n (twin share of the decompositions)");
    println!(
        "  {:>10} {:>10} {:>10} {:>10} {:>10}",
        "n", "#pairs", "#twin", "twin_frac", "time_us"
    );
    println!("  {}", "-".repeat(56));

    let primes = sieve(20_000_000, None)?;
    let twins = twin_primes(&primes);

    for exp in 3..=7u32 {
        let lo = 10u64.pow(exp - 1);
        let hi = 10u64.pow(exp);
        for _ in 0..SAMPLES {
            let n = rng.gen_range(lo..hi);
            let start = Instant::now();
            let distances = symmetric_distances(n, &primes);
            let elapsed = start.elapsed();
            let twin_only = symmetric_distances(n, &twins);
            let fraction = twin_abundance(n, &distances, &twins)
                .map_or_else(|| "-".to_string(), |a| format!("{:.4}", a.fraction));
            println!(
                "  {:>10} {:>10} {:>10} {:>10} {:>10}",
                n,
                distances.len(),
                twin_only.len(),
                fraction,
                elapsed.as_micros()
            );
        }
    }
    println!();
    Ok(())
}
