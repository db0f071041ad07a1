//! Prime artifacts for empirical work on the Goldbach conjecture.
//!
//! Everything here is a pure function of its inputs:
//! - [`sieve`]: primes in `[2, bound)`, optionally resumed from a cached prefix
//! - [`pi_of_n`] / [`gauss_pi`]: prime-counting array and its n / ln(n) baseline
//! - [`count_nto2n`]: primes in `[n, 2n)` from either a π array or a prime list
//! - [`symmetric_distances`]: offsets d with n - d and n + d prime (Goldbach pairs of 2n)
//! - [`twin_primes`] / [`twin_abundance`]: twin primes and their share in those pairs

pub mod artifacts;
pub mod counting;
pub mod distance;
pub mod error;
pub mod range;
pub mod sieve;
pub mod twins;

pub use artifacts::PrimeArtifacts;
pub use counting::{gauss_pi, pi_of_n, CountingArray};
pub use distance::{goldbach_pairs, symmetric_distances};
pub use error::{checked_bound, PrimeError};
pub use range::{count_nto2n, primes_in_nto2n, PrimeSource};
pub use sieve::{sieve, PrimeList};
pub use twins::{twin_abundance, twin_primes, TwinAbundance};
