//! Exploration driver over the `goldbach-core` artifacts.
//!
//! Sieves (or loads a cached prime list), then sweeps n over the range and
//! distance functions in parallel and collects everything into an
//! [`ExplorationReport`] that is written as JSON for plotting.

pub mod config;
pub mod density;
pub mod error;
pub mod io;
pub mod report;
pub mod sweep;

pub use config::ExploreConfig;
pub use density::{gauss_range_estimate, gauss_ratio, linear_fit, pi_ratio, LinearFit};
pub use error::ExploreError;
pub use report::{prepare_primes, print_summary, run_exploration, ExplorationReport};
pub use sweep::{
    abundance_sweep, distance_sweep, goldbach_violations, summarize, twin_distance_counts,
    DistanceSummary,
};
