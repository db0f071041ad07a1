//! Parameter block for an exploration run.

use goldbach_core::checked_bound;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ExploreError;

/// Bounds for every sweep of an exploration run.
///
/// `range_limit` and `gauss_limit` default to `limit / 2` and `limit * 10`
/// when unset, so they follow `limit` overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Sieve bound: primes, π and twins are computed over `[0, limit)`.
    pub limit: u64,
    /// n range for the `[n, 2n)` counts and π(2n) / π(n) ratios.
    pub range_limit: Option<u64>,
    /// Length of the Gauss approximation array.
    pub gauss_limit: Option<u64>,
    /// n range for symmetric distance summaries.
    pub distance_limit: u64,
    /// n range for distances restricted to twin primes.
    pub twin_distance_limit: u64,
    /// n range for the twin abundance sweep.
    pub abundance_limit: u64,
    /// Cached prime list to resume the sieve from.
    pub prefix_path: Option<PathBuf>,
    /// Directory for prime caches and reports.
    pub output_dir: PathBuf,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        ExploreConfig {
            limit: 500_000,
            range_limit: None,
            gauss_limit: None,
            distance_limit: 50_000,
            twin_distance_limit: 100_000,
            abundance_limit: 10_000,
            prefix_path: None,
            output_dir: PathBuf::from("data"),
        }
    }
}

impl ExploreConfig {
    /// Small smoke-test configuration.
    pub fn quick() -> Self {
        ExploreConfig {
            limit: 2_000,
            distance_limit: 500,
            twin_distance_limit: 1_000,
            abundance_limit: 500,
            ..Default::default()
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExploreError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn range_limit(&self) -> u64 {
        self.range_limit.unwrap_or(self.limit / 2)
    }

    pub fn gauss_limit(&self) -> u64 {
        self.gauss_limit.unwrap_or(self.limit.saturating_mul(10))
    }

    /// Number of n values whose symmetric distances are needed by any sweep.
    pub fn distance_sweep_len(&self) -> u64 {
        self.distance_limit.max(self.abundance_limit)
    }

    /// Fold `--key=value` options onto the config. Bounds go through
    /// [`checked_bound`], so negative values are rejected.
    pub fn apply_overrides(&mut self, opts: &HashMap<String, String>) -> Result<(), ExploreError> {
        for (key, value) in opts {
            match key.as_str() {
                "limit" => self.limit = parse_bound(key, value)?,
                "range-limit" => self.range_limit = Some(parse_bound(key, value)?),
                "gauss-limit" => self.gauss_limit = Some(parse_bound(key, value)?),
                "distance-limit" => self.distance_limit = parse_bound(key, value)?,
                "twin-distance-limit" => self.twin_distance_limit = parse_bound(key, value)?,
                "abundance-limit" => self.abundance_limit = parse_bound(key, value)?,
                "prefix" => self.prefix_path = Some(PathBuf::from(value)),
                "out" => self.output_dir = PathBuf::from(value),
                "mode" | "config" => {}
                other => log::warn!("ignoring unknown option --{other}"),
            }
        }
        Ok(())
    }

    /// Check that every sweep stays inside the sieved range.
    pub fn validate(&self) -> Result<(), ExploreError> {
        let sieved = |name: &str, n_limit: u64| -> Result<(), ExploreError> {
            match n_limit.checked_mul(2) {
                Some(needed) if needed <= self.limit => Ok(()),
                _ => Err(ExploreError::Config(format!(
                    "{name} = {n_limit} needs primes below {}, but limit is {}",
                    n_limit.saturating_mul(2),
                    self.limit
                ))),
            }
        };

        sieved("range_limit", self.range_limit())?;
        sieved("distance_limit", self.distance_limit)?;
        sieved("twin_distance_limit", self.twin_distance_limit)?;
        sieved("abundance_limit", self.abundance_limit)?;

        if self.gauss_limit() < self.range_limit().saturating_mul(2) {
            return Err(ExploreError::Config(format!(
                "gauss_limit = {} must be at least 2 * range_limit = {}",
                self.gauss_limit(),
                self.range_limit().saturating_mul(2)
            )));
        }
        Ok(())
    }
}

fn parse_bound(key: &str, value: &str) -> Result<u64, ExploreError> {
    let raw: i64 = value
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|e| ExploreError::Config(format!("--{key}={value}: {e}")))?;
    Ok(checked_bound(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldbach_core::PrimeError;

    fn opts(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_matches_driver_parameters() {
        let config = ExploreConfig::default();
        assert_eq!(config.limit, 500_000);
        assert_eq!(config.range_limit(), 250_000);
        assert_eq!(config.gauss_limit(), 5_000_000);
        assert_eq!(config.distance_sweep_len(), 50_000);
        config.validate().unwrap();
        ExploreConfig::quick().validate().unwrap();
    }

    #[test]
    fn test_overrides_follow_limit() {
        let mut config = ExploreConfig::default();
        config
            .apply_overrides(&opts(&[("limit", "1_000"), ("distance-limit", "100"), ("out", "tmp")]))
            .unwrap();
        assert_eq!(config.limit, 1_000);
        assert_eq!(config.range_limit(), 500);
        assert_eq!(config.gauss_limit(), 10_000);
        assert_eq!(config.distance_limit, 100);
        assert_eq!(config.output_dir, PathBuf::from("tmp"));
    }

    #[test]
    fn test_negative_bound_rejected() {
        let mut config = ExploreConfig::default();
        let err = config.apply_overrides(&opts(&[("limit", "-5")])).unwrap_err();
        assert!(matches!(
            err,
            ExploreError::Prime(PrimeError::InvalidBound { bound: -5, .. })
        ));
        let err = config.apply_overrides(&opts(&[("limit", "abc")])).unwrap_err();
        assert!(matches!(err, ExploreError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_sweeps_past_limit() {
        let config = ExploreConfig {
            limit: 1_000,
            distance_limit: 600,
            twin_distance_limit: 100,
            abundance_limit: 100,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distance_limit"), "{err}");

        let config = ExploreConfig {
            gauss_limit: Some(10),
            ..ExploreConfig::quick()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_defaults() {
        let config: ExploreConfig = serde_json::from_str(r#"{"limit": 4000}"#).unwrap();
        assert_eq!(config.limit, 4_000);
        assert_eq!(config.distance_limit, 50_000);
        assert_eq!(config.range_limit(), 2_000);
    }
}
