//! JSON persistence for prime lists and reports.

use goldbach_core::PrimeList;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ExploreError;

/// Cache file of the primes below `limit`.
pub fn primes_path(dir: &Path, limit: u64) -> PathBuf {
    dir.join(format!("primes_{limit}.json"))
}

pub fn report_path(dir: &Path, limit: u64) -> PathBuf {
    dir.join(format!("exploration_{limit}.json"))
}

/// Serialize `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), ExploreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Store a prime list as a flat JSON array.
pub fn save_primes(primes: &PrimeList, path: &Path) -> Result<(), ExploreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string(primes)?)?;
    log::info!("saved {} primes to {}", primes.len(), path.display());
    Ok(())
}

/// Load a prime list, re-checking that it starts at 2 and is strictly ascending.
pub fn load_primes(path: &Path) -> Result<PrimeList, ExploreError> {
    let text = std::fs::read_to_string(path)?;
    let raw: Vec<u64> = serde_json::from_str(&text)?;
    let primes = PrimeList::try_from_vec(raw)?;
    log::info!("loaded {} primes from {}", primes.len(), path.display());
    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldbach_core::{sieve, PrimeError};

    #[test]
    fn test_prime_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = primes_path(&dir.path().join("cache"), 100);
        let primes = sieve(100, None).unwrap();

        save_primes(&primes, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[2,3,5,7,"), "flat array expected, got {text}");
        assert_eq!(load_primes(&path).unwrap(), primes);
    }

    #[test]
    fn test_load_rejects_malformed_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[3, 5, 7]").unwrap();
        assert!(matches!(
            load_primes(&path),
            Err(ExploreError::Prime(PrimeError::InvalidPrefix(_)))
        ));

        std::fs::write(&path, "{\"primes\": []}").unwrap();
        assert!(matches!(load_primes(&path), Err(ExploreError::Json(_))));

        assert!(matches!(
            load_primes(&dir.path().join("missing.json")),
            Err(ExploreError::Io(_))
        ));
    }

    #[test]
    fn test_paths() {
        let dir = Path::new("data");
        assert_eq!(primes_path(dir, 500), PathBuf::from("data/primes_500.json"));
        assert_eq!(report_path(dir, 500), PathBuf::from("data/exploration_500.json"));
    }
}
