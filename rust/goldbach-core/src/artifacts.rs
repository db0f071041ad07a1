//! Structured record of the prime artifacts computed for one bound.

use serde::{Deserialize, Serialize};

use crate::counting::{pi_of_n, CountingArray};
use crate::error::{array_len, PrimeError};
use crate::range::PrimeSource;
use crate::sieve::PrimeList;

/// Prime list, π array and Gauss array for a sweep. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimeArtifacts {
    pub primes: Option<PrimeList>,
    pub pi_n: Option<CountingArray>,
    pub gauss_pi_n: Option<Vec<f64>>,
}

impl PrimeArtifacts {
    pub fn from_primes(primes: PrimeList) -> Self {
        PrimeArtifacts {
            primes: Some(primes),
            ..Default::default()
        }
    }

    /// Source for [`crate::count_nto2n`]: the π array when present, else the prime list.
    pub fn range_source(&self) -> Result<PrimeSource<'_>, PrimeError> {
        match (&self.pi_n, &self.primes) {
            (Some(pi), _) => Ok(PrimeSource::CountingArray(pi.as_slice())),
            (None, Some(primes)) => Ok(PrimeSource::PrimeList(primes.as_slice())),
            (None, None) => Err(PrimeError::UnrecognizedSource),
        }
    }

    /// π over `0..bound`, reusing the stored array when it is long enough.
    pub fn counting_array(&self, bound: u64) -> Result<CountingArray, PrimeError> {
        let len = array_len(bound)?;
        if let Some(pi) = self.pi_n.as_ref().and_then(|pi| pi.truncated(len)) {
            return Ok(pi);
        }
        match &self.primes {
            Some(primes) => pi_of_n(bound, primes),
            None => Err(PrimeError::MissingPrimeSource),
        }
    }
}
