//! Born-rule measurement sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Draws full-register measurement outcomes from a statevector.
///
/// Sampling never collapses or otherwise modifies the state.
#[derive(Debug)]
pub struct Sampler<R> {
    rng: R,
}

impl Sampler<StdRng> {
    /// A reproducible sampler: equal seeds yield equal histograms.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Sampler<R> {
    /// Wrap an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Measure every qubit `shots` times and histogram the bitstrings.
    pub fn sample(&mut self, state: &Statevector, shots: u32) -> SimResult<Counts> {
        if shots == 0 {
            return Err(SimError::InvalidShots(0));
        }

        let cdf: Vec<f64> = state
            .probabilities()
            .into_iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        // Scale draws by the accumulated mass so rounding drift cannot push
        // a draw past the last bucket.
        let total = cdf.last().copied().unwrap_or(0.0);
        let fallback = last_nonzero(&cdf);

        let mut hist = vec![0u32; cdf.len()];
        for _ in 0..shots {
            let u = self.rng.r#gen::<f64>() * total;
            let outcome = cdf.partition_point(|&c| c <= u);
            let outcome = if outcome < cdf.len() { outcome } else { fallback };
            hist[outcome] += 1;
        }

        let counts: Counts = hist
            .into_iter()
            .enumerate()
            .filter(|&(_, n)| n > 0)
            .map(|(outcome, n)| (state.outcome_to_bitstring(outcome), n))
            .collect();
        trace!(outcomes = counts.len(), shots, "sampled measurement outcomes");
        Ok(counts)
    }
}

/// Index of the last outcome with nonzero probability in a CDF.
fn last_nonzero(cdf: &[f64]) -> usize {
    let mut prev = 0.0;
    let mut last = 0;
    for (i, &c) in cdf.iter().enumerate() {
        if c > prev {
            last = i;
        }
        prev = c;
    }
    last
}
