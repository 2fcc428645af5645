//! Streaming mean and sample standard deviation (Welford's method)

use serde::{Deserialize, Serialize};

use super::errors::{Result, StatsError};

/// Minimum sample count for a sample standard deviation
const MIN_SAMPLES: u64 = 2;

/// Mean and Bessel-corrected standard deviation of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanSd {
    pub mean: f64,
    pub sd: f64,
}

/// Single-pass accumulator; samples are never stored
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: f64) {
        self.count += 1;
        let delta = sample - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (sample - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, `None` before the first sample
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Mean and sample sd, or `InsufficientSamples` when fewer than two
    /// samples were pushed
    pub fn finish(&self) -> Result<MeanSd> {
        if self.count < MIN_SAMPLES {
            return Err(StatsError::InsufficientSamples {
                found: self.count,
                required: MIN_SAMPLES,
            });
        }

        let variance = self.m2 / (self.count - 1) as f64;
        Ok(MeanSd {
            mean: self.mean,
            sd: variance.sqrt(),
        })
    }
}

impl Extend<f64> for RunningStats {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for sample in iter {
            self.push(sample);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut stats = RunningStats::new();
        stats.extend(iter);
        stats
    }
}
