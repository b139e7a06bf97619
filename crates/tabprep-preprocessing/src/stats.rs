use serde::{Deserialize, Serialize};

/// Per-column normalization statistic, learned once at fit time.
///
/// `std` is the population standard deviation (ddof = 0), so z-scoring the
/// fitted data yields exactly unit variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormStats {
    pub mean: f64,
    pub std: f64,
}

impl NormStats {
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        NormStats {
            mean,
            std: var.sqrt(),
        }
    }

    /// Z-score a single value. A near-zero std is substituted with 1.0 so
    /// constant columns are centered rather than divided by zero.
    pub fn apply(&self, value: f64) -> f64 {
        let std = if self.std.abs() < f64::EPSILON {
            1.0
        } else {
            self.std
        };
        (value - self.mean) / std
    }
}
