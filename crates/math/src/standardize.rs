//! Z-score standardization.

use ndarray::Array1;

/// Result of standardizing a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardized {
    /// Scaled z-scores, aligned with the input.
    pub values: Array1<f64>,
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Z-score transform with a fixed output scale.
///
/// `(x - mean) / std_dev * scale`, using the population standard deviation.
/// A sample with zero (or non-finite) spread maps to all zeros.
#[derive(Debug, Clone, Copy)]
pub struct ZScore {
    /// Multiplier applied after standardizing.
    pub scale: f64,
}

impl ZScore {
    /// Create a z-score transform with the given output scale.
    #[must_use]
    pub const fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Standardize a sample.
    #[must_use]
    pub fn apply(&self, data: &Array1<f64>) -> Standardized {
        if data.is_empty() {
            return Standardized { values: Array1::zeros(0), mean: 0.0, std_dev: 0.0 };
        }

        let mean = data.mean().unwrap_or(0.0);
        let std_dev = data.std(0.0);

        let values = if std_dev > 0.0 && std_dev.is_finite() {
            data.mapv(|x| (x - mean) / std_dev * self.scale)
        } else {
            Array1::zeros(data.len())
        };

        Standardized { values, mean, std_dev }
    }
}

impl Default for ZScore {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn unit_scale_has_zero_mean_unit_variance() {
        let out = ZScore::default().apply(&array![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_relative_eq!(out.values.mean().unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(out.values.std(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(out.mean, 3.0);
        assert_relative_eq!(out.std_dev, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn scale_factor_applies() {
        // mean 105, population std 5
        let out = ZScore::new(0.3).apply(&array![100.0, 110.0]);
        assert_relative_eq!(out.values[0], -0.3, epsilon = 1e-12);
        assert_relative_eq!(out.values[1], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn constant_sample_maps_to_zero() {
        let out = ZScore::new(0.3).apply(&array![100.0, 100.0, 100.0]);
        assert_relative_eq!(out.mean, 100.0);
        assert_eq!(out.std_dev, 0.0);
        assert!(out.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn single_point_maps_to_zero() {
        let out = ZScore::new(0.3).apply(&array![4321.0]);
        assert_eq!(out.values.to_vec(), vec![0.0]);
    }

    #[test]
    fn empty_sample() {
        let out = ZScore::new(0.3).apply(&Array1::zeros(0));
        assert!(out.values.is_empty());
    }
}
