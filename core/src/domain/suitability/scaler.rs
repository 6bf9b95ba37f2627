use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Per-feature standardization with frozen statistics.
///
/// Fitted once on the training partition (population standard deviation,
/// matching the original training pipeline) and immutable afterwards.
/// Zero-std policy: a constant feature scales to 0.0 instead of dividing
/// by zero, and inverse-transforms back to its mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    pub fn fit(x: &Array2<f64>) -> Self {
        let rows = x.nrows() as f64;
        let mean: Vec<f64> = x
            .mean_axis(Axis(0))
            .map(|m| m.to_vec())
            .unwrap_or_else(|| vec![0.0; x.ncols()]);
        let std: Vec<f64> = x
            .axis_iter(Axis(1))
            .zip(&mean)
            .map(|(column, &mean)| {
                let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / rows;
                variance.sqrt()
            })
            .collect();

        Self { mean, std }
    }

    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(&value, (&mean, &std))| {
                if std == 0.0 {
                    0.0
                } else {
                    (value - mean) / std
                }
            })
            .collect()
    }

    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut scaled = x.clone();
        for mut row in scaled.axis_iter_mut(Axis(0)) {
            for (value, (&mean, &std)) in row.iter_mut().zip(self.mean.iter().zip(&self.std)) {
                *value = if std == 0.0 { 0.0 } else { (*value - mean) / std };
            }
        }
        scaled
    }

    pub fn inverse_transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(&value, (&mean, &std))| value * std + mean)
            .collect()
    }

    #[cfg(test)]
    pub fn from_raw(mean: Vec<f64>, std: Vec<f64>) -> Self {
        Self { mean, std }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn close(a: &[f64], b: &[f64]) {
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-9, "{x} != {y}");
        }
    }

    #[test]
    fn fit_computes_population_statistics() {
        let x = array![[1.0, 10.0], [3.0, 10.0], [5.0, 10.0]];
        let scaler = StandardScaler::fit(&x);

        close(&scaler.mean, &[3.0, 10.0]);
        // population std of [1, 3, 5] is sqrt(8/3)
        close(&scaler.std, &[(8.0f64 / 3.0).sqrt(), 0.0]);
    }

    #[test]
    fn constant_feature_scales_to_zero() {
        let x = array![[2.0, 7.0], [4.0, 7.0]];
        let scaler = StandardScaler::fit(&x);

        let scaled = scaler.transform_row(&[3.0, 7.0]);
        assert_eq!(scaled[1], 0.0);
        assert_eq!(scaled[0], 0.0); // mean-centred
    }

    #[test]
    fn inverse_transform_round_trips_within_tolerance() {
        let x = array![[1.0, 5.0, 9.0], [2.0, 6.0, 9.0], [4.0, 8.0, 9.0]];
        let scaler = StandardScaler::fit(&x);

        for row in [[1.0, 5.0, 9.0], [4.0, 8.0, 9.0]] {
            let scaled = scaler.transform_row(&row);
            let restored = scaler.inverse_transform_row(&scaled);
            close(&restored, &row);

            let rescaled = scaler.transform_row(&restored);
            close(&rescaled, &scaled);
        }
    }

    #[test]
    fn transform_matrix_matches_row_transform() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let scaler = StandardScaler::fit(&x);
        let scaled = scaler.transform(&x);

        for (row, scaled_row) in x.axis_iter(Axis(0)).zip(scaled.axis_iter(Axis(0))) {
            close(&scaled_row.to_vec(), &scaler.transform_row(&row.to_vec()));
        }
    }
}
