//! Handcrafted feature vector for the classic classifier.
//!
//! Layout: per-lead means, per-lead standard deviations and per-lead maxima over
//! at most the first 12 leads, followed by the global mean, std, max and min of
//! the whole matrix. The result is cut or zero-padded to exactly
//! [`FEATURE_LEN`] values, truncation first. That arithmetic matches the input
//! shape the classifier was fitted on and must not be rearranged.
use ndarray::{concatenate, s, Array1, Array2, ArrayView2, Axis};
use crate::signal::window::WINDOW_LEADS;
use crate::signal::SignalError;
/// Input width of the handcrafted classifier.
pub const FEATURE_LEN: usize = 41;
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    values: Array1<f64>,
}
impl FeatureVector {
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Single-row (1, 41) batch as consumed by the classifier.
    pub fn as_batch(&self) -> ArrayView2<'_, f64> {
        self.values.view().insert_axis(Axis(0))
    }
}
pub fn extract_features(values: &Array2<f64>) -> Result<FeatureVector, SignalError> {
    let (rows, cols) = values.dim();
    if rows == 0 || cols == 0 {
        return Err(SignalError::EmptyMatrix { rows, cols });
    }
    let used = cols.min(WINDOW_LEADS);
    let leads = values.slice(s![.., ..used]);
    let means = leads
        .mean_axis(Axis(0))
        .ok_or(SignalError::EmptyMatrix { rows, cols })?;
    let stds = leads.std_axis(Axis(0), 0.0);
    let maxs = leads.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v));
    let global = Array1::from(vec![
        values.mean().unwrap_or(0.0),
        values.std(0.0),
        values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v)),
        values.fold(f64::INFINITY, |acc, &v| acc.min(v)),
    ]);
    let joined = concatenate(
        Axis(0),
        &[means.view(), stds.view(), maxs.view(), global.view()],
    )
    .map_err(|_| SignalError::EmptyMatrix { rows, cols })?;
    Ok(FeatureVector {
        values: fit_length(joined.to_vec(), FEATURE_LEN),
    })
}
/// Truncate first, then zero-pad at the end.
fn fit_length(mut features: Vec<f64>, target: usize) -> Array1<f64> {
    features.truncate(target);
    features.resize(target, 0.0);
    Array1::from(features)
}
