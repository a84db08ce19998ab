//! Turns raw classifier outputs into a single label with a confidence in percent.
use serde::Serialize;
use crate::inference::classifier::{
    CardiacLabel, ClassifierError, HANDCRAFTED_LABELS, WAVEFORM_LABELS,
};
/// Per-class cutoffs for the waveform classifier, in [`WAVEFORM_LABELS`] order.
/// Empirical values from the model's validation; treat as opaque.
pub const WAVEFORM_THRESHOLDS: [f64; 6] = [0.124, 0.07, 0.05, 0.278, 0.390, 0.174];
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub label: CardiacLabel,
    /// Percent. Not clamped.
    pub confidence: f64,
}
/// Thresholded decision over the six waveform probabilities.
#[derive(Clone, Debug)]
pub struct WaveformDecision {
    thresholds: [f64; 6],
}
impl Default for WaveformDecision {
    fn default() -> Self {
        Self {
            thresholds: WAVEFORM_THRESHOLDS,
        }
    }
}
impl WaveformDecision {
    pub fn with_thresholds(thresholds: [f64; 6]) -> Self {
        Self { thresholds }
    }
    pub fn decide(&self, probs: &[f64]) -> Result<Prediction, ClassifierError> {
        if probs.len() != WAVEFORM_LABELS.len() {
            return Err(ClassifierError::ClassCount {
                expected: WAVEFORM_LABELS.len(),
                actual: probs.len(),
            });
        }
        let (best, max) = argmax(probs).ok_or(ClassifierError::EmptyOutput)?;
        let any_positive = probs
            .iter()
            .zip(&self.thresholds)
            .any(|(p, t)| p > t);
        if !any_positive {
            return Ok(Prediction {
                label: CardiacLabel::Normal,
                confidence: 100.0 - round2(max * 100.0),
            });
        }
        // once any class fires only the global maximum matters
        Ok(Prediction {
            label: WAVEFORM_LABELS[best],
            confidence: round2(max * 100.0),
        })
    }
}
/// The handcrafted classifier's own decision, taken as-is.
#[derive(Clone, Debug, Default)]
pub struct HandcraftedDecision;
impl HandcraftedDecision {
    pub fn decide(
        &self,
        index: usize,
        probs: Option<&[f64]>,
    ) -> Result<Prediction, ClassifierError> {
        let label = *HANDCRAFTED_LABELS
            .get(index)
            .ok_or(ClassifierError::ClassIndex {
                index,
                classes: HANDCRAFTED_LABELS.len(),
            })?;
        let confidence = match probs {
            Some(probs) => {
                let (_, max) = argmax(probs).ok_or(ClassifierError::EmptyOutput)?;
                round2(max * 100.0)
            }
            None => 0.0,
        };
        Ok(Prediction { label, confidence })
    }
}
/// First index of the maximum value.
fn argmax(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (idx, v)| match best {
            Some((_, b)) if v <= b => best,
            _ => Some((idx, v)),
        })
}
/// Rounds half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
