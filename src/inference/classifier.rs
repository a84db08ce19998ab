use std::fmt;
use std::path::PathBuf;
use serde::Serialize;
use thiserror::Error;
use crate::signal::{FeatureVector, WaveformTensor};
/// Diagnostic labels shared by both classifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CardiacLabel {
    #[serde(rename = "NORM")]
    Normal,
    #[serde(rename = "1dAVb")]
    FirstDegreeAvBlock,
    #[serde(rename = "RBBB")]
    RightBundleBranchBlock,
    #[serde(rename = "LBBB")]
    LeftBundleBranchBlock,
    #[serde(rename = "SB")]
    SinusBradycardia,
    #[serde(rename = "AF")]
    AtrialFibrillation,
    #[serde(rename = "ST")]
    SinusTachycardia,
}
impl CardiacLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardiacLabel::Normal => "NORM",
            CardiacLabel::FirstDegreeAvBlock => "1dAVb",
            CardiacLabel::RightBundleBranchBlock => "RBBB",
            CardiacLabel::LeftBundleBranchBlock => "LBBB",
            CardiacLabel::SinusBradycardia => "SB",
            CardiacLabel::AtrialFibrillation => "AF",
            CardiacLabel::SinusTachycardia => "ST",
        }
    }
}
impl fmt::Display for CardiacLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
/// Output order of the handcrafted classifier.
pub const HANDCRAFTED_LABELS: [CardiacLabel; 7] = [
    CardiacLabel::Normal,
    CardiacLabel::FirstDegreeAvBlock,
    CardiacLabel::RightBundleBranchBlock,
    CardiacLabel::LeftBundleBranchBlock,
    CardiacLabel::SinusBradycardia,
    CardiacLabel::AtrialFibrillation,
    CardiacLabel::SinusTachycardia,
];
/// Output order of the waveform classifier. It has no normal class.
pub const WAVEFORM_LABELS: [CardiacLabel; 6] = [
    CardiacLabel::FirstDegreeAvBlock,
    CardiacLabel::RightBundleBranchBlock,
    CardiacLabel::LeftBundleBranchBlock,
    CardiacLabel::SinusBradycardia,
    CardiacLabel::AtrialFibrillation,
    CardiacLabel::SinusTachycardia,
];
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("input shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("class count mismatch: expected {expected}, got {actual}")]
    ClassCount { expected: usize, actual: usize },
    #[error("predicted class index {index} out of range for {classes} classes")]
    ClassIndex { index: usize, classes: usize },
    #[error("classifier returned no probabilities")]
    EmptyOutput,
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("failed to read model {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid model: {0}")]
    InvalidModel(String),
}
/// Deep classifier over the fixed (1, 4096, 12) window.
pub trait WaveformClassifier {
    /// Probabilities in [`WAVEFORM_LABELS`] order.
    fn predict(&self, tensor: &WaveformTensor) -> Result<Vec<f64>, ClassifierError>;
}
/// Classic classifier over the 41-value feature vector.
pub trait FeatureClassifier {
    /// Index into [`HANDCRAFTED_LABELS`].
    fn predict(&self, features: &FeatureVector) -> Result<usize, ClassifierError>;
    /// Per-class probabilities, for classifiers that expose them.
    fn predict_proba(&self, _features: &FeatureVector) -> Option<Result<Vec<f64>, ClassifierError>> {
        None
    }
}
