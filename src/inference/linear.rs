//! JSON-described dense classifier heads.
//!
//! A head is a single `classes x inputs` weight matrix plus bias followed by a
//! softmax or an element-wise sigmoid. It is enough to drive the pipeline end
//! to end without an external inference runtime.
use std::fs;
use std::path::Path;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use crate::inference::classifier::{
    ClassifierError, FeatureClassifier, WaveformClassifier, HANDCRAFTED_LABELS, WAVEFORM_LABELS,
};
use crate::signal::{FeatureVector, WaveformTensor, FEATURE_LEN, WINDOW_LEADS, WINDOW_SAMPLES};
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Softmax,
    Sigmoid,
}
/// On-disk form of a head.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinearHeadSpec {
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}
#[derive(Clone, Debug)]
pub struct LinearHead {
    weights: Array2<f64>,
    bias: Array1<f64>,
    activation: Activation,
}
impl LinearHead {
    pub fn from_spec(spec: LinearHeadSpec) -> Result<Self, ClassifierError> {
        let classes = spec.weights.len();
        if classes == 0 {
            return Err(ClassifierError::InvalidModel("head has no classes".into()));
        }
        let inputs = spec.weights[0].len();
        if spec.weights.iter().any(|row| row.len() != inputs) {
            return Err(ClassifierError::InvalidModel(
                "weight rows differ in length".into(),
            ));
        }
        if spec.bias.len() != classes {
            return Err(ClassifierError::InvalidModel(format!(
                "{} bias terms for {classes} classes",
                spec.bias.len()
            )));
        }
        let flat: Vec<f64> = spec.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((classes, inputs), flat)
            .map_err(|e| ClassifierError::InvalidModel(e.to_string()))?;
        Ok(Self {
            weights,
            bias: Array1::from(spec.bias),
            activation: spec.activation,
        })
    }
    pub fn from_json_str(json: &str) -> Result<Self, ClassifierError> {
        Self::from_spec(serde_json::from_str(json)?)
    }
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ClassifierError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
    pub fn num_classes(&self) -> usize {
        self.weights.nrows()
    }
    pub fn num_inputs(&self) -> usize {
        self.weights.ncols()
    }
    fn expect_shape(&self, inputs: usize, classes: usize) -> Result<(), ClassifierError> {
        if self.num_inputs() != inputs {
            return Err(ClassifierError::ShapeMismatch {
                expected: vec![1, self.num_inputs()],
                actual: vec![1, inputs],
            });
        }
        if self.num_classes() != classes {
            return Err(ClassifierError::ClassCount {
                expected: classes,
                actual: self.num_classes(),
            });
        }
        Ok(())
    }
    pub fn forward(&self, input: ArrayView1<'_, f64>) -> Result<Array1<f64>, ClassifierError> {
        if input.len() != self.num_inputs() {
            return Err(ClassifierError::ShapeMismatch {
                expected: vec![1, self.num_inputs()],
                actual: vec![1, input.len()],
            });
        }
        let logits = self.weights.dot(&input) + &self.bias;
        let out = match self.activation {
            Activation::Sigmoid => logits.mapv(|z| 1.0 / (1.0 + (-z).exp())),
            Activation::Softmax => {
                let max = logits.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
                let exp = logits.mapv(|z| (z - max).exp());
                let sum = exp.sum();
                exp / sum
            }
        };
        if out.iter().any(|v| !v.is_finite()) {
            return Err(ClassifierError::Inference(
                "non-finite activation output".into(),
            ));
        }
        Ok(out)
    }
}
/// Handcrafted classifier backed by a 41 -> 7 head.
#[derive(Clone, Debug)]
pub struct LinearFeatureClassifier {
    head: LinearHead,
}
impl LinearFeatureClassifier {
    pub fn new(head: LinearHead) -> Result<Self, ClassifierError> {
        head.expect_shape(FEATURE_LEN, HANDCRAFTED_LABELS.len())?;
        Ok(Self { head })
    }
}
impl FeatureClassifier for LinearFeatureClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<usize, ClassifierError> {
        let scores = self.head.forward(features.values().view())?;
        scores
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (idx, &v)| match best {
                Some((_, b)) if v <= b => best,
                _ => Some((idx, v)),
            })
            .map(|(idx, _)| idx)
            .ok_or(ClassifierError::EmptyOutput)
    }
    fn predict_proba(&self, features: &FeatureVector) -> Option<Result<Vec<f64>, ClassifierError>> {
        Some(self.head.forward(features.values().view()).map(|p| p.to_vec()))
    }
}
/// Waveform classifier that averages each lead over time and feeds the 12
/// lead means to a 12 -> 6 head.
#[derive(Clone, Debug)]
pub struct PooledWaveformClassifier {
    head: LinearHead,
}
impl PooledWaveformClassifier {
    pub fn new(head: LinearHead) -> Result<Self, ClassifierError> {
        head.expect_shape(WINDOW_LEADS, WAVEFORM_LABELS.len())?;
        Ok(Self { head })
    }
}
impl WaveformClassifier for PooledWaveformClassifier {
    fn predict(&self, tensor: &WaveformTensor) -> Result<Vec<f64>, ClassifierError> {
        let (batch, samples, leads) = tensor.shape();
        if (batch, samples, leads) != (1, WINDOW_SAMPLES, WINDOW_LEADS) {
            return Err(ClassifierError::ShapeMismatch {
                expected: vec![1, WINDOW_SAMPLES, WINDOW_LEADS],
                actual: vec![batch, samples, leads],
            });
        }
        let pooled = tensor
            .window()
            .mapv(f64::from)
            .mean_axis(Axis(0))
            .ok_or(ClassifierError::EmptyOutput)?;
        Ok(self.head.forward(pooled.view())?.to_vec())
    }
}
