use std::path::Path;
use crate::config::AnalyzerConfig;
use crate::inference::classifier::{ClassifierError, FeatureClassifier, WaveformClassifier};
use crate::inference::linear::{LinearFeatureClassifier, LinearHead, PooledWaveformClassifier};
/// Classifier instances loaded once at startup. Either slot may be empty.
#[derive(Default)]
pub struct LoadedModels {
    pub waveform: Option<Box<dyn WaveformClassifier>>,
    pub handcrafted: Option<Box<dyn FeatureClassifier>>,
}
impl LoadedModels {
    /// Loads every configured model. A missing or broken model file leaves its
    /// slot empty and is logged; it never fails the caller.
    pub fn load(config: &AnalyzerConfig) -> Self {
        let waveform = config
            .waveform_model
            .as_deref()
            .and_then(|path| log_failure("waveform", path, load_waveform(path)));
        let handcrafted = config
            .feature_model
            .as_deref()
            .and_then(|path| log_failure("handcrafted", path, load_handcrafted(path)));
        log::info!(
            "models ready: waveform={}, handcrafted={}",
            waveform.is_some(),
            handcrafted.is_some()
        );
        Self {
            waveform,
            handcrafted,
        }
    }
}
fn load_waveform(path: &Path) -> Result<Box<dyn WaveformClassifier>, ClassifierError> {
    let head = LinearHead::from_json_path(path)?;
    Ok(Box::new(PooledWaveformClassifier::new(head)?))
}
fn load_handcrafted(path: &Path) -> Result<Box<dyn FeatureClassifier>, ClassifierError> {
    let head = LinearHead::from_json_path(path)?;
    Ok(Box::new(LinearFeatureClassifier::new(head)?))
}
fn log_failure<T>(kind: &str, path: &Path, result: Result<T, ClassifierError>) -> Option<T> {
    match result {
        Ok(model) => {
            log::info!("loaded {kind} model from {}", path.display());
            Some(model)
        }
        Err(err) => {
            log::warn!("{kind} model unavailable ({}): {err}", path.display());
            None
        }
    }
}
