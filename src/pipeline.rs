use std::path::Path;
use ndarray::Array2;
use crate::inference::{
    FeatureClassifier, HandcraftedDecision, LoadedModels, WaveformClassifier, WaveformDecision,
};
use crate::signal::{
    extract_features, normalize_window, resolve_leads, RawTable, SignalError, SignalTable,
};
use crate::types::{AnalysisReport, AnalysisResponse, ModelFailure, ModelOutcome};
/// Runs one recording through lead resolution and both classifier paths.
///
/// The classifiers are injected at construction and only ever borrowed, so a
/// single analyzer can serve any number of sequential requests.
pub struct Analyzer {
    waveform: Option<Box<dyn WaveformClassifier>>,
    handcrafted: Option<Box<dyn FeatureClassifier>>,
    waveform_decision: WaveformDecision,
    handcrafted_decision: HandcraftedDecision,
    delimiter: u8,
}
impl Analyzer {
    pub fn new(
        waveform: Option<Box<dyn WaveformClassifier>>,
        handcrafted: Option<Box<dyn FeatureClassifier>>,
    ) -> Self {
        Self {
            waveform,
            handcrafted,
            waveform_decision: WaveformDecision::default(),
            handcrafted_decision: HandcraftedDecision,
            delimiter: b',',
        }
    }
    pub fn from_models(models: LoadedModels) -> Self {
        Self::new(models.waveform, models.handcrafted)
    }
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
    /// Reads the file and resolves its leads. Any error here is request-fatal.
    pub fn load_signals(&self, path: impl AsRef<Path>) -> Result<SignalTable, SignalError> {
        let raw = RawTable::from_path(path, self.delimiter)?;
        resolve_leads(raw)
    }
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisReport, SignalError> {
        let signals = self.load_signals(path)?;
        Ok(self.analyze_table(signals))
    }
    /// Both paths run on the same matrix; neither can fail the other.
    pub fn analyze_table(&self, signals: SignalTable) -> AnalysisReport {
        log::info!(
            "analyzing {} samples x {} leads",
            signals.num_samples(),
            signals.num_leads()
        );
        let ai_model = self.run_waveform(signals.values());
        let classic_ml = self.run_handcrafted(signals.values());
        AnalysisReport {
            signals,
            classic_ml,
            ai_model,
        }
    }
    /// Never fails: load errors become the `{error, details}` payload.
    pub fn analyze_to_response(&self, path: impl AsRef<Path>) -> AnalysisResponse {
        match self.analyze(path) {
            Ok(report) => report.into_response(),
            Err(err) => {
                log::error!("analysis failed: {err}");
                AnalysisResponse::failure(err.to_string())
            }
        }
    }
    fn run_waveform(&self, values: &Array2<f64>) -> ModelOutcome {
        let Some(model) = self.waveform.as_deref() else {
            log::warn!("waveform classifier not loaded");
            return Err(ModelFailure::Unavailable);
        };
        let outcome = normalize_window(values)
            .map_err(ModelFailure::from)
            .and_then(|tensor| Ok(model.predict(&tensor)?))
            .and_then(|probs| Ok(self.waveform_decision.decide(&probs)?));
        if let Err(err) = &outcome {
            log::warn!("waveform path failed: {err}");
        }
        outcome
    }
    fn run_handcrafted(&self, values: &Array2<f64>) -> ModelOutcome {
        let Some(model) = self.handcrafted.as_deref() else {
            log::warn!("handcrafted classifier not loaded");
            return Err(ModelFailure::Unavailable);
        };
        let outcome = extract_features(values)
            .map_err(ModelFailure::from)
            .and_then(|features| {
                let index = model.predict(&features)?;
                let probs = model.predict_proba(&features).transpose()?;
                Ok(self.handcrafted_decision.decide(index, probs.as_deref())?)
            });
        if let Err(err) = &outcome {
            log::warn!("handcrafted path failed: {err}");
        }
        outcome
    }
}
