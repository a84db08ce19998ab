// src/types.rs
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;
use crate::inference::{ClassifierError, Prediction};
use crate::signal::{SignalError, SignalTable};
/// Label reported for a classifier slot with no loaded model.
pub const MODEL_UNAVAILABLE: &str = "Model Error";
/// Why one classifier path produced no prediction. Never fatal to the request.
#[derive(Debug, Error)]
pub enum ModelFailure {
    #[error("model not loaded")]
    Unavailable,
    #[error(transparent)]
    Input(#[from] SignalError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
/// Result of one classifier path.
pub type ModelOutcome = Result<Prediction, ModelFailure>;
// which classifier path an outcome belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    /// Handcrafted features -> classic classifier.
    ClassicMl,
    /// Fixed window -> deep waveform classifier.
    AiModel,
}
impl ModelKind {
    pub fn error_marker(&self) -> &'static str {
        match self {
            ModelKind::ClassicMl => "ML Error",
            ModelKind::AiModel => "AI Error",
        }
    }
}
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionPayload {
    pub prediction: String,
    pub confidence: f64,
}
impl PredictionPayload {
    pub fn render(kind: ModelKind, outcome: &ModelOutcome) -> Self {
        match outcome {
            Ok(p) => Self {
                prediction: p.label.as_str().to_string(),
                confidence: p.confidence,
            },
            Err(ModelFailure::Unavailable) => Self {
                prediction: MODEL_UNAVAILABLE.to_string(),
                confidence: 0.0,
            },
            Err(err) => Self {
                prediction: format!("{}: {err}", kind.error_marker()),
                confidence: 0.0,
            },
        }
    }
}
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisPayload {
    pub classic_ml: PredictionPayload,
    pub ai_model: PredictionPayload,
}
/// Lead name -> full sample series, in table column order.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadSignals(pub SignalTable);
impl Serialize for LeadSignals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.num_leads()))?;
        for (name, series) in self.0.leads() {
            map.serialize_entry(name, &series.to_vec())?;
        }
        map.end()
    }
}
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuccessPayload {
    pub status: &'static str,
    pub time: Vec<usize>,
    pub signals: LeadSignals,
    pub analysis: AnalysisPayload,
}
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FailurePayload {
    pub error: String,
    pub details: String,
}
/// The single externally visible output of an analysis request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success(SuccessPayload),
    Failure(FailurePayload),
}
impl AnalysisResponse {
    pub fn failure(details: impl Into<String>) -> Self {
        AnalysisResponse::Failure(FailurePayload {
            error: "Failed".to_string(),
            details: details.into(),
        })
    }
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResponse::Success(_))
    }
}
/// Typed result of a request that got past loading.
#[derive(Debug)]
pub struct AnalysisReport {
    pub signals: SignalTable,
    pub classic_ml: ModelOutcome,
    pub ai_model: ModelOutcome,
}
impl AnalysisReport {
    pub fn into_response(self) -> AnalysisResponse {
        let analysis = AnalysisPayload {
            classic_ml: PredictionPayload::render(ModelKind::ClassicMl, &self.classic_ml),
            ai_model: PredictionPayload::render(ModelKind::AiModel, &self.ai_model),
        };
        AnalysisResponse::Success(SuccessPayload {
            status: "success",
            time: self.signals.time_index(),
            signals: LeadSignals(self.signals),
            analysis,
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::CardiacLabel;
    fn table() -> SignalTable {
        SignalTable::from_columns(
            vec!["V2".into(), "I".into()],
            vec![vec![0.5, -0.5], vec![1.0, 2.0]],
        )
        .unwrap()
    }
    #[test]
    fn success_payload_keeps_lead_order_and_shape() {
        let report = AnalysisReport {
            signals: table(),
            classic_ml: Ok(Prediction {
                label: CardiacLabel::AtrialFibrillation,
                confidence: 81.5,
            }),
            ai_model: Err(ModelFailure::Unavailable),
        };
        let json = serde_json::to_string(&report.into_response()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"success","time":[0,1],"signals":{"V2":[0.5,-0.5],"I":[1.0,2.0]},"analysis":{"classic_ml":{"prediction":"AF","confidence":81.5},"ai_model":{"prediction":"Model Error","confidence":0.0}}}"#
        );
    }
    #[test]
    fn failures_carry_their_path_marker() {
        let outcome: ModelOutcome = Err(ClassifierError::Inference("boom".into()).into());
        let ai = PredictionPayload::render(ModelKind::AiModel, &outcome);
        assert_eq!(ai.prediction, "AI Error: inference failed: boom");
        assert_eq!(ai.confidence, 0.0);
        let ml = PredictionPayload::render(ModelKind::ClassicMl, &outcome);
        assert!(ml.prediction.starts_with("ML Error: "));
    }
    #[test]
    fn failure_payload_shape() {
        let json = serde_json::to_value(AnalysisResponse::failure("no such file")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Failed", "details": "no such file"}));
    }
}
