//! ECG triage: loads a multi-lead recording from delimited text, normalizes it
//! to the canonical 12-lead layout and runs two independent classifiers over it.
//!
//! ```text
//! file -> lead resolver -> window normalizer   -> waveform classifier   -> decision
//!                       -> feature extractor   -> handcrafted classifier -> decision
//! ```
//!
//! Classifiers are plugged in through [`inference::WaveformClassifier`] and
//! [`inference::FeatureClassifier`]; [`pipeline::Analyzer`] wires everything
//! together and produces the JSON payload in [`types::AnalysisResponse`].
pub mod cli;
pub mod config;
pub mod inference;
pub mod pipeline;
pub mod signal;
pub mod types;
pub use config::AnalyzerConfig;
pub use inference::{CardiacLabel, ClassifierError, FeatureClassifier, Prediction, WaveformClassifier};
pub use pipeline::Analyzer;
pub use signal::{SignalError, SignalTable};
pub use types::{AnalysisReport, AnalysisResponse, ModelFailure, ModelOutcome};
