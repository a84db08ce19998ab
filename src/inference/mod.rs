// src/inference/mod.rs
pub mod classifier;
pub mod decision;
pub mod linear;
pub mod loader;
pub use classifier::{
    CardiacLabel, ClassifierError, FeatureClassifier, WaveformClassifier, HANDCRAFTED_LABELS,
    WAVEFORM_LABELS,
};
pub use decision::{HandcraftedDecision, Prediction, WaveformDecision, WAVEFORM_THRESHOLDS};
pub use linear::{
    Activation, LinearFeatureClassifier, LinearHead, LinearHeadSpec, PooledWaveformClassifier,
};
pub use loader::LoadedModels;
