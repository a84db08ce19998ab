// src/signal/mod.rs
pub mod error;
pub mod features;
pub mod leads;
pub mod table;
pub mod window;
pub use error::SignalError;
pub use features::{extract_features, FeatureVector, FEATURE_LEN};
pub use leads::{resolve_leads, CANONICAL_LEADS};
pub use table::{RawColumn, RawTable, SignalTable};
pub use window::{normalize_window, WaveformTensor, WINDOW_LEADS, WINDOW_SAMPLES};
