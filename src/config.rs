//! Runtime configuration for the analyzer binary.
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// JSON head for the waveform classifier. Unset means the slot stays empty.
    pub waveform_model: Option<PathBuf>,
    /// JSON head for the handcrafted classifier.
    pub feature_model: Option<PathBuf>,
    /// Field delimiter of the input file (default: `,`).
    pub delimiter: char,
    /// Pretty-print the JSON payload.
    pub pretty: bool,
}
impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            waveform_model: None,
            feature_model: None,
            delimiter: ',',
            pretty: false,
        }
    }
}
impl AnalyzerConfig {
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.delimiter_byte()?;
        Ok(config)
    }
    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"feature_model": "rf.json", "pretty": true}}"#).unwrap();
        let config = AnalyzerConfig::from_json_path(file.path()).unwrap();
        assert_eq!(config.feature_model, Some(PathBuf::from("rf.json")));
        assert!(config.pretty);
        assert_eq!(config.waveform_model, None);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }
    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"delimiter": "§"}}"#).unwrap();
        assert!(AnalyzerConfig::from_json_path(file.path()).is_err());
    }
}
