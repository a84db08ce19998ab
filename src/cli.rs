use clap::Parser;
use std::path::PathBuf;
use crate::config::AnalyzerConfig;
#[derive(Debug, Parser)]
#[command(
    name = "ecg-triage",
    version,
    about = "Classify a 12-lead ECG recording with a feature model and a waveform model"
)]
pub struct Cli {
    /// Delimited text file, one column per lead plus an optional time column
    pub input: PathBuf,

    #[arg(long, help = "JSON config file; flags below override its values")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "JSON head for the waveform classifier")]
    pub waveform_model: Option<PathBuf>,

    #[arg(long, help = "JSON head for the handcrafted-feature classifier")]
    pub feature_model: Option<PathBuf>,

    #[arg(long, help = "Field delimiter of the input file")]
    pub delimiter: Option<char>,

    #[arg(long, help = "Write the payload here instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
impl Cli {
    /// Layers command-line flags over a base config.
    pub fn apply(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if let Some(path) = &self.waveform_model {
            config.waveform_model = Some(path.clone());
        }
        if let Some(path) = &self.feature_model {
            config.feature_model = Some(path.clone());
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        config.pretty |= self.pretty;
        config
    }
}
