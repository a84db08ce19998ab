use thiserror::Error;
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("failed to read signal file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse signal file: {0}")]
    Csv(#[from] csv::Error),
    #[error("signal file has no header columns")]
    EmptyHeader,
    #[error("row {row} has {actual} fields, header declares {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("no numeric lead columns left after dropping the time column")]
    NoLeadColumns,
    #[error("signal file contains no samples")]
    NoSamples,
    #[error("signal matrix is empty ({rows} rows x {cols} leads)")]
    EmptyMatrix { rows: usize, cols: usize },
    #[error("table shape mismatch: {names} lead names for {cols} columns")]
    ShapeMismatch { names: usize, cols: usize },
}
