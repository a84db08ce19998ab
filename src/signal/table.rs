use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use ndarray::{Array2, ArrayView1};
use crate::signal::SignalError;
/// Cell spellings read as a missing value.
const MISSING_MARKERS: [&str; 7] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL"];
/// One column as read from disk, before lead resolution.
#[derive(Clone, Debug)]
pub struct RawColumn {
    pub name: String,
    /// `None` when at least one cell is not a number. Missing cells are NaN.
    pub values: Option<Vec<f64>>,
}
impl RawColumn {
    pub fn is_numeric(&self) -> bool {
        self.values.is_some()
    }
}
/// Header-driven table parsed from a delimited text file.
#[derive(Clone, Debug)]
pub struct RawTable {
    pub columns: Vec<RawColumn>,
    pub num_rows: usize,
}
impl RawTable {
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, SignalError> {
        let path = path.as_ref();
        log::debug!("reading signal table from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, delimiter)
    }
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, SignalError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(SignalError::EmptyHeader);
        }
        let mut builders: Vec<ColumnBuilder> = unique_column_names(headers.iter())
            .into_iter()
            .map(ColumnBuilder::new)
            .collect();
        let mut num_rows = 0;
        for record in reader.records() {
            let record = record?;
            if record.len() > builders.len() {
                return Err(SignalError::RaggedRow {
                    row: num_rows + 1,
                    expected: builders.len(),
                    actual: record.len(),
                });
            }
            // short rows read as trailing missing cells
            for (idx, builder) in builders.iter_mut().enumerate() {
                builder.push(record.get(idx).unwrap_or(""));
            }
            num_rows += 1;
        }
        let columns: Vec<RawColumn> = builders.into_iter().map(ColumnBuilder::finish).collect();
        log::debug!(
            "parsed {} columns x {} rows ({} numeric)",
            columns.len(),
            num_rows,
            columns.iter().filter(|c| c.is_numeric()).count()
        );
        Ok(Self { columns, num_rows })
    }
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
struct ColumnBuilder {
    name: String,
    values: Vec<f64>,
    numeric: bool,
}
impl ColumnBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            values: Vec::new(),
            numeric: true,
        }
    }
    fn push(&mut self, cell: &str) {
        if !self.numeric {
            return;
        }
        let cell = cell.trim();
        if MISSING_MARKERS.contains(&cell) {
            self.values.push(f64::NAN);
            return;
        }
        match cell.parse::<f64>() {
            Ok(v) => self.values.push(v),
            Err(_) => {
                self.numeric = false;
                self.values = Vec::new();
            }
        }
    }
    fn finish(self) -> RawColumn {
        RawColumn {
            name: self.name,
            values: self.numeric.then_some(self.values),
        }
    }
}
/// Blank headers become `Unnamed: <idx>`, repeats get `.1`, `.2`, ... suffixes.
fn unique_column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut used = HashSet::new();
    let mut names = Vec::new();
    for (idx, header) in headers.enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header.to_string()
        };
        let mut candidate = base.clone();
        let mut suffix = 0;
        while used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}.{suffix}");
        }
        used.insert(candidate.clone());
        names.push(candidate);
    }
    names
}
/// Numeric lead matrix: rows are time samples, columns are leads.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalTable {
    lead_names: Vec<String>,
    values: Array2<f64>,
}
impl SignalTable {
    pub fn new(lead_names: Vec<String>, values: Array2<f64>) -> Result<Self, SignalError> {
        if lead_names.len() != values.ncols() {
            return Err(SignalError::ShapeMismatch {
                names: lead_names.len(),
                cols: values.ncols(),
            });
        }
        Ok(Self { lead_names, values })
    }
    /// Builds a table from per-lead sample vectors of equal length.
    pub fn from_columns(
        lead_names: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self, SignalError> {
        if lead_names.len() != columns.len() {
            return Err(SignalError::ShapeMismatch {
                names: lead_names.len(),
                cols: columns.len(),
            });
        }
        let rows = columns.first().map(|c| c.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().position(|c| c.len() != rows) {
            return Err(SignalError::RaggedRow {
                row: bad,
                expected: rows,
                actual: columns[bad].len(),
            });
        }
        let values = Array2::from_shape_fn((rows, columns.len()), |(r, c)| columns[c][r]);
        Self::new(lead_names, values)
    }
    pub fn lead_names(&self) -> &[String] {
        &self.lead_names
    }
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
    pub fn num_samples(&self) -> usize {
        self.values.nrows()
    }
    pub fn num_leads(&self) -> usize {
        self.values.ncols()
    }
    pub fn lead(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let idx = self.lead_names.iter().position(|n| n == name)?;
        Some(self.values.column(idx))
    }
    pub fn leads(&self) -> impl Iterator<Item = (&str, ArrayView1<'_, f64>)> {
        self.lead_names
            .iter()
            .map(String::as_str)
            .zip(self.values.columns())
    }
    /// Sample indices `0..N`, one per row.
    pub fn time_index(&self) -> Vec<usize> {
        (0..self.num_samples()).collect()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn parse(text: &str) -> RawTable {
        RawTable::from_reader(text.as_bytes(), b',').unwrap()
    }
    #[test]
    fn numeric_and_text_columns_are_told_apart() {
        let table = parse("Time (s),I,note\n0.0,1.5,a\n0.1,,b\n0.2,NaN,c\n");
        assert_eq!(table.num_rows, 3);
        assert!(table.columns[0].is_numeric());
        assert!(!table.columns[2].is_numeric());
        let lead = table.columns[1].values.as_ref().unwrap();
        assert_eq!(lead[0], 1.5);
        assert!(lead[1].is_nan());
        assert!(lead[2].is_nan());
    }
    #[test]
    fn blank_and_duplicate_headers_are_renamed() {
        let table = parse(",V1,V1,V1.1\n1,2,3,4\n");
        assert_eq!(
            table.column_names(),
            vec!["Unnamed: 0", "V1", "V1.1", "V1.1.1"]
        );
    }
    #[test]
    fn short_rows_pad_and_long_rows_fail() {
        let table = parse("a,b\n1\n2,3\n");
        assert!(table.columns[1].values.as_ref().unwrap()[0].is_nan());
        let err = RawTable::from_reader("a,b\n1,2,3\n".as_bytes(), b',').unwrap_err();
        assert!(matches!(
            err,
            SignalError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 3
            }
        ));
    }
    #[test]
    fn custom_delimiter_and_padded_cells() {
        let table = RawTable::from_reader("x;y\n 1.0 ; -2e-3\n".as_bytes(), b';').unwrap();
        assert_eq!(table.columns[1].values.as_ref().unwrap()[0], -2e-3);
    }
    #[test]
    fn table_exposes_leads_in_column_order() {
        let table = SignalTable::from_columns(
            vec!["I".into(), "II".into()],
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        )
        .unwrap();
        assert_eq!(table.num_samples(), 3);
        assert_eq!(table.values()[[1, 1]], 5.0);
        assert_eq!(table.lead("II").unwrap().to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(table.time_index(), vec![0, 1, 2]);
        let names: Vec<&str> = table.leads().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["I", "II"]);
    }
    #[test]
    fn ragged_columns_are_rejected() {
        let err = SignalTable::from_columns(
            vec!["I".into(), "II".into()],
            vec![vec![1.0, 2.0], vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, SignalError::RaggedRow { row: 1, .. }));
    }
}
