//! Maps arbitrary column headers onto the canonical 12-lead layout.
//!
//! Reordering is all-or-nothing: only a file carrying every canonical lead is
//! rearranged, anything else keeps its own column order so partial recordings
//! still flow through the pipeline.
use std::collections::HashMap;
use crate::signal::{RawColumn, RawTable, SignalError, SignalTable};
/// Lead order the waveform classifier was trained on.
pub const CANONICAL_LEADS: [&str; 12] = [
    "I", "II", "III", "aVL", "aVF", "aVR", "V1", "V2", "V3", "V4", "V5", "V6",
];
/// Drops the time column, keeps numeric columns, reorders to canonical lead
/// order when all twelve leads are present and zero-fills missing cells.
pub fn resolve_leads(raw: RawTable) -> Result<SignalTable, SignalError> {
    let RawTable {
        mut columns,
        num_rows,
    } = raw;
    if columns.is_empty() {
        return Err(SignalError::EmptyHeader);
    }
    let time_idx = match columns
        .iter()
        .position(|c| c.name.to_lowercase().contains("time"))
    {
        Some(idx) => {
            log::info!("found time column: {}", columns[idx].name);
            idx
        }
        None => {
            log::info!(
                "no time column found, dropping first column {}",
                columns[0].name
            );
            0
        }
    };
    columns.remove(time_idx);
    let numeric: Vec<(String, Vec<f64>)> = columns
        .into_iter()
        .filter_map(|RawColumn { name, values }| match values {
            Some(values) => Some((name, values)),
            None => {
                log::debug!("dropping non-numeric column {name}");
                None
            }
        })
        .collect();
    let numeric = match canonical_order(&numeric) {
        Some(order) => {
            log::debug!("all 12 canonical leads present, reordering");
            let mut slots: Vec<Option<(String, Vec<f64>)>> = numeric.into_iter().map(Some).collect();
            order
                .into_iter()
                .filter_map(|idx| slots[idx].take())
                .collect()
        }
        None => {
            log::debug!(
                "canonical lead set incomplete, keeping original order of {} columns",
                numeric.len()
            );
            numeric
        }
    };
    if numeric.is_empty() {
        return Err(SignalError::NoLeadColumns);
    }
    if num_rows == 0 {
        return Err(SignalError::NoSamples);
    }
    let (names, columns): (Vec<String>, Vec<Vec<f64>>) = numeric
        .into_iter()
        .map(|(name, values)| {
            let filled = values
                .into_iter()
                .map(|v| if v.is_nan() { 0.0 } else { v })
                .collect();
            (name, filled)
        })
        .unzip();
    SignalTable::from_columns(names, columns)
}
/// Column indices in canonical order, or `None` unless all twelve leads match.
fn canonical_order(columns: &[(String, Vec<f64>)]) -> Option<Vec<usize>> {
    // later columns win on case-insensitive collisions
    let lookup: HashMap<String, usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, (name, _))| (name.to_uppercase(), idx))
        .collect();
    let order: Vec<usize> = CANONICAL_LEADS
        .iter()
        .filter_map(|lead| lookup.get(&lead.to_uppercase()).copied())
        .collect();
    (order.len() == CANONICAL_LEADS.len()).then_some(order)
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    fn raw(names: &[&str], rows: usize) -> RawTable {
        let columns = names
            .iter()
            .enumerate()
            .map(|(idx, name)| RawColumn {
                name: name.to_string(),
                values: Some((0..rows).map(|r| (idx * 100 + r) as f64).collect()),
            })
            .collect();
        RawTable {
            columns,
            num_rows: rows,
        }
    }
    #[test]
    fn any_permutation_and_case_is_reordered_canonically() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut names: Vec<String> = CANONICAL_LEADS
                .iter()
                .enumerate()
                .map(|(i, n)| {
                    if i % 2 == 0 {
                        n.to_lowercase()
                    } else {
                        n.to_uppercase()
                    }
                })
                .collect();
            names.shuffle(&mut rng);
            names.insert(0, "Time (s)".into());
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let table = resolve_leads(raw(&refs, 5)).unwrap();
            let upper: Vec<String> = table.lead_names().iter().map(|n| n.to_uppercase()).collect();
            let expected: Vec<String> = CANONICAL_LEADS.iter().map(|n| n.to_uppercase()).collect();
            assert_eq!(upper, expected);
        }
    }
    #[test]
    fn reorder_moves_sample_data_with_names() {
        let mut names: Vec<&str> = CANONICAL_LEADS.iter().rev().copied().collect();
        names.insert(0, "time");
        let table = resolve_leads(raw(&names, 3)).unwrap();
        // "I" was the last input column (index 12 in the raw table)
        assert_eq!(table.lead("I").unwrap().to_vec(), vec![1200.0, 1201.0, 1202.0]);
        assert_eq!(table.values()[[0, 0]], 1200.0);
    }
    #[test]
    fn extra_columns_are_dropped_when_reordering() {
        let mut names = vec!["Time", "Resp"];
        names.extend(CANONICAL_LEADS.iter());
        names.push("Pleth");
        let table = resolve_leads(raw(&names, 2)).unwrap();
        assert_eq!(table.num_leads(), 12);
        assert_eq!(table.lead_names()[0], "I");
    }
    #[test]
    fn missing_lead_keeps_original_order() {
        let names = ["time", "V6", "II", "I", "III", "aVL", "aVF", "aVR", "V1", "V2", "V3", "V4"];
        let table = resolve_leads(raw(&names, 4)).unwrap();
        assert_eq!(table.lead_names(), &names[1..]);
    }
    #[test]
    fn first_column_dropped_without_time_header() {
        let table = resolve_leads(raw(&["I", "II", "III"], 2)).unwrap();
        assert_eq!(table.lead_names(), &["II".to_string(), "III".to_string()]);
    }
    #[test]
    fn time_header_found_anywhere() {
        let table = resolve_leads(raw(&["II", "TIMESTAMP", "III"], 2)).unwrap();
        assert_eq!(table.lead_names(), &["II".to_string(), "III".to_string()]);
    }
    #[test]
    fn text_columns_are_removed_and_gaps_zero_filled() {
        let mut table = raw(&["time", "I", "label"], 3);
        table.columns[1].values = Some(vec![1.0, f64::NAN, 3.0]);
        table.columns[2].values = None;
        let table = resolve_leads(table).unwrap();
        assert_eq!(table.lead_names(), &["I".to_string()]);
        assert_eq!(table.lead("I").unwrap().to_vec(), vec![1.0, 0.0, 3.0]);
    }
    #[test]
    fn structurally_empty_inputs_are_errors() {
        assert!(matches!(
            resolve_leads(raw(&["time"], 3)),
            Err(SignalError::NoLeadColumns)
        ));
        assert!(matches!(
            resolve_leads(raw(&["time", "I"], 0)),
            Err(SignalError::NoSamples)
        ));
    }
}
