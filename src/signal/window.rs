use ndarray::{s, Array2, Array3, ArrayView2, Axis};
use crate::signal::SignalError;
/// Samples per lead fed to the waveform classifier.
pub const WINDOW_SAMPLES: usize = 4096;
/// Leads per window.
pub const WINDOW_LEADS: usize = 12;
/// Long recordings are resampled onto this many points before padding.
pub const RESAMPLED_SAMPLES: usize = 4000;
/// Duration assumed for any recording longer than the window.
pub const NOMINAL_DURATION_SECS: f64 = 10.0;
/// Fixed (1, 4096, 12) input of the waveform classifier, in raw amplitude units.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformTensor {
    data: Array3<f32>,
}
impl WaveformTensor {
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
    /// The single (4096, 12) window without its batch axis.
    pub fn window(&self) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(0), 0)
    }
}
/// Adapts a (samples x leads) matrix of any shape to the waveform window.
pub fn normalize_window(values: &Array2<f64>) -> Result<WaveformTensor, SignalError> {
    let (rows, cols) = values.dim();
    if rows == 0 || cols == 0 {
        return Err(SignalError::EmptyMatrix { rows, cols });
    }
    let leads = adapt_leads(values);
    let window = match rows {
        n if n > WINDOW_SAMPLES => {
            log::debug!("resampling {n} samples onto {RESAMPLED_SAMPLES} points");
            pad_rows(&interpolate_rows(&leads, RESAMPLED_SAMPLES), WINDOW_SAMPLES)
        }
        n if n < WINDOW_SAMPLES => {
            log::debug!("zero-padding {n} samples to {WINDOW_SAMPLES}");
            pad_rows(&leads, WINDOW_SAMPLES)
        }
        _ => leads,
    };
    Ok(WaveformTensor {
        data: window.mapv(|v| v as f32).insert_axis(Axis(0)),
    })
}
/// First 12 leads, or the available leads repeated side by side until 12
/// columns are filled.
fn adapt_leads(values: &Array2<f64>) -> Array2<f64> {
    let cols = values.ncols();
    if cols >= WINDOW_LEADS {
        return values.slice(s![.., ..WINDOW_LEADS]).to_owned();
    }
    log::warn!("only {cols} leads present, tiling to {WINDOW_LEADS}");
    Array2::from_shape_fn((values.nrows(), WINDOW_LEADS), |(r, c)| values[[r, c % cols]])
}
/// Linear interpolation from `linspace(0, T, n)` onto `linspace(0, T, target)`.
fn interpolate_rows(values: &Array2<f64>, target: usize) -> Array2<f64> {
    let (rows, cols) = values.dim();
    let old_step = NOMINAL_DURATION_SECS / (rows - 1) as f64;
    let new_step = NOMINAL_DURATION_SECS / (target - 1) as f64;
    let mut out = Array2::zeros((target, cols));
    for (j, mut row) in out.rows_mut().into_iter().enumerate() {
        let pos = (j as f64 * new_step) / old_step;
        let lo = (pos.floor() as usize).min(rows - 2);
        let frac = pos - lo as f64;
        for c in 0..cols {
            let a = values[[lo, c]];
            let b = values[[lo + 1, c]];
            row[c] = a + (b - a) * frac;
        }
    }
    out
}
fn pad_rows(values: &Array2<f64>, target: usize) -> Array2<f64> {
    let mut out = Array2::zeros((target, values.ncols()));
    out.slice_mut(s![..values.nrows(), ..]).assign(values);
    out
}
#[cfg(test)]
mod tests {
    use super::*;
    fn ramp(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(r, c)| r as f64 + c as f64 * 0.5)
    }
    #[test]
    fn shape_is_fixed_for_any_input() {
        for rows in [1, 2, 100, 4095, 4096, 4097, 10_000] {
            for cols in [1, 2, 3, 11, 12, 15] {
                let tensor = normalize_window(&ramp(rows, cols)).unwrap();
                assert_eq!(tensor.shape(), (1, WINDOW_SAMPLES, WINDOW_LEADS));
            }
        }
    }
    #[test]
    fn exact_window_passes_through() {
        let input = ramp(WINDOW_SAMPLES, 12);
        let tensor = normalize_window(&input).unwrap();
        assert_eq!(tensor.window().mapv(|v| v as f64), input.mapv(|v| v as f32 as f64));
    }
    #[test]
    fn short_input_is_zero_padded_at_the_end() {
        let tensor = normalize_window(&ramp(100, 12)).unwrap();
        let window = tensor.window();
        assert_eq!(window[[99, 3]], 99.0 + 1.5);
        assert!(window.slice(s![100.., ..]).iter().all(|&v| v == 0.0));
    }
    #[test]
    fn long_input_is_interpolated_then_padded() {
        let rows = 10_000;
        let tensor = normalize_window(&ramp(rows, 12)).unwrap();
        let window = tensor.window();
        // endpoints of the linspace map exactly
        assert_eq!(window[[0, 0]], 0.0);
        assert!((window[[RESAMPLED_SAMPLES - 1, 0]] - (rows - 1) as f32).abs() < 1e-2);
        // a linear ramp stays linear after resampling
        let expected_mid = 2000.0 * (rows - 1) as f64 / (RESAMPLED_SAMPLES - 1) as f64;
        assert!((window[[2000, 0]] as f64 - expected_mid).abs() < 1e-2);
        assert!(window
            .slice(s![RESAMPLED_SAMPLES.., ..])
            .iter()
            .all(|&v| v == 0.0));
    }
    #[test]
    fn interpolation_blends_neighbouring_samples() {
        let values = Array2::from_shape_vec((3, 1), vec![0.0, 10.0, 0.0]).unwrap();
        let out = interpolate_rows(&values, 5);
        let got: Vec<f64> = out.column(0).to_vec();
        assert_eq!(got, vec![0.0, 5.0, 10.0, 5.0, 0.0]);
    }
    #[test]
    fn few_leads_are_tiled() {
        let tensor = normalize_window(&ramp(10, 2)).unwrap();
        let window = tensor.window();
        for c in 0..WINDOW_LEADS {
            assert_eq!(window[[4, c]], 4.0 + (c % 2) as f32 * 0.5);
        }
    }
    #[test]
    fn extra_leads_are_cut() {
        let tensor = normalize_window(&ramp(10, 15)).unwrap();
        assert_eq!(tensor.window()[[0, 11]], 5.5);
    }
    #[test]
    fn empty_matrix_is_rejected() {
        assert!(normalize_window(&Array2::zeros((0, 12))).is_err());
        assert!(normalize_window(&Array2::zeros((10, 0))).is_err());
    }
}
