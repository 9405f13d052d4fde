// SPDX-License-Identifier: LGPL-3.0-or-later

//! Normalized autocorrelation of a sample sequence.

/// Autocorrelation for lags `0..=max_lag`.
///
/// `acf[0]` is 1.0 and `acf[lag] = Σ (x[t]-μ)(x[t+lag]-μ) / (n·σ²)`.
/// A zero-variance (constant or empty) input yields an all-zero result,
/// lag 0 included. Lags at or beyond the sequence length stay 0.
///
/// # Examples
/// ```
/// use rdt_dsp::meters::autocorrelation;
///
/// let signal: Vec<f32> = (0..512).map(|i| (i as f32 * 0.3).sin()).collect();
/// let acf = autocorrelation(&signal, 10);
/// assert_eq!(acf.len(), 11);
/// assert_eq!(acf[0], 1.0);
/// ```
pub fn autocorrelation(samples: &[f32], max_lag: usize) -> Vec<f32> {
    let mut acf = vec![0.0f32; max_lag + 1];
    let n = samples.len();
    if n == 0 {
        return acf;
    }

    let nf = n as f64;
    let mean = samples.iter().map(|&x| x as f64).sum::<f64>() / nf;
    let var = samples
        .iter()
        .map(|&x| (x as f64 - mean).powi(2))
        .sum::<f64>()
        / nf;
    if var == 0.0 {
        return acf;
    }

    acf[0] = 1.0;
    for lag in 1..=max_lag.min(n.saturating_sub(1)) {
        let c: f64 = samples[..n - lag]
            .iter()
            .zip(&samples[lag..])
            .map(|(&a, &b)| (a as f64 - mean) * (b as f64 - mean))
            .sum();
        acf[lag] = (c / (nf * var)) as f32;
    }
    acf
}
