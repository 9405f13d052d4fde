// SPDX-License-Identifier: LGPL-3.0-or-later

//! FFT-based noise coloring.
//!
//! Reshapes a signal's frequency envelope by weighting each spectral bin
//! with a power of its frequency, then peak-normalizing the reconstructed
//! signal. Weights follow the usual noise-color conventions:
//!
//! | Color  | Weight    | Slope        |
//! |--------|-----------|--------------|
//! | Flat   | 1         | 0 dB/octave  |
//! | Pink   | 1/√f      | -3 dB/octave |
//! | Brown  | 1/f       | -6 dB/octave |
//! | Blue   | √f        | +3 dB/octave |
//! | Violet | f         | +6 dB/octave |
//!
//! The transform runs over the full sequence at once in f64 and the inverse
//! is rescaled by `1/N` (rustfft leaves it unnormalized). Bin 0 would put a
//! zero frequency into the 1/f weights; its frequency value is forced to
//! 1.0 instead.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Target spectral envelope for [`apply_color_filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// Flat spectrum; the filter is the identity.
    Flat,
    /// -3 dB/octave (1/f power).
    Pink,
    /// -6 dB/octave (1/f² power).
    Brown,
    /// +3 dB/octave.
    Blue,
    /// +6 dB/octave.
    Violet,
}

impl NoiseColor {
    /// Parse a color name.
    ///
    /// Unknown names fall back to [`NoiseColor::Flat`] (pass-through); this
    /// is a documented permissive default, not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "flat" => Self::Flat,
            "pink" => Self::Pink,
            "brown" => Self::Brown,
            "blue" => Self::Blue,
            "violet" => Self::Violet,
            _ => Self::Flat,
        }
    }

    /// Amplitude weight applied to a bin at frequency `f` (Hz, f > 0).
    #[inline]
    fn weight(self, f: f64) -> f64 {
        match self {
            Self::Flat => 1.0,
            Self::Pink => 1.0 / f.sqrt(),
            Self::Brown => 1.0 / f,
            Self::Blue => f.sqrt(),
            Self::Violet => f,
        }
    }
}

/// Reshape `samples` toward the given spectral color.
///
/// Returns a new sequence of the same length, peak-normalized so the
/// maximum absolute sample is 1.0 (unless the filtered signal is
/// identically zero, in which case it is returned as-is). `Flat` returns an
/// exact copy of the input. `sample_rate` only sets the bin spacing of the
/// frequency weights.
///
/// # Examples
/// ```
/// use rdt_dsp::filters::color::{NoiseColor, apply_color_filter};
///
/// let signal = vec![0.5, -0.25, 0.75, -1.0];
/// let pink = apply_color_filter(&signal, NoiseColor::Pink, 44100);
/// assert_eq!(pink.len(), signal.len());
/// ```
pub fn apply_color_filter(samples: &[f32], color: NoiseColor, sample_rate: usize) -> Vec<f32> {
    if color == NoiseColor::Flat || samples.is_empty() {
        return samples.to_vec();
    }

    let n = samples.len();
    let mut planner = FftPlanner::<f64>::new();
    let fwd = planner.plan_fft_forward(n);
    let inv = planner.plan_fft_inverse(n);

    let mut spectrum: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    fwd.process(&mut spectrum);

    // Two-sided bin frequencies mirroring the one-sided real-FFT layout:
    // bins k and n-k share the frequency min(k, n-k) · sr / n.
    let bin_hz = sample_rate as f64 / n as f64;
    for (k, bin) in spectrum.iter_mut().enumerate() {
        let fold = k.min(n - k);
        let f = if k == 0 { 1.0 } else { fold as f64 * bin_hz };
        *bin *= color.weight(f);
    }

    inv.process(&mut spectrum);

    let scale = 1.0 / n as f64;
    let mut shaped: Vec<f64> = spectrum.iter().map(|c| c.re * scale).collect();

    let peak = shaped.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
    if peak > 0.0 {
        for x in shaped.iter_mut() {
            *x /= peak;
        }
    }

    shaped.into_iter().map(|x| x as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn test_signal(len: usize) -> Vec<f32> {
        // Deterministic wideband content: two detuned sines plus a ramp
        (0..len)
            .map(|i| {
                let t = i as f32;
                0.4 * (t * 0.31).sin() + 0.3 * (t * 0.077).sin() + 0.001 * t
            })
            .collect()
    }

    #[test]
    fn test_flat_is_exact_identity() {
        let signal = test_signal(300);
        let out = apply_color_filter(&signal, NoiseColor::Flat, 44100);
        assert_eq!(signal, out);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        for color in [NoiseColor::Flat, NoiseColor::Pink, NoiseColor::Violet] {
            assert!(apply_color_filter(&[], color, 44100).is_empty());
        }
    }

    #[test]
    fn test_length_preserved_for_all_colors() {
        let signal = test_signal(1000);
        for color in [
            NoiseColor::Pink,
            NoiseColor::Brown,
            NoiseColor::Blue,
            NoiseColor::Violet,
        ] {
            let out = apply_color_filter(&signal, color, 44100);
            assert_eq!(out.len(), signal.len(), "{color:?} changed the length");
        }
    }

    #[test]
    fn test_peak_normalization() {
        let signal = test_signal(777);
        for color in [
            NoiseColor::Pink,
            NoiseColor::Brown,
            NoiseColor::Blue,
            NoiseColor::Violet,
        ] {
            let out = apply_color_filter(&signal, color, 44100);
            let peak = out.iter().fold(0.0_f32, |m, &x| m.max(x.abs()));
            assert!(peak <= 1.0, "{color:?} peak {peak} above 1.0");
            assert_approx_eq!(f32, peak, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_signal_passes_through() {
        let zeros = vec![0.0f32; 128];
        let out = apply_color_filter(&zeros, NoiseColor::Brown, 44100);
        assert_eq!(out, zeros);
    }

    #[test]
    fn test_coloring_changes_the_signal() {
        let signal = test_signal(512);
        let pink = apply_color_filter(&signal, NoiseColor::Pink, 44100);
        let blue = apply_color_filter(&signal, NoiseColor::Blue, 44100);
        assert_ne!(pink, signal);
        assert_ne!(pink, blue);
    }

    #[test]
    fn test_brown_attenuates_highs_more_than_pink() {
        // Measure first-difference energy as a proxy for high-frequency
        // content; a steeper negative slope leaves less of it.
        let signal = test_signal(2048);
        let diff_energy = |s: &[f32]| -> f32 {
            s.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum::<f32>()
                / s.iter().map(|x| x * x).sum::<f32>()
        };
        let pink = apply_color_filter(&signal, NoiseColor::Pink, 44100);
        let brown = apply_color_filter(&signal, NoiseColor::Brown, 44100);
        assert!(diff_energy(&brown) < diff_energy(&pink));
    }

    #[test]
    fn test_single_sample_input() {
        let out = apply_color_filter(&[0.5], NoiseColor::Violet, 44100);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_finite());
    }

    #[test]
    fn test_color_name_parsing() {
        assert_eq!(NoiseColor::from_name("pink"), NoiseColor::Pink);
        assert_eq!(NoiseColor::from_name("violet"), NoiseColor::Violet);
        // Unknown names pass through unfiltered
        assert_eq!(NoiseColor::from_name("ultraviolet"), NoiseColor::Flat);
    }
}
