// SPDX-License-Identifier: LGPL-3.0-or-later

//! Shannon entropy of a sample sequence.

/// Shannon entropy in bits over a byte-quantized histogram.
///
/// Samples are mapped from [-1.0, 1.0] onto bytes, bucketed into `bins`
/// histogram bins (at most 256), and measured as `-Σ p·log2(p)`. The result
/// lies in `[0, log2(bins)]` — at the default 256 bins, in [0, 8]. Empty
/// input or zero bins yield 0.0.
///
/// # Examples
/// ```
/// use rdt_dsp::meters::entropy;
///
/// let constant = vec![0.25f32; 1000];
/// assert_eq!(entropy(&constant, 256), 0.0);
/// ```
pub fn entropy(samples: &[f32], bins: usize) -> f32 {
    if samples.is_empty() || bins == 0 {
        return 0.0;
    }
    let bins = bins.min(256);

    let mut hist = vec![0usize; bins];
    for &s in samples {
        let byte = ((s + 1.0) * 127.5) as u8 as usize;
        hist[byte * bins / 256] += 1;
    }

    let n = samples.len() as f64;
    let mut h = 0.0_f64;
    for &count in &hist {
        if count > 0 {
            let p = count as f64 / n;
            h -= p * p.log2();
        }
    }
    h as f32
}
