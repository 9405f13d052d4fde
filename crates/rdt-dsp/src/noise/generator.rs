// SPDX-License-Identifier: LGPL-3.0-or-later

//! High-level resonant diffusion noise generator.
//!
//! Drives the diffusion engine once per call and reads the final state out
//! as samples. Extraction cycles byte-wise through the fixed 64-byte state,
//! so with chaos disabled any output longer than 64 samples repeats with
//! period 64 — that periodicity is part of the transform's contract, not an
//! artifact to be smoothed over.

use crate::consts::{RDELTA, RPHI, STATE_BYTES, STATE_WORDS};
use crate::error::RdtResult;
use crate::noise::chaos::{ChaosLcg, ChaosSource};
use crate::noise::diffusion::{CouplingVariant, PermutationMode, RoundParams, State, diffuse};

/// Read one sample out of the final diffusion state.
///
/// The byte cursor walks words first and byte positions second: sample 0 is
/// the low byte of word 0, sample 16 the second byte of word 0, and so on,
/// wrapping after 64 bytes. Bytes map linearly onto [-1.0, 1.0].
#[inline]
pub fn sample_at(state: &State, index: usize) -> f32 {
    let byte_index = index % STATE_BYTES;
    let word = byte_index % STATE_WORDS;
    let byte_in_word = (byte_index / STATE_WORDS) % 4;
    let byte = (state[word] >> (byte_in_word * 8)) & 0xFF;
    (byte as f64 / 127.5 - 1.0) as f32
}

/// Fill `dst` with samples extracted from a final diffusion state.
pub fn extract_samples(state: &State, dst: &mut [f32]) {
    for (i, d) in dst.iter_mut().enumerate() {
        *d = sample_at(state, i);
    }
}

/// Resonant diffusion noise generator.
///
/// Settings mirror the transform's knobs: resonance scales, round depth,
/// chaos level, coupling variant and permutation discipline. The sample
/// rate is carried for consumers (coloring, WAV headers); generation itself
/// is rate-agnostic.
///
/// Lengths are unsigned here, so a zero length simply yields an empty
/// buffer while a negative `depth` is rejected — the one asymmetry in the
/// parameter validation.
///
/// # Examples
/// ```
/// use rdt_dsp::noise::generator::RdtGenerator;
///
/// let mut noise = RdtGenerator::new();
/// noise.init_with_seed(0);
/// noise.set_depth(4).set_chaos(0.0);
///
/// let samples = noise.generate(256).unwrap();
/// assert_eq!(samples.len(), 256);
/// assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
/// ```
#[derive(Debug, Clone)]
pub struct RdtGenerator {
    phi_scale: f64,
    delta_scale: f64,
    depth: i32,
    chaos: f64,
    variant: CouplingVariant,
    permutation: PermutationMode,
    sample_rate: usize,
    chaos_source: ChaosLcg,
}

impl Default for RdtGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RdtGenerator {
    /// Create a generator with the reference settings: unit scales, depth 4,
    /// no chaos, standard coupling, buffered permutation, 44.1 kHz.
    pub fn new() -> Self {
        Self {
            phi_scale: 1.0,
            delta_scale: 1.0,
            depth: 4,
            chaos: 0.0,
            variant: CouplingVariant::Standard,
            permutation: PermutationMode::Buffered,
            sample_rate: 44100,
            chaos_source: ChaosLcg::new(),
        }
    }

    /// Seed the built-in chaos source from the current time.
    pub fn init(&mut self) {
        self.chaos_source.init();
    }

    /// Seed the built-in chaos source from a specific value.
    pub fn init_with_seed(&mut self, seed: u32) {
        self.chaos_source.init_with_seed(seed);
    }

    /// Set the φ-resonance scale factor (1.0 = reference).
    pub fn set_phi_scale(&mut self, scale: f64) -> &mut Self {
        self.phi_scale = scale;
        self
    }

    /// Set the Δ-resonance scale factor (1.0 = reference).
    pub fn set_delta_scale(&mut self, scale: f64) -> &mut Self {
        self.delta_scale = scale;
        self
    }

    /// Set the diffusion depth (number of rounds, 4-6 recommended).
    ///
    /// Validated on generation: negative values are an error.
    pub fn set_depth(&mut self, depth: i32) -> &mut Self {
        self.depth = depth;
        self
    }

    /// Set the chaos level, clamped into [0, 1]. Zero keeps the pipeline
    /// fully deterministic.
    pub fn set_chaos(&mut self, chaos: f64) -> &mut Self {
        self.chaos = chaos.clamp(0.0, 1.0);
        self
    }

    /// Set the coupling variant.
    pub fn set_variant(&mut self, variant: CouplingVariant) -> &mut Self {
        self.variant = variant;
        self
    }

    /// Set the permutation read discipline.
    pub fn set_permutation(&mut self, mode: PermutationMode) -> &mut Self {
        self.permutation = mode;
        self
    }

    /// Set the nominal sample rate carried alongside the output.
    pub fn set_sample_rate(&mut self, sample_rate: usize) -> &mut Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Current depth setting.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Current chaos level.
    pub fn chaos(&self) -> f64 {
        self.chaos
    }

    /// Current coupling variant.
    pub fn variant(&self) -> CouplingVariant {
        self.variant
    }

    /// Nominal sample rate.
    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    fn round_params(&self) -> RoundParams {
        RoundParams {
            r_phi: RPHI * self.phi_scale,
            r_delta: RDELTA * self.delta_scale,
            variant: self.variant,
            chaos: self.chaos,
            permutation: self.permutation,
        }
    }

    /// Generate `length` samples using the built-in chaos source.
    pub fn generate(&mut self, length: usize) -> RdtResult<Vec<f32>> {
        let mut out = vec![0.0; length];
        self.process_overwrite(&mut out)?;
        Ok(out)
    }

    /// Generate `length` samples drawing chaos bytes from `chaos`.
    ///
    /// With the chaos level at zero the source is never consulted.
    pub fn generate_with(
        &self,
        length: usize,
        chaos: &mut dyn ChaosSource,
    ) -> RdtResult<Vec<f32>> {
        let state = diffuse(self.depth, &self.round_params(), chaos)?;
        let mut out = vec![0.0; length];
        extract_samples(&state, &mut out);
        Ok(out)
    }

    /// Fill `dst` with freshly generated samples.
    pub fn process_overwrite(&mut self, dst: &mut [f32]) -> RdtResult<()> {
        let params = self.round_params();
        let state = diffuse(self.depth, &params, &mut self.chaos_source)?;
        extract_samples(&state, dst);
        Ok(())
    }

    /// Mix freshly generated samples into `dst`.
    ///
    /// If `src` is `None` it is treated as zeros: `dst[i] = noise[i]`.
    /// Otherwise `dst[i] = src[i] + noise[i]`.
    pub fn process_add(&mut self, dst: &mut [f32], src: Option<&[f32]>) -> RdtResult<()> {
        let Some(src) = src else {
            return self.process_overwrite(dst);
        };
        let params = self.round_params();
        let state = diffuse(self.depth, &params, &mut self.chaos_source)?;
        for (i, (d, &s)) in dst.iter_mut().zip(src.iter()).enumerate() {
            *d = s + sample_at(&state, i);
        }
        Ok(())
    }
}
