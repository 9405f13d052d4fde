// SPDX-License-Identifier: LGPL-3.0-or-later

//! # rdt-dsp
//!
//! Deterministic structured-noise generation via a resonant diffusion
//! transform: a fixed 16-word seed state is driven through a configurable
//! number of difference/energy/phase/rotation/permutation rounds and the
//! final state is read out byte-wise as audio samples.
//!
//! - **Noise**: the diffusion rounds, engine and generator, plus pluggable
//!   chaos byte sources
//! - **Filters**: FFT-based spectral coloring (pink, brown, blue, violet)
//! - **Meters**: Shannon entropy and autocorrelation for output validation
//! - **Wave**: 16-bit PCM persistence boundary
//!
//! With the chaos level at zero the whole pipeline is bit-deterministic;
//! identical settings always reproduce identical sequences.
//!
//! ## Example
//! ```
//! use rdt_dsp::filters::color::{NoiseColor, apply_color_filter};
//! use rdt_dsp::noise::RdtGenerator;
//!
//! let mut noise = RdtGenerator::new();
//! noise.set_depth(4);
//!
//! let samples = noise.generate(1024).unwrap();
//! let pink = apply_color_filter(&samples, NoiseColor::Pink, 44100);
//! assert_eq!(pink.len(), 1024);
//! ```

pub mod consts;
pub mod error;
pub mod filters;
pub mod meters;
pub mod noise;
pub mod wave;

pub use error::{RdtError, RdtResult};
pub use filters::color::{NoiseColor, apply_color_filter};
pub use meters::{autocorrelation, entropy};
pub use noise::chaos::{ChaosLcg, ChaosSource, RngChaos};
pub use noise::diffusion::{CouplingVariant, PermutationMode, RoundParams, State, diffuse};
pub use noise::generator::RdtGenerator;
