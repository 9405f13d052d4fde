// SPDX-License-Identifier: LGPL-3.0-or-later

//! Resonant diffusion noise generation.
//!
//! The pipeline is strictly left to right: seed state → N diffusion rounds →
//! byte-wise sample extraction. Spectral coloring lives in
//! [`crate::filters`] as a post-process.
//!
//! # Examples
//! ```
//! use rdt_dsp::noise::RdtGenerator;
//! use rdt_dsp::noise::diffusion::CouplingVariant;
//!
//! let mut noise = RdtGenerator::new();
//! noise.set_depth(4).set_variant(CouplingVariant::Harmonic);
//!
//! let mut buf = vec![0.0f32; 512];
//! noise.process_overwrite(&mut buf).unwrap();
//! ```

pub mod chaos;
pub mod diffusion;
pub mod generator;

// Re-export commonly used types
pub use chaos::{ChaosLcg, ChaosSource, RngChaos};
pub use diffusion::{CouplingVariant, PermutationMode, RoundParams, State, diffuse};
pub use generator::{RdtGenerator, extract_samples, sample_at};
