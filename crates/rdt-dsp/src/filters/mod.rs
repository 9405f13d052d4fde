// SPDX-License-Identifier: LGPL-3.0-or-later

//! Spectral post-processing for generated noise.

pub mod color;

pub use color::{NoiseColor, apply_color_filter};
