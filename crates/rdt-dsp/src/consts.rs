// SPDX-License-Identifier: LGPL-3.0-or-later

//! Constants for the resonant diffusion transform.
//!
//! The seed state is the classic sequence of 32-bit words derived from the
//! hexadecimal expansion of π (the same table Blowfish uses for its P-array).
//! `RPHI` and `RDELTA` are the unscaled resonance constants; both are
//! multiplied by user scale factors before entering a round.

/// Number of 32-bit words in the diffusion state.
pub const STATE_WORDS: usize = 16;

/// Number of bytes the state yields during sample extraction.
pub const STATE_BYTES: usize = STATE_WORDS * 4;

/// Unscaled φ-resonance constant.
pub const RPHI: f64 = 12.0;

/// Unscaled Δ-resonance constant, 6·√6.
pub const RDELTA: f64 = 14.696938456699067;

/// Golden ratio φ, used by the gradient term of the difference operator.
pub const PHI: f64 = 1.6180339887498948;

/// Golden-ratio word 2^32/φ, XORed into every lane by the permutation step.
pub const GOLDEN_RATIO_WORD: u32 = 0x9E3779B9;

/// Minimum divisor substituted for the resonance constants in the phase
/// computation when they are scaled down to (near) zero.
pub const DIV_EPSILON: f64 = 1e-10;

/// π-derived initialization words.
const SEED_STATE: [u32; STATE_WORDS] = [
    0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344, //
    0xA4093822, 0x299F31D0, 0x082EFA98, 0xEC4E6C89, //
    0x452821E6, 0x38D01377, 0xBE5466CF, 0x34E90C6C, //
    0xC0AC29B7, 0xC97C50DD, 0x3F84D5B5, 0xB5470917,
];

/// Return a fresh copy of the constant seed state.
///
/// Every call yields an independent copy; the underlying constant is never
/// observable through a mutable path.
#[inline]
pub fn seed_state() -> [u32; STATE_WORDS] {
    SEED_STATE
}
