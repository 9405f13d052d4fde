// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error type shared across the crate.

use thiserror::Error;

/// Errors produced by the diffusion engine and the persistence boundary.
///
/// Unknown variant or color *names* are deliberately not errors; they fall
/// back to `Standard` coupling and `Flat` filtering at the parsing boundary.
#[derive(Error, Debug)]
pub enum RdtError {
    /// A caller-supplied parameter is outside the accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// WAV encoding or the underlying I/O failed.
    #[error("wave write error: {0}")]
    Wave(#[from] hound::Error),
}

/// Crate-wide result alias.
pub type RdtResult<T> = Result<T, RdtError>;
