// SPDX-License-Identifier: LGPL-3.0-or-later

//! WAV persistence boundary.
//!
//! Consumes a finished sample sequence and writes it as 16-bit PCM mono.
//! Generation never touches the filesystem; this module is the only I/O in
//! the crate.

use std::path::Path;

use crate::error::RdtResult;

/// Write `samples` as a 16-bit PCM mono WAV file.
///
/// Samples are scaled by the full i16 range; values outside [-1.0, 1.0]
/// saturate instead of wrapping.
pub fn write_wav_i16<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
) -> RdtResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample((s * 32767.0) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}
