// SPDX-License-Identifier: LGPL-3.0-or-later

//! Console demo: generate noise, report its statistics, sweep the coupling
//! variants and write a WAV example.

use rdt_dsp::filters::color::{NoiseColor, apply_color_filter};
use rdt_dsp::meters::{autocorrelation, entropy};
use rdt_dsp::noise::RdtGenerator;
use rdt_dsp::noise::diffusion::CouplingVariant;
use rdt_dsp::wave::write_wav_i16;

fn report(label: &str, samples: &[f32]) {
    let n = samples.len() as f64;
    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
    let rms = (samples.iter().map(|&s| (s as f64).powi(2)).sum::<f64>() / n).sqrt();
    let peak = samples.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
    let std = (samples
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();
    println!("{label}:");
    println!("  samples : {}", samples.len());
    println!("  entropy : {:.4} bits", entropy(samples, 256));
    println!("  rms     : {rms:.4}");
    println!("  peak    : {peak:.4}");
    println!("  mean    : {mean:.6}");
    println!("  std     : {std:.4}");
}

fn main() -> rdt_dsp::RdtResult<()> {
    let sample_rate = 44100usize;

    println!("resonant diffusion noise demo");
    println!("-----------------------------");

    let mut noise = RdtGenerator::new();
    noise.set_depth(4).set_sample_rate(sample_rate);

    let samples = noise.generate(sample_rate)?;
    report("pure (depth 4, standard)", &samples);

    let acf = autocorrelation(&samples, 20);
    println!(
        "  acf     : lag1={:.4} lag10={:.4} lag20={:.4}",
        acf[1], acf[10], acf[20]
    );

    let again = noise.generate(sample_rate)?;
    println!(
        "  deterministic: {}",
        if samples == again { "yes" } else { "NO" }
    );

    println!();
    println!("variants:");
    for variant in [
        CouplingVariant::Standard,
        CouplingVariant::Double,
        CouplingVariant::Split,
        CouplingVariant::Harmonic,
        CouplingVariant::Twisted,
        CouplingVariant::Resonant,
    ] {
        let mut noise_gen = RdtGenerator::new();
        noise_gen.set_variant(variant);
        let out = noise_gen.generate(10_000)?;
        println!("  {variant:<10?} entropy={:.4} bits", entropy(&out, 256));
    }

    println!();
    let colored = apply_color_filter(&samples, NoiseColor::Pink, sample_rate);
    report("pink-filtered", &colored);

    let three_seconds = noise.generate(3 * sample_rate)?;
    write_wav_i16("rdt_example.wav", &three_seconds, sample_rate as u32)?;
    println!();
    println!("wrote rdt_example.wav ({} samples)", three_seconds.len());

    Ok(())
}
