use core::f64::consts::PI;

use super::taper;

/// raised cosine with a custom pedestal. hann is `0.5, 0.5`, hamming is `0.54, 0.46`
#[inline]
fn raised_cosine(m: usize, a0: f64, a1: f64, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let denom = (m - 1) as f64;

        (0..m)
            .map(|n| a0 - a1 * (2.0 * PI * n as f64 / denom).cos())
            .collect()
    })
}

/// A Hann window. `0.5 - 0.5 * cos(2 * pi * n / (M - 1))`.
///
/// The ends touch zero. The peak is only exactly 1.0 when the length is odd.
pub fn hann(m: usize, sym: bool) -> Vec<f64> {
    raised_cosine(m, 0.5, 0.5, sym)
}

/// The Hann window is often (wrongly) called "Hanning". Same window.
#[inline]
pub fn hanning(m: usize, sym: bool) -> Vec<f64> {
    hann(m, sym)
}

/// A Hamming window. `0.54 - 0.46 * cos(2 * pi * n / (M - 1))`.
///
/// Like hann, but the ends sit at 0.08 to cancel the nearest side lobe.
pub fn hamming(m: usize, sym: bool) -> Vec<f64> {
    raised_cosine(m, 0.54, 0.46, sym)
}
