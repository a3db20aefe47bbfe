//! Window functions
//!
//! Every family is published as a symmetric formula. Periodic windows (the ones you want in front of an FFT) come
//! from computing one extra symmetric sample and throwing it away. [`taper`] does that for all of them except boxcar.
mod chebyshev;
mod cosine_sum;
mod flat;
mod gaussian;
mod hanning;
mod kaiser;
mod piecewise;
mod slepian;
mod triangular;

use crate::logging::{debug, trace};

pub use chebyshev::chebwin;
pub use cosine_sum::{blackman, blackmanharris, flattop, nuttall};
pub use flat::boxcar;
pub use gaussian::{gaussian, general_gaussian};
pub use hanning::{hamming, hann, hanning};
pub use kaiser::{bessel_i0, kaiser};
pub use piecewise::{bohman, parzen};
pub use slepian::{SLEPIAN_LIMIT, slepian};
pub use triangular::{barthann, bartlett, triang};

/// Run a symmetric window formula with the shared length handling.
///
/// - `m == 0` is an empty window and `m == 1` is `[1.0]`. `symmetric` is not called for either.
/// - an even periodic window is the symmetric window of length `m + 1` without its last sample.
///
/// `symmetric` always gets a length of at least 2 and must return exactly that many samples.
pub(crate) fn taper<F>(m: usize, sym: bool, symmetric: F) -> Vec<f64>
where
    F: FnOnce(usize) -> Vec<f64>,
{
    match m {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }

    let extended = !sym && m % 2 == 0;

    let len = if extended { m + 1 } else { m };

    trace!("taper: m={} sym={} len={}", m, sym, len);

    let mut w = symmetric(len);

    debug_assert_eq!(w.len(), len);

    if extended {
        w.truncate(m);
    }

    w
}

/// `n - (m - 1) / 2` for every sample. the center of the window is 0.
#[inline]
pub(crate) fn centered(m: usize) -> impl Iterator<Item = f64> {
    let center = (m as f64 - 1.0) / 2.0;

    (0..m).map(move |n| n as f64 - center)
}

/// multiply the samples by the window weights. extra samples on either side are left alone.
#[inline]
pub fn apply(samples: &mut [f64], window: &[f64]) {
    for (x, w) in samples.iter_mut().zip(window.iter()) {
        *x *= w;
    }
}

/// The window takes some amplitude away. Multiply by this after an FFT to get back to 1.0.
///
/// This is `len / sum`. An empty window (or one that sums to 0) has no meaningful scaling and gives `inf` or `NaN`.
pub fn scaling(window: &[f64]) -> f64 {
    let sum_windows: f64 = window.iter().sum();

    let scaling = window.len() as f64 / sum_windows;

    debug!("scaling: {}", scaling);

    scaling
}
