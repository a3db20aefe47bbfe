//! Dolph-Chebyshev window
//!
//! The window is defined in the frequency domain by a Chebyshev polynomial. We evaluate the polynomial at `M`
//! points, run a forward FFT, and mirror half of the result into the time-domain window.
use core::f64::consts::PI;

use num_complex::Complex;
use rustfft::FftPlanner;

use super::taper;
use crate::errors::{WindowError, WindowResult};
use crate::logging::{trace, warn};

/// Chebyshev polynomial of the first kind from its analytic definition. No polynomial expansion.
#[inline]
fn chebyshev_t(order: f64, x: f64) -> f64 {
    if x > 1.0 {
        (order * x.acosh()).cosh()
    } else if x < -1.0 {
        let sign = 1.0 - 2.0 * (order % 2.0);

        sign * (order * (-x).acosh()).cosh()
    } else {
        (order * x.acos()).cos()
    }
}

/// the symmetric window. `m >= 2`
fn symmetric_chebwin(m: usize, at: f64) -> Vec<f64> {
    let m_f = m as f64;

    let order = m_f - 1.0;

    let beta = ((10f64.powf(at.abs() / 20.0)).acosh() / order).cosh();

    trace!("chebwin: m={} at={} beta={}", m, at, beta);

    let mut spectrum: Vec<Complex<f64>> = (0..m)
        .map(|k| {
            let k = k as f64;

            let p = chebyshev_t(order, beta * (PI * k / m_f).cos());

            if m % 2 == 0 {
                // half-sample shift so the even window stays symmetric
                Complex::from_polar(p, PI * k / m_f)
            } else {
                Complex::new(p, 0.0)
            }
        })
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(m);

    fft.process(&mut spectrum);

    if m % 2 == 1 {
        let n = (m + 1) / 2;

        let w: Vec<f64> = spectrum[..n].iter().map(|c| c.re / spectrum[0].re).collect();

        // w[n-1] .. w[1], w[0], w[1] .. w[n-1]
        w[1..].iter().rev().chain(w.iter()).copied().collect()
    } else {
        let n = m / 2 + 1;

        let w: Vec<f64> = spectrum[..n].iter().map(|c| c.re / spectrum[1].re).collect();

        // w[n-1] .. w[1], w[1] .. w[n-1]
        w[1..].iter().rev().chain(w[1..].iter()).copied().collect()
    }
}

/// A Dolph-Chebyshev window.
///
/// `at` is the side lobe attenuation in dB. Only its magnitude matters. All side lobes have the same height.
///
/// # Errors
///
/// [`WindowError::InvalidParameter`] if `at` is NaN or infinite.
pub fn chebwin(m: usize, at: f64, sym: bool) -> WindowResult<Vec<f64>> {
    if !at.is_finite() {
        warn!("chebwin: attenuation must be finite. got {}", at);

        return Err(WindowError::InvalidParameter {
            name: "attenuation",
            value: at,
        });
    }

    Ok(taper(m, sym, |m| symmetric_chebwin(m, at)))
}
