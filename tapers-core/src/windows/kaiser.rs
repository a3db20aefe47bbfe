use super::taper;

/// relative size of the last series term before we stop adding more
const BESSEL_EPSILON: f64 = 1e-17;

/// the series needs about `x` terms to converge. past this the result overflowed a long time ago
const BESSEL_MAX_TERMS: usize = 1000;

/// Modified Bessel function of the first kind, order 0.
///
/// Power series `sum((x/2)^(2k) / (k!)^2)`. Every term is positive so there is no cancellation. Very large inputs
/// overflow to `inf`.
pub fn bessel_i0(x: f64) -> f64 {
    let half = x / 2.0;

    let mut sum = 1.0;
    let mut term = 1.0;

    for k in 1..BESSEL_MAX_TERMS {
        let ratio = half / k as f64;

        term *= ratio * ratio;
        sum += term;

        if term < BESSEL_EPSILON * sum {
            break;
        }
    }

    sum
}

/// A Kaiser window.
///
/// `beta` trades main-lobe width for side lobe level. As beta gets large, the window narrows.
///
/// | beta | shape               |
/// |------|---------------------|
/// | 0    | rectangular         |
/// | 5    | similar to hamming  |
/// | 6    | similar to hann     |
/// | 8.6  | similar to blackman |
///
/// A very large beta with a short window underflows and can give NaN.
pub fn kaiser(m: usize, beta: f64, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let alpha = (m as f64 - 1.0) / 2.0;

        let denom = bessel_i0(beta);

        (0..m)
            .map(|n| {
                let r = (n as f64 - alpha) / alpha;

                bessel_i0(beta * (1.0 - r.powi(2)).sqrt()) / denom
            })
            .collect()
    })
}
