use core::f64::consts::PI;

use super::taper;

const BLACKMAN: [f64; 3] = [0.42, 0.5, 0.08];
const NUTTALL: [f64; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];
const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];
const FLAT_TOP: [f64; 5] = [0.2156, 0.4160, 0.2781, 0.0836, 0.0069];

/// `a[0] - a[1] * cos(x) + a[2] * cos(2x) - a[3] * cos(3x) + ...` with `x = 2 * pi * n / (M - 1)`
fn cosine_sum(m: usize, a: &[f64], sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let denom = m as f64 - 1.0;

        (0..m)
            .map(|n| {
                let fac = n as f64 * 2.0 * PI / denom;

                a.iter()
                    .enumerate()
                    .map(|(k, a)| {
                        let term = a * (k as f64 * fac).cos();
                        if k % 2 == 0 { term } else { -term }
                    })
                    .sum()
            })
            .collect()
    })
}

/// A Blackman window. The first three terms of a cosine sum, designed to have close to the minimal leakage possible.
pub fn blackman(m: usize, sym: bool) -> Vec<f64> {
    cosine_sum(m, &BLACKMAN, sym)
}

/// A minimum 4-term Blackman-Harris window according to Nuttall.
pub fn nuttall(m: usize, sym: bool) -> Vec<f64> {
    cosine_sum(m, &NUTTALL, sym)
}

/// A minimum 4-term Blackman-Harris window.
pub fn blackmanharris(m: usize, sym: bool) -> Vec<f64> {
    cosine_sum(m, &BLACKMAN_HARRIS, sym)
}

/// A flat top window. Goes negative near the ends. Good for measuring amplitudes, bad at resolving frequencies.
pub fn flattop(m: usize, sym: bool) -> Vec<f64> {
    cosine_sum(m, &FLAT_TOP, sym)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test_log::test]
    fn test_blackman_12() {
        let expected = [
            0.0, 0.03260643, 0.15990363, 0.41439798, 0.73604518, 0.96704677, 0.96704677,
            0.73604518, 0.41439798, 0.15990363, 0.03260643, 0.0,
        ];

        assert_abs_diff_eq!(
            blackman(12, true).as_slice(),
            expected.as_slice(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_flattop_5() {
        let expected = [0.001, -0.0556, 1.0002, -0.0556, 0.001];

        assert_abs_diff_eq!(
            flattop(5, true).as_slice(),
            expected.as_slice(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_four_term_3() {
        // the ends are the alternating sum of the coefficients. the middle is the plain sum
        let w = nuttall(3, true);
        assert_abs_diff_eq!(w[0], 0.0003628, epsilon = 1e-12);
        assert_abs_diff_eq!(w[1], 1.0, epsilon = 1e-12);

        let w = blackmanharris(3, true);
        assert_abs_diff_eq!(w[0], 0.00006, epsilon = 1e-12);
        assert_abs_diff_eq!(w[1], 1.0, epsilon = 1e-12);
    }
}
