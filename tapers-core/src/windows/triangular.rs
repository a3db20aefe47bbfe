use core::f64::consts::PI;

use super::taper;

/// A triangular window. The ends do NOT reach zero (see [`bartlett`] for that).
pub fn triang(m: usize, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let half = (m + 1) / 2;

        let m_f = m as f64;

        if m % 2 == 0 {
            let ramp: Vec<f64> = (1..=half).map(|n| (2 * n - 1) as f64 / m_f).collect();

            ramp.iter().chain(ramp.iter().rev()).copied().collect()
        } else {
            let ramp: Vec<f64> = (1..=half).map(|n| 2.0 * n as f64 / (m_f + 1.0)).collect();

            // the peak is only in there once
            ramp.iter()
                .chain(ramp.iter().rev().skip(1))
                .copied()
                .collect()
        }
    })
}

/// A Bartlett window. A triangle with the first and last samples at zero.
///
/// Convolving with this is the same as linear interpolation.
pub fn bartlett(m: usize, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let denom = (m - 1) as f64;
        let center = denom / 2.0;

        (0..m)
            .map(|n| {
                let n = n as f64;
                if n <= center {
                    2.0 * n / denom
                } else {
                    2.0 - 2.0 * n / denom
                }
            })
            .collect()
    })
}

/// A modified Bartlett-Hann window.
pub fn barthann(m: usize, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let denom = m as f64 - 1.0;

        (0..m)
            .map(|n| {
                let fac = (n as f64 / denom - 0.5).abs();

                0.62 - 0.48 * fac + 0.38 * (2.0 * PI * fac).cos()
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_triang_odd() {
        assert_eq!(triang(7, true), vec![0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25]);
        // odd lengths are the same either way
        assert_eq!(triang(7, false), triang(7, true));
    }

    #[test]
    fn test_triang_even() {
        assert_eq!(triang(4, true), vec![0.25, 0.75, 0.75, 0.25]);
        // periodic 4 is symmetric 5 without the last sample
        let expected = [1.0 / 3.0, 2.0 / 3.0, 1.0, 2.0 / 3.0];
        assert_abs_diff_eq!(
            triang(4, false).as_slice(),
            expected.as_slice(),
            epsilon = 1e-15
        );
    }

    #[test_log::test]
    fn test_bartlett_12() {
        let expected = [
            0.0, 0.18181818, 0.36363636, 0.54545455, 0.72727273, 0.90909091, 0.90909091,
            0.72727273, 0.54545455, 0.36363636, 0.18181818, 0.0,
        ];

        assert_abs_diff_eq!(
            bartlett(12, true).as_slice(),
            expected.as_slice(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_barthann_5() {
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];

        assert_abs_diff_eq!(
            barthann(5, true).as_slice(),
            expected.as_slice(),
            epsilon = 1e-12
        );
    }
}
