use super::{centered, taper};

/// A Gaussian window. `exp(-n^2 / (2 * std^2))` with `n` measured from the center.
pub fn gaussian(m: usize, std: f64, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let sig2 = 2.0 * std * std;

        centered(m).map(|n| (-n.powi(2) / sig2).exp()).collect()
    })
}

/// A window with a generalized Gaussian shape. `exp(-0.5 * |n / sig|^(2p))`.
///
/// `p = 1` is a plain [`gaussian`]. Larger `p` flattens the top. The half-power point is at
/// `(2 * ln(2))^(1 / (2p)) * sig`.
pub fn general_gaussian(m: usize, p: f64, sig: f64, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        centered(m)
            .map(|n| (-0.5 * (n / sig).abs().powf(2.0 * p)).exp())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gaussian_5() {
        let expected = [0.13533528, 0.60653066, 1.0, 0.60653066, 0.13533528];

        assert_abs_diff_eq!(
            gaussian(5, 1.0, true).as_slice(),
            expected.as_slice(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_general_gaussian_p1_is_gaussian() {
        let a = general_gaussian(9, 1.0, 2.0, true);
        let b = gaussian(9, 2.0, true);

        assert_abs_diff_eq!(a.as_slice(), b.as_slice(), epsilon = 1e-14);
    }

    #[test]
    fn test_general_gaussian_half_power() {
        let p = 1.5;

        // put the samples next to the center right on the half-power point
        let sig = 1.0 / (2.0 * 2f64.ln()).powf(1.0 / (2.0 * p));

        let w = general_gaussian(3, p, sig, true);

        assert_abs_diff_eq!(w.as_slice(), [0.5, 1.0, 0.5].as_slice(), epsilon = 1e-12);
    }
}
