//! Slepian window (digital prolate spheroidal sequence)
//!
//! Maximizes the energy concentration in the main lobe. Computed as the dominant eigenvector of a sinc matrix, so
//! this costs `O(M^2)` memory and `O(M^3)` time.
use core::f64::consts::PI;

use itertools::Itertools;
use nalgebra::{DMatrix, SymmetricEigen};

use super::{centered, taper};
use crate::errors::{WindowError, WindowResult};
use crate::logging::{trace, warn};

/// Past this `M * width` the eigenproblem is too ill-conditioned to trust.
pub const SLEPIAN_LIMIT: f64 = 27.38;

/// normalized sinc. `sin(pi x) / (pi x)`
#[inline]
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let y = PI * x;
        y.sin() / y
    }
}

/// the symmetric window. `m >= 2`
fn symmetric_slepian(m: usize, width: f64) -> Vec<f64> {
    let two_f = width / 2.0;

    let positions: Vec<f64> = centered(m).collect();

    let af = DMatrix::from_fn(m, m, |i, j| {
        two_f * sinc(two_f * (positions[i] - positions[j]))
    });

    let eigen = SymmetricEigen::new(af);

    let ind = eigen
        .eigenvalues
        .iter()
        .position_max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .unwrap_or(0);

    trace!(
        "slepian: m={} width={} eigenvalue={}",
        m, width, eigen.eigenvalues[ind]
    );

    let w: Vec<f64> = eigen.eigenvectors.column(ind).iter().map(|x| x.abs()).collect();

    let max = w.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    w.into_iter().map(|x| x / max).collect()
}

/// A Slepian window, also called the DPSS (digital prolate spheroidal sequence).
///
/// `width` is the bandwidth. The peak is normalized to exactly 1.0.
///
/// # Errors
///
/// - [`WindowError::InvalidParameter`] if `width` is NaN or infinite.
/// - [`WindowError::SlepianBandwidth`] if `M * width > 27.38`.
///
/// Both are checked before anything else, even for empty windows.
pub fn slepian(m: usize, width: f64, sym: bool) -> WindowResult<Vec<f64>> {
    if !width.is_finite() {
        warn!("slepian: width must be finite. got {}", width);

        return Err(WindowError::InvalidParameter {
            name: "width",
            value: width,
        });
    }

    if m as f64 * width > SLEPIAN_LIMIT {
        warn!(
            "slepian: M*width is too large. m={} width={} limit={}",
            m, width, SLEPIAN_LIMIT
        );

        return Err(WindowError::SlepianBandwidth {
            m,
            width,
            limit: SLEPIAN_LIMIT,
        });
    }

    Ok(taper(m, sym, |m| symmetric_slepian(m, width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test_log::test]
    fn test_slepian_peak() {
        let w = slepian(31, 0.3, true).unwrap();

        assert_eq!(w[15], 1.0);
        assert_eq!(w.iter().copied().fold(f64::NEG_INFINITY, f64::max), 1.0);

        // tapers away from the center
        for i in 0..15 {
            assert!(w[i] < w[i + 1], "{i}: {} >= {}", w[i], w[i + 1]);
        }
    }

    #[test_log::test]
    fn test_slepian_7() {
        let expected = [
            0.4587079495,
            0.7252452902,
            0.9255953582,
            1.0,
            0.9255953582,
            0.7252452902,
            0.4587079495,
        ];

        assert_abs_diff_eq!(
            slepian(7, 0.5, true).unwrap().as_slice(),
            expected.as_slice(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_slepian_8() {
        let expected = [
            0.2704366351,
            0.5539015606,
            0.8296047463,
            1.0,
            1.0,
            0.8296047463,
            0.5539015606,
            0.2704366351,
        ];

        assert_abs_diff_eq!(
            slepian(8, 0.6, true).unwrap().as_slice(),
            expected.as_slice(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_slepian_narrow_is_flat() {
        // a tiny bandwidth makes the sinc matrix nearly all ones. the top eigenvector is nearly uniform
        let w = slepian(5, 0.01, true).unwrap();

        assert_abs_diff_eq!(w.as_slice(), [1.0; 5].as_slice(), epsilon = 1e-2);
    }

    #[test]
    fn test_slepian_limit() {
        assert_eq!(
            slepian(100, 0.3, true),
            Err(WindowError::SlepianBandwidth {
                m: 100,
                width: 0.3,
                limit: SLEPIAN_LIMIT
            })
        );

        // checked before the small length shortcuts
        assert!(slepian(1, 30.0, true).is_err());

        // right on the limit is fine
        assert!(slepian(2, 13.69, false).is_ok());
    }

    #[test]
    fn test_slepian_rejects_non_finite() {
        assert!(matches!(
            slepian(8, f64::NAN, true),
            Err(WindowError::InvalidParameter { name: "width", .. })
        ));
        assert_eq!(
            slepian(8, f64::NEG_INFINITY, true),
            Err(WindowError::InvalidParameter {
                name: "width",
                value: f64::NEG_INFINITY
            })
        );
        assert!(slepian(0, f64::INFINITY, false).is_err());
    }

    #[test]
    fn test_sinc() {
        assert_eq!(sinc(0.0), 1.0);
        assert_abs_diff_eq!(sinc(1.0), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(sinc(0.5), 2.0 / PI, epsilon = 1e-15);
    }
}
