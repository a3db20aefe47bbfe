use core::f64::consts::{FRAC_1_PI, PI};

use super::{centered, taper};

/// A Parzen window. Piecewise cubic: a smooth center section and cubic tails.
pub fn parzen(m: usize, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        let m_f = m as f64;
        let quarter = (m_f - 1.0) / 4.0;
        let half = m_f / 2.0;

        centered(m)
            .map(|n| {
                let x = n.abs() / half;

                if n.abs() <= quarter {
                    1.0 - 6.0 * x.powi(2) + 6.0 * x.powi(3)
                } else {
                    2.0 * (1.0 - x).powi(3)
                }
            })
            .collect()
    })
}

/// A Bohman window. The first and last samples are zero.
pub fn bohman(m: usize, sym: bool) -> Vec<f64> {
    taper(m, sym, |m| {
        // interior points of linspace(-1, 1, m)
        let step = 2.0 / (m - 1) as f64;

        let mut w = Vec::with_capacity(m);

        w.push(0.0);
        w.extend((1..m - 1).map(|i| {
            let fac = (-1.0 + i as f64 * step).abs();

            (1.0 - fac) * (PI * fac).cos() + FRAC_1_PI * (PI * fac).sin()
        }));
        w.push(0.0);

        w
    })
}
