//! Pick a window by name
//!
//! `"hann"`, `("kaiser", 14.0)` and `8.6` are all window specs. [`resolve`] turns one into samples.
use core::fmt;
use core::str::FromStr;

use crate::errors::{WindowError, WindowResult};
use crate::logging::{debug, warn};
use crate::windows::{
    barthann, bartlett, blackman, blackmanharris, bohman, boxcar, chebwin, flattop, gaussian,
    general_gaussian, hamming, hann, kaiser, nuttall, parzen, slepian, triang,
};

/// Every window family we know how to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowKind {
    Boxcar,
    Triang,
    Parzen,
    Bohman,
    Blackman,
    Nuttall,
    BlackmanHarris,
    Flattop,
    Bartlett,
    Hann,
    BartHann,
    Hamming,
    /// needs `beta`
    Kaiser,
    /// needs `std`
    Gaussian,
    /// needs `p` and `sig`
    GeneralGaussian,
    /// needs `width`
    Slepian,
    /// needs `at` (attenuation in dB)
    Chebwin,
}

impl WindowKind {
    pub const ALL: [WindowKind; 17] = [
        Self::Boxcar,
        Self::Triang,
        Self::Parzen,
        Self::Bohman,
        Self::Blackman,
        Self::Nuttall,
        Self::BlackmanHarris,
        Self::Flattop,
        Self::Bartlett,
        Self::Hann,
        Self::BartHann,
        Self::Hamming,
        Self::Kaiser,
        Self::Gaussian,
        Self::GeneralGaussian,
        Self::Slepian,
        Self::Chebwin,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Boxcar => "boxcar",
            Self::Triang => "triang",
            Self::Parzen => "parzen",
            Self::Bohman => "bohman",
            Self::Blackman => "blackman",
            Self::Nuttall => "nuttall",
            Self::BlackmanHarris => "blackmanharris",
            Self::Flattop => "flattop",
            Self::Bartlett => "bartlett",
            Self::Hann => "hann",
            Self::BartHann => "barthann",
            Self::Hamming => "hamming",
            Self::Kaiser => "kaiser",
            Self::Gaussian => "gaussian",
            Self::GeneralGaussian => "general_gaussian",
            Self::Slepian => "slepian",
            Self::Chebwin => "chebwin",
        }
    }

    /// Every accepted spelling. Case-sensitive.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Boxcar => &["boxcar", "box", "ones", "rect", "rectangular"],
            Self::Triang => &["triangle", "triang", "tri"],
            Self::Parzen => &["parzen", "parz", "par"],
            Self::Bohman => &["bohman", "bman", "bmn"],
            Self::Blackman => &["blackman", "black", "blk"],
            Self::Nuttall => &["nuttall", "nutl", "nut"],
            Self::BlackmanHarris => &["blackmanharris", "blackharr", "bkh"],
            Self::Flattop => &["flattop", "flat", "flt"],
            Self::Bartlett => &["bartlett", "bart", "brt"],
            Self::Hann => &["hanning", "hann", "han"],
            Self::BartHann => &["barthann", "brthan", "bth"],
            Self::Hamming => &["hamming", "hamm", "ham"],
            Self::Kaiser => &["kaiser", "ksr"],
            Self::Gaussian => &["gaussian", "gauss", "gss"],
            Self::GeneralGaussian => &[
                "general gaussian",
                "general_gaussian",
                "general gauss",
                "general_gauss",
                "ggs",
            ],
            Self::Slepian => &["slepian", "slep", "optimal", "dpss", "dss"],
            Self::Chebwin => &["chebwin", "cheb"],
        }
    }

    /// how many shape parameters go between the length and the symmetry flag
    pub const fn arity(self) -> usize {
        match self {
            Self::GeneralGaussian => 2,
            Self::Kaiser | Self::Gaussian | Self::Slepian | Self::Chebwin => 1,
            _ => 0,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.aliases().contains(&name))
    }

    /// Build the window. `params` must have exactly [`arity`](Self::arity) values.
    pub fn generate(self, m: usize, params: &[f64], sym: bool) -> WindowResult<Vec<f64>> {
        let w = match (self, params) {
            (Self::Boxcar, []) => boxcar(m, sym),
            (Self::Triang, []) => triang(m, sym),
            (Self::Parzen, []) => parzen(m, sym),
            (Self::Bohman, []) => bohman(m, sym),
            (Self::Blackman, []) => blackman(m, sym),
            (Self::Nuttall, []) => nuttall(m, sym),
            (Self::BlackmanHarris, []) => blackmanharris(m, sym),
            (Self::Flattop, []) => flattop(m, sym),
            (Self::Bartlett, []) => bartlett(m, sym),
            (Self::Hann, []) => hann(m, sym),
            (Self::BartHann, []) => barthann(m, sym),
            (Self::Hamming, []) => hamming(m, sym),
            (Self::Kaiser, &[beta]) => kaiser(m, beta, sym),
            (Self::Gaussian, &[std]) => gaussian(m, std, sym),
            (Self::GeneralGaussian, &[p, sig]) => general_gaussian(m, p, sig, sym),
            (Self::Slepian, &[width]) => slepian(m, width, sym)?,
            (Self::Chebwin, &[at]) => chebwin(m, at, sym)?,
            (kind, params) => {
                warn!(
                    "{} takes {} parameter(s). got {}",
                    kind.name(),
                    kind.arity(),
                    params.len()
                );

                return Err(WindowError::ParameterCount {
                    window: kind.name(),
                    expected: kind.arity(),
                    got: params.len(),
                });
            }
        };

        Ok(w)
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What window to build.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowSpec {
    /// Just a name. Only works for windows that don't need parameters.
    Name(String),
    /// A name followed by the window's shape parameters.
    WithParams(String, Vec<f64>),
    /// A bare number is the `beta` of a Kaiser window.
    KaiserBeta(f64),
}

impl WindowSpec {
    /// Find the window family and its parameters. No samples are computed.
    ///
    /// # Errors
    ///
    /// - [`WindowError::UnknownWindow`] if the name is not in the alias table
    /// - [`WindowError::MissingParameters`] if a bare name needs parameters
    pub fn lookup(&self) -> WindowResult<(WindowKind, Vec<f64>)> {
        match self {
            Self::KaiserBeta(beta) => Ok((WindowKind::Kaiser, vec![*beta])),
            Self::Name(name) => {
                // a name that is really a number is a kaiser beta, same as the bare number
                if let Ok(beta) = name.trim().parse::<f64>() {
                    return Ok((WindowKind::Kaiser, vec![beta]));
                }

                let kind = lookup_name(name)?;

                if kind.arity() > 0 {
                    warn!("{} needs {} parameter(s)", kind.name(), kind.arity());

                    return Err(WindowError::MissingParameters(name.clone()));
                }

                Ok((kind, vec![]))
            }
            Self::WithParams(name, params) => Ok((lookup_name(name)?, params.clone())),
        }
    }
}

fn lookup_name(name: &str) -> WindowResult<WindowKind> {
    WindowKind::from_name(name).ok_or_else(|| {
        warn!("unknown window type");

        WindowError::UnknownWindow(name.to_string())
    })
}

impl From<f64> for WindowSpec {
    fn from(beta: f64) -> Self {
        Self::KaiserBeta(beta)
    }
}

impl From<&str> for WindowSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for WindowSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<(&str, f64)> for WindowSpec {
    fn from((name, a): (&str, f64)) -> Self {
        Self::WithParams(name.to_string(), vec![a])
    }
}

impl From<(&str, f64, f64)> for WindowSpec {
    fn from((name, a, b): (&str, f64, f64)) -> Self {
        Self::WithParams(name.to_string(), vec![a, b])
    }
}

/// `hann`, `kaiser,14`, `general_gaussian, 1.5, 7` or `8.6`
impl FromStr for WindowSpec {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);

        let name = parts.next().unwrap_or_default();

        let params = parts
            .map(|p| {
                p.parse::<f64>()
                    .map_err(|_| WindowError::ParseParameter(p.to_string()))
            })
            .collect::<WindowResult<Vec<f64>>>()?;

        if !params.is_empty() {
            return Ok(Self::WithParams(name.to_string(), params));
        }

        match name.parse::<f64>() {
            Ok(beta) => Ok(Self::KaiserBeta(beta)),
            Err(_) => Ok(Self::Name(name.to_string())),
        }
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::WithParams(name, params) => {
                f.write_str(name)?;
                for p in params {
                    write!(f, ",{}", p)?;
                }
                Ok(())
            }
            Self::KaiserBeta(beta) => write!(f, "{}", beta),
        }
    }
}

/// Return a window of length `length` described by `spec`.
///
/// `periodic = true` (the usual choice) gives a window ready to multiply with samples before an FFT.
/// `periodic = false` gives the symmetric window used for filter design.
///
/// ```
/// use tapers_core::{resolve, kaiser, WindowSpec};
///
/// let w = resolve(&WindowSpec::from(("kaiser", 4.0)), 9, true).unwrap();
/// assert_eq!(w, kaiser(9, 4.0, false));
/// ```
pub fn resolve(spec: &WindowSpec, length: usize, periodic: bool) -> WindowResult<Vec<f64>> {
    let sym = !periodic;

    let (kind, params) = spec.lookup()?;

    debug!(
        "resolved window: kind={} length={} sym={}",
        kind.name(),
        length,
        sym
    );

    kind.generate(length, &params, sym)
}
