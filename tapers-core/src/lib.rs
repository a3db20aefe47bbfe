//! Window functions for spectral analysis and filter design.
//!
//! Every generator takes a length, its shape parameters, and `sym`. `sym = true` gives a symmetric window for
//! filter design. `sym = false` gives a periodic window for use before an FFT.
//!
//! [`resolve`] picks a window by name.
pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod windows;

pub use dispatch::{WindowKind, WindowSpec, resolve};
pub use errors::{WindowError, WindowResult};
pub use windows::*;
