#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

#[cfg(all(feature = "defmt", not(feature = "log")))]
pub use defmt::{debug, error, info, trace, warn};

/// neither backend is enabled. swallow everything so the call sites don't need their own cfgs
#[cfg(not(any(feature = "log", feature = "defmt")))]
mod noop {
    macro_rules! noop {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use noop as debug;
    pub(crate) use noop as error;
    pub(crate) use noop as info;
    pub(crate) use noop as trace;
    pub(crate) use noop as warn;
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
#[allow(unused_imports)]
pub(crate) use noop::{debug, error, info, trace, warn};
