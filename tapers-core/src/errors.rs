use thiserror::Error;

/// Every failure here is a validation failure. Nothing is retried and no partial window is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    #[error(
        "cannot reliably obtain slepian sequences for M*width > {limit} (M = {m}, width = {width})"
    )]
    SlepianBandwidth { m: usize, width: f64, limit: f64 },
    #[error("the '{0}' window needs one or more parameters -- pass a tuple")]
    MissingParameters(String),
    #[error("unknown window type: '{0}'")]
    UnknownWindow(String),
    #[error("the '{window}' window takes {expected} parameter(s), got {got}")]
    ParameterCount {
        window: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("window parameter is not a number: '{0}'")]
    ParseParameter(String),
}

pub type WindowResult<T> = Result<T, WindowError>;
