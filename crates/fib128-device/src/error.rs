//! Device error type.

use fib128_core::FibError;

/// Errors returned by the device front end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Another session is already open.
    #[error("device is in use")]
    Busy,

    /// The calculation behind a read failed.
    #[error(transparent)]
    Fib(#[from] FibError),
}
