//! Error handling and exit codes.

use fib128_core::calculator::FibError;
use fib128_core::constants::exit_codes;
use fib128_device::DeviceError;

/// Exit code for a calculation error.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Overflow(_) => exit_codes::ERROR_OVERFLOW,
        FibError::InvalidIndex { .. } => exit_codes::ERROR_INVALID_INDEX,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
        FibError::Calculation(_) | FibError::DivisionByZero => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error surfacing from [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(fib) = err.downcast_ref::<FibError>() {
        return handle_error(fib);
    }
    match err.downcast_ref::<DeviceError>() {
        Some(DeviceError::Busy) => exit_codes::ERROR_BUSY,
        Some(DeviceError::Fib(fib)) => handle_error(fib),
        None => exit_codes::ERROR_GENERIC,
    }
}
