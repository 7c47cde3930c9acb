//! # fib128-device
//!
//! In-process character-device front end for the Fibonacci engine. A device
//! hands out one session at a time; the session position is the requested
//! index and a read returns the decimal result as a NUL-terminated record.

pub mod device;
pub mod error;
pub mod session;

pub use device::{FibDevice, DEVICE_NAME};
pub use error::DeviceError;
pub use session::Session;
