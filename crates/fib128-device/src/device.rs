//! Device registration and exclusive session handout.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use fib128_core::calculator::{Calculator, FibCalculator, FibError};
use fib128_core::fastdoubling::FastDoubling;
use fib128_core::format::{format, DecimalBuffer};
use fib128_core::observers::LoggingObserver;
use fib128_core::options::Options;

use crate::error::DeviceError;
use crate::session::Session;

/// Name the device registers under.
pub const DEVICE_NAME: &str = "fibonacci";

/// A registered Fibonacci device.
///
/// Only one [`Session`] may be open at a time. Opening a second one fails
/// immediately with [`DeviceError::Busy`] instead of waiting. Reads need
/// `&mut Session`, so the session lock alone serializes computations.
pub struct FibDevice {
    name: String,
    calculator: Arc<dyn Calculator>,
    options: Options,
    session_lock: Mutex<()>,
}

impl FibDevice {
    /// Register a device backed by the fast doubling engine.
    #[must_use]
    pub fn register(name: impl Into<String>, options: Options) -> Self {
        let calculator = Arc::new(FibCalculator::new(Arc::new(FastDoubling::new())));
        Self::with_calculator(name, calculator, options)
    }

    /// Register a device backed by any calculator.
    #[must_use]
    pub fn with_calculator(
        name: impl Into<String>,
        calculator: Arc<dyn Calculator>,
        options: Options,
    ) -> Self {
        let name = name.into();
        let options = options.normalize();
        info!(
            device = %name,
            algorithm = calculator.name(),
            max_index = options.max_index,
            "Device registered"
        );
        Self {
            name,
            calculator,
            options,
            session_lock: Mutex::new(()),
        }
    }

    /// Open the exclusive session.
    pub fn open(&self) -> Result<Session<'_>, DeviceError> {
        let Some(guard) = self.session_lock.try_lock() else {
            warn!(device = %self.name, "Device is in use");
            return Err(DeviceError::Busy);
        };
        debug!(device = %self.name, "Session opened");
        Ok(Session::new(self, guard))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Highest position a session can seek to.
    #[must_use]
    pub fn max_index(&self) -> u64 {
        self.options.max_index
    }

    /// Compute and format F(index).
    pub(crate) fn render(&self, index: i64) -> Result<DecimalBuffer, FibError> {
        let value = self
            .calculator
            .calculate(&LoggingObserver::new(), 0, index, &self.options)?;
        Ok(format(value))
    }
}

impl Drop for FibDevice {
    fn drop(&mut self) {
        info!(device = %self.name, "Device unregistered");
    }
}
