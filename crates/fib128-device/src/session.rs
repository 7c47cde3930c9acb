//! Exclusive device session: position, seek, read and write.

use std::io::{self, SeekFrom};

use parking_lot::MutexGuard;
use tracing::{debug, trace};

use crate::device::FibDevice;
use crate::error::DeviceError;

/// An open handle on a [`FibDevice`].
///
/// The position is the Fibonacci index the next read returns. It always
/// stays within `0..=max_index`.
pub struct Session<'a> {
    device: &'a FibDevice,
    position: u64,
    _guard: MutexGuard<'a, ()>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(device: &'a FibDevice, guard: MutexGuard<'a, ()>) -> Self {
        Self {
            device,
            position: 0,
            _guard: guard,
        }
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Move the position and return it.
    ///
    /// Targets outside `0..=max_index` are clamped. `SeekFrom::End(d)` is
    /// relative to `max_index`.
    pub fn seek_index(&mut self, pos: SeekFrom) -> u64 {
        let max = self.device.max_index();
        let target = match pos {
            SeekFrom::Start(offset) => offset,
            SeekFrom::Current(delta) => self.position.saturating_add_signed(delta),
            SeekFrom::End(delta) => max.saturating_add_signed(delta),
        };
        self.position = target.min(max);
        trace!(position = self.position, "Seek");
        self.position
    }

    /// Compute F(position) and copy its decimal record into `buf`.
    ///
    /// The record is the digits followed by a NUL byte, truncated to the
    /// buffer length. Returns the number of digit bytes copied. The position
    /// is left unchanged.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let index = i64::try_from(self.position).unwrap_or(i64::MAX);
        let digits = self.device.render(index)?;
        let record = digits.to_record();
        let copied = buf.len().min(digits.len() + 1);
        buf[..copied].copy_from_slice(&record[..copied]);
        Ok(copied.min(digits.len()))
    }

    /// Writes are accepted and discarded.
    pub fn write(&mut self, _buf: &[u8]) -> usize {
        1
    }
}

impl io::Seek for Session<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Ok(self.seek_index(pos))
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        debug!(device = self.device.name(), "Session closed");
    }
}
