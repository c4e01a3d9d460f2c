//! Device buffers
//!
//! Every registered device is host-backed: buffers keep their elements in a
//! `Vec<T>` and transfers are plain copies. The transfer counters still behave
//! as they would for real device memory, so callers can observe traffic.

use crate::error::{DeviceError, DeviceResult};
use crate::manager::DeviceHandle;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Device buffer holding data on a specific device
pub struct DeviceBuffer<T> {
    /// Buffer data (host-backed)
    data: Vec<T>,
    /// Device this buffer belongs to
    device: Arc<DeviceHandle>,
    /// Buffer size in elements
    size: usize,
    stats: BufferStats,
}

/// Per-buffer transfer counters
#[derive(Default)]
struct BufferStats {
    h2d_transfers: AtomicU64,
    d2h_transfers: AtomicU64,
    h2d_bytes: AtomicU64,
    d2h_bytes: AtomicU64,
}

impl BufferStats {
    fn record_h2d(&self, bytes: u64) {
        self.h2d_transfers.fetch_add(1, Ordering::Relaxed);
        self.h2d_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    fn record_d2h(&self, bytes: u64) {
        self.d2h_transfers.fetch_add(1, Ordering::Relaxed);
        self.d2h_bytes.fetch_add(bytes, Ordering::Relaxed);
    }
}

/// Snapshot of a buffer's transfer counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferStats {
    /// Bytes allocated for the buffer
    pub bytes_allocated: u64,
    /// Number of host->device transfers
    pub h2d_transfers: u64,
    /// Number of device->host transfers
    pub d2h_transfers: u64,
    /// Total bytes transferred to device
    pub h2d_bytes: u64,
    /// Total bytes transferred from device
    pub d2h_bytes: u64,
}

impl<T> DeviceBuffer<T> {
    pub(crate) fn new(device: Arc<DeviceHandle>, size: usize) -> Self {
        let bytes = (size * std::mem::size_of::<T>()) as u64;
        device.record_allocation(bytes);

        Self {
            data: Vec::with_capacity(size),
            device,
            size,
            stats: BufferStats::default(),
        }
    }

    /// Get buffer size in elements
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get buffer size in bytes
    pub fn size_bytes(&self) -> usize {
        self.size * std::mem::size_of::<T>()
    }

    /// Get the device this buffer belongs to
    pub fn device(&self) -> &DeviceHandle {
        &self.device
    }

    /// Whether the buffer holds initialized data
    pub fn is_initialized(&self) -> bool {
        self.data.len() == self.size
    }

    /// Get transfer statistics
    pub fn stats(&self) -> TransferStats {
        TransferStats {
            bytes_allocated: self.size_bytes() as u64,
            h2d_transfers: self.stats.h2d_transfers.load(Ordering::Relaxed),
            d2h_transfers: self.stats.d2h_transfers.load(Ordering::Relaxed),
            h2d_bytes: self.stats.h2d_bytes.load(Ordering::Relaxed),
            d2h_bytes: self.stats.d2h_bytes.load(Ordering::Relaxed),
        }
    }
}

impl<T: Clone> DeviceBuffer<T> {
    /// Copy data from host to device
    ///
    /// # Errors
    ///
    /// [`DeviceError::SizeMismatch`] if `data` is not exactly [`size`](Self::size) long.
    pub fn copy_from_host(&mut self, data: &[T]) -> DeviceResult<()> {
        if data.len() != self.size {
            return Err(DeviceError::SizeMismatch {
                expected: self.size,
                got: data.len(),
            });
        }

        self.data.clear();
        self.data.extend_from_slice(data);

        self.stats.record_h2d(self.size_bytes() as u64);
        Ok(())
    }

    /// Copy data from device to host
    pub fn copy_to_host(&self) -> Vec<T> {
        self.stats.record_d2h(self.size_bytes() as u64);
        self.data.clone()
    }

    /// Move the data back to the host, consuming the buffer
    pub fn into_host(mut self) -> Vec<T> {
        self.stats.record_d2h(self.size_bytes() as u64);
        std::mem::take(&mut self.data)
    }

    /// Fill buffer with a constant value
    pub fn fill(&mut self, value: T) {
        self.data.clear();
        self.data.resize(self.size, value);
    }

    /// Borrow the device-side data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Drop for DeviceBuffer<T> {
    fn drop(&mut self) {
        self.device.record_deallocation(self.size_bytes() as u64);
    }
}
