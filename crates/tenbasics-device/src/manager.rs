//! Device registry
//!
//! The [`DeviceManager`] decides which [`Device`] locations exist. The CPU is
//! always registered. Accelerators come from two sources:
//!
//! - hardware detection (Linux: one CUDA device per entry of
//!   `/proc/driver/nvidia/gpus`)
//! - virtual accelerators requested through [`DeviceConfig`]
//!
//! All devices are host-backed: their buffers live in host memory.
//!
//! # Environment Variables
//!
//! - `TENBASICS_VIRTUAL_CUDA`: number of virtual CUDA devices to register (default: 0)
//! - `TENBASICS_DETECT_DEVICES`: set to `0` or `false` to skip hardware detection

use crate::buffer::DeviceBuffer;
use crate::device::{Device, DeviceType};
use crate::error::{DeviceError, DeviceResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[cfg(target_os = "linux")]
const NVIDIA_PROC_DIR: &str = "/proc/driver/nvidia/gpus";

/// Device information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Location of the device
    pub device: Device,
    /// Device name
    pub name: String,
    /// Total memory in bytes
    pub total_memory: usize,
    /// Available memory in bytes
    pub available_memory: usize,
    /// Number of compute units / streaming multiprocessors
    pub compute_units: usize,
    /// Whether buffers on this device live in host memory
    pub host_backed: bool,
}

/// Device enumeration policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Query the operating system for accelerators
    pub detect_hardware: bool,
    /// Number of host-backed CUDA devices to register after detection
    pub virtual_accelerators: usize,
}

impl DeviceConfig {
    /// CPU only: no detection, no virtual accelerators
    pub fn host_only() -> Self {
        Self {
            detect_hardware: false,
            virtual_accelerators: 0,
        }
    }

    /// CPU plus `count` virtual CUDA devices, no detection
    pub fn with_virtual_accelerators(count: usize) -> Self {
        Self {
            detect_hardware: false,
            virtual_accelerators: count,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        let virtual_accelerators = match std::env::var("TENBASICS_VIRTUAL_CUDA") {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %value, "ignoring malformed TENBASICS_VIRTUAL_CUDA");
                0
            }),
            Err(_) => 0,
        };

        let detect_hardware = std::env::var("TENBASICS_DETECT_DEVICES")
            .map(|s| !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            detect_hardware,
            virtual_accelerators,
        }
    }
}

/// A registered device with its allocation statistics
pub struct DeviceHandle {
    info: DeviceInfo,
    stats: DeviceStats,
}

#[derive(Default)]
struct DeviceStats {
    allocations: AtomicU64,
    deallocations: AtomicU64,
    allocated_bytes: AtomicU64,
    peak_bytes: AtomicU64,
}

/// Device statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceStatsSnapshot {
    /// Total allocations
    pub allocations: u64,
    /// Total deallocations
    pub deallocations: u64,
    /// Current allocated bytes
    pub allocated_bytes: u64,
    /// Peak allocated bytes
    pub peak_bytes: u64,
}

impl DeviceHandle {
    fn new(info: DeviceInfo) -> Arc<Self> {
        Arc::new(Self {
            info,
            stats: DeviceStats::default(),
        })
    }

    /// Get device information
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Location of this device
    pub fn device(&self) -> Device {
        self.info.device
    }

    /// Get device type
    pub fn device_type(&self) -> DeviceType {
        self.info.device.device_type()
    }

    /// Allocate an uninitialized buffer of `size` elements
    pub fn allocate<T: Clone>(self: &Arc<Self>, size: usize) -> DeviceBuffer<T> {
        DeviceBuffer::new(self.clone(), size)
    }

    /// Allocate and fill buffer
    pub fn allocate_filled<T: Clone>(self: &Arc<Self>, size: usize, value: T) -> DeviceBuffer<T> {
        let mut buffer = self.allocate(size);
        buffer.fill(value);
        buffer
    }

    /// Allocate a buffer sized to `data` and copy `data` into it
    pub fn upload<T: Clone>(self: &Arc<Self>, data: &[T]) -> DeviceResult<DeviceBuffer<T>> {
        let mut buffer = self.allocate(data.len());
        buffer.copy_from_host(data)?;
        tracing::trace!(
            device = %self.device(),
            bytes = buffer.size_bytes(),
            "uploaded host data"
        );
        Ok(buffer)
    }

    /// Get device statistics
    pub fn stats(&self) -> DeviceStatsSnapshot {
        DeviceStatsSnapshot {
            allocations: self.stats.allocations.load(Ordering::Relaxed),
            deallocations: self.stats.deallocations.load(Ordering::Relaxed),
            allocated_bytes: self.stats.allocated_bytes.load(Ordering::Relaxed),
            peak_bytes: self.stats.peak_bytes.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_allocation(&self, bytes: u64) {
        self.stats.allocations.fetch_add(1, Ordering::Relaxed);
        let new_allocated = self.stats.allocated_bytes.fetch_add(bytes, Ordering::Relaxed) + bytes;
        self.stats.peak_bytes.fetch_max(new_allocated, Ordering::Relaxed);
    }

    pub(crate) fn record_deallocation(&self, bytes: u64) {
        self.stats.deallocations.fetch_add(1, Ordering::Relaxed);
        self.stats.allocated_bytes.fetch_sub(bytes, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("info", &self.info)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Registry of available devices
pub struct DeviceManager {
    /// Available devices, CPU first
    devices: Vec<Arc<DeviceHandle>>,
}

lazy_static::lazy_static! {
    static ref GLOBAL_MANAGER: DeviceManager = DeviceManager::new();
}

impl DeviceManager {
    /// Create a device manager from [`DeviceConfig::default`]
    pub fn new() -> Self {
        Self::with_config(DeviceConfig::default())
    }

    /// Create a device manager with an explicit enumeration policy
    pub fn with_config(config: DeviceConfig) -> Self {
        let total_memory = system_memory();
        let available_memory = available_memory().min(total_memory);

        let mut devices = vec![DeviceHandle::new(DeviceInfo {
            device: Device::cpu(),
            name: "CPU".to_string(),
            total_memory,
            available_memory,
            compute_units: num_cpus::get(),
            host_backed: true,
        })];

        let mut cuda_names = Vec::new();
        if config.detect_hardware {
            cuda_names.extend(detect_cuda_devices());
        }
        for i in 0..config.virtual_accelerators {
            cuda_names.push(format!("Virtual CUDA device {}", i));
        }

        for (index, name) in cuda_names.into_iter().enumerate() {
            devices.push(DeviceHandle::new(DeviceInfo {
                device: Device::cuda(index),
                name,
                total_memory,
                available_memory,
                compute_units: num_cpus::get(),
                host_backed: true,
            }));
        }

        tracing::info!(
            devices = devices.len(),
            cuda = devices.len() - 1,
            detect_hardware = config.detect_hardware,
            "device registry initialized"
        );

        Self { devices }
    }

    /// Process-wide registry, created on first use from the environment
    pub fn global() -> &'static DeviceManager {
        &GLOBAL_MANAGER
    }

    /// Get number of registered devices
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Always false: the CPU is always registered
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Number of registered devices of a kind
    pub fn device_count(&self, device_type: DeviceType) -> usize {
        self.devices
            .iter()
            .filter(|d| d.device_type() == device_type)
            .count()
    }

    /// Whether at least one device of this kind is registered
    pub fn is_available(&self, device_type: DeviceType) -> bool {
        self.device_count(device_type) > 0
    }

    /// Whether at least one CUDA device is registered
    pub fn cuda_is_available(&self) -> bool {
        self.is_available(DeviceType::Cuda)
    }

    /// The host CPU device
    pub fn cpu(&self) -> Arc<DeviceHandle> {
        self.devices[0].clone()
    }

    /// Look up a registered device by location
    pub fn get(&self, device: Device) -> DeviceResult<Arc<DeviceHandle>> {
        self.devices
            .iter()
            .find(|d| d.device() == device)
            .cloned()
            .ok_or_else(|| DeviceError::Unavailable {
                device,
                kind: device.device_type(),
                available: self.device_count(device.device_type()),
            })
    }

    /// Get device by registry index
    pub fn device(&self, index: usize) -> DeviceResult<Arc<DeviceHandle>> {
        self.devices
            .get(index)
            .cloned()
            .ok_or(DeviceError::IndexOutOfRange {
                index,
                count: self.devices.len(),
            })
    }

    /// Get best available device
    ///
    /// Prefers accelerators over CPU, and devices with more memory
    pub fn best_device(&self) -> Arc<DeviceHandle> {
        let mut best = self.cpu();

        for device in &self.devices {
            if device.device_type().is_accelerator() && !best.device_type().is_accelerator() {
                best = device.clone();
                continue;
            }

            if device.device_type() == best.device_type()
                && device.info().available_memory > best.info().available_memory
            {
                best = device.clone();
            }
        }

        best
    }

    /// List all devices
    pub fn list_devices(&self) -> Vec<DeviceInfo> {
        self.devices.iter().map(|d| d.info().clone()).collect()
    }
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of NVIDIA GPUs exposed by the kernel driver
#[cfg(target_os = "linux")]
fn detect_cuda_devices() -> Vec<String> {
    let entries = match std::fs::read_dir(NVIDIA_PROC_DIR) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut gpus: Vec<(String, String)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let bus_id = entry.file_name().to_string_lossy().into_owned();
            let name = std::fs::read_to_string(entry.path().join("information"))
                .ok()
                .and_then(|info| parse_gpu_model(&info))
                .unwrap_or_else(|| format!("NVIDIA GPU {}", bus_id));
            (bus_id, name)
        })
        .collect();

    // Ordinals follow PCI bus order
    gpus.sort();
    gpus.into_iter().map(|(_, name)| name).collect()
}

#[cfg(not(target_os = "linux"))]
fn detect_cuda_devices() -> Vec<String> {
    Vec::new()
}

/// Extract the `Model:` line of a driver information file
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_gpu_model(information: &str) -> Option<String> {
    information.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == "Model").then(|| value.trim().to_string())
    })
}

/// Read a `/proc/meminfo` field in bytes
#[cfg(target_os = "linux")]
fn meminfo_bytes(field: &str) -> Option<usize> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    meminfo.lines().find_map(|line| {
        let rest = line.strip_prefix(field)?.strip_prefix(':')?;
        let kb = rest.split_whitespace().next()?.parse::<usize>().ok()?;
        Some(kb * 1024)
    })
}

/// Get total system memory in bytes
fn system_memory() -> usize {
    #[cfg(target_os = "linux")]
    {
        if let Some(bytes) = meminfo_bytes("MemTotal") {
            return bytes;
        }
    }

    // Fallback: 16 GB
    16 * 1024 * 1024 * 1024
}

/// Get available system memory in bytes
fn available_memory() -> usize {
    #[cfg(target_os = "linux")]
    {
        if let Some(bytes) = meminfo_bytes("MemAvailable") {
            return bytes;
        }
    }

    // Fallback: assume 50% available
    system_memory() / 2
}
