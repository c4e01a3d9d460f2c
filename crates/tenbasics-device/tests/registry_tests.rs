//! Integration tests for tenbasics-device
//!
//! These tests go through the public API only: registry, lookup, buffers.

use tenbasics_device::{Device, DeviceConfig, DeviceError, DeviceManager, DeviceType};

#[test]
fn test_global_registry_has_cpu() {
    let manager = DeviceManager::global();
    assert!(manager.is_available(DeviceType::Cpu));
    assert_eq!(manager.cpu().device(), Device::cpu());
    assert!(manager.get(Device::cpu()).is_ok());
}

#[test]
fn test_parse_then_lookup() {
    let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));

    let target: Device = "cuda".parse().unwrap();
    let handle = manager.get(target).unwrap();
    assert_eq!(handle.device_type(), DeviceType::Cuda);
    assert!(handle.info().host_backed);

    let missing: Device = "cuda:1".parse().unwrap();
    assert!(matches!(
        manager.get(missing),
        Err(DeviceError::Unavailable { available: 1, .. })
    ));
}

#[test]
fn test_round_trip_through_accelerator() {
    let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));
    let cuda = manager.get(Device::cuda(0)).unwrap();

    let host: Vec<i64> = (0..12).collect();
    let buffer = cuda.upload(&host).unwrap();
    let stats = buffer.stats();
    assert_eq!(stats.h2d_transfers, 1);
    assert_eq!(stats.h2d_bytes, 12 * 8);

    let back = buffer.into_host();
    assert_eq!(back, host);
    assert_eq!(cuda.stats().allocated_bytes, 0);
}

#[test]
fn test_registries_are_independent() {
    let a = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(2));
    let b = DeviceManager::with_config(DeviceConfig::host_only());

    let _buffer = a.cpu().allocate::<f64>(10);
    assert_eq!(a.cpu().stats().allocations, 1);
    assert_eq!(b.cpu().stats().allocations, 0);
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 1);
}
