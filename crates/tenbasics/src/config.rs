//! Walkthrough configuration
//!
//! | Variable               | Default            | Meaning                           |
//! |------------------------|--------------------|-----------------------------------|
//! | `TENBASICS_DATA`       | `[[1, 2], [3, 4]]` | literal for the first tensors     |
//! | `TENBASICS_RAND_SHAPE` | `3,4`              | shape of the inspected tensor     |
//! | `TENBASICS_DEVICE`     | `cuda`             | transfer target when available    |
//! | `TENBASICS_SEED`       | unset              | seed for the random tensors       |

use anyhow::{bail, Context, Result};
use tenbasics_core::Literal;
use tenbasics_device::Device;

pub const DEFAULT_DATA: &str = "[[1, 2], [3, 4]]";
pub const DEFAULT_RAND_SHAPE: [usize; 2] = [3, 4];

/// Inputs of [`demo::run`](crate::demo::run)
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Literal text for the literal and ndarray tensors
    pub data: String,
    /// Shape of the random tensor whose attributes are printed
    pub rand_shape: Vec<usize>,
    /// Where to move that tensor when its device kind is available
    pub target_device: Device,
    /// Seed for random tensors; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    /// Built from the environment; malformed values are logged and replaced
    /// by their defaults.
    fn default() -> Self {
        let fallback = Self::builtin();
        Self {
            data: lenient("TENBASICS_DATA", parse_data).unwrap_or(fallback.data),
            rand_shape: lenient("TENBASICS_RAND_SHAPE", parse_shape).unwrap_or(fallback.rand_shape),
            target_device: lenient("TENBASICS_DEVICE", parse_device)
                .unwrap_or(fallback.target_device),
            seed: lenient("TENBASICS_SEED", parse_seed).or(fallback.seed),
        }
    }
}

impl DemoConfig {
    /// Built-in values, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            rand_shape: DEFAULT_RAND_SHAPE.to_vec(),
            target_device: Device::cuda(0),
            seed: None,
        }
    }

    /// Read the environment, rejecting malformed values
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::builtin();

        if let Some(value) = lookup("TENBASICS_DATA") {
            config.data = parse_data(&value).context("TENBASICS_DATA")?;
        }
        if let Some(value) = lookup("TENBASICS_RAND_SHAPE") {
            config.rand_shape = parse_shape(&value).context("TENBASICS_RAND_SHAPE")?;
        }
        if let Some(value) = lookup("TENBASICS_DEVICE") {
            config.target_device = parse_device(&value).context("TENBASICS_DEVICE")?;
        }
        if let Some(value) = lookup("TENBASICS_SEED") {
            config.seed = Some(parse_seed(&value).context("TENBASICS_SEED")?);
        }

        Ok(config)
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_rand_shape(mut self, shape: &[usize]) -> Self {
        self.rand_shape = shape.to_vec();
        self
    }

    pub fn with_target_device(mut self, device: Device) -> Self {
        self.target_device = device;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn lenient<T>(key: &str, parse: fn(&str) -> Result<T>) -> Option<T> {
    let value = std::env::var(key).ok()?;
    match parse(&value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(key, value = %value, error = %e, "ignoring malformed setting");
            None
        }
    }
}

/// Validates the literal up front so `run` fails on data, not on config
fn parse_data(value: &str) -> Result<String> {
    Literal::parse(value)?.shape()?;
    Ok(value.trim().to_string())
}

/// `3,4`, `3x4` or `[3, 4]`
pub fn parse_shape(value: &str) -> Result<Vec<usize>> {
    let inner = value
        .trim()
        .trim_start_matches(['[', '('])
        .trim_end_matches([']', ')']);
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let shape = inner
        .split([',', 'x'])
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid dimension '{}'", part.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    let total = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d));
    if total.is_none() {
        bail!("shape {:?} has too many elements", shape);
    }
    Ok(shape)
}

fn parse_device(value: &str) -> Result<Device> {
    Ok(value.parse::<Device>()?)
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("invalid seed '{}'", value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_builtin_values() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::builtin());
        assert_eq!(config.data, "[[1, 2], [3, 4]]");
        assert_eq!(config.rand_shape, vec![3, 4]);
        assert_eq!(config.target_device, Device::cuda(0));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("TENBASICS_DATA", " [0.5, 1.5] "),
            ("TENBASICS_RAND_SHAPE", "2x5"),
            ("TENBASICS_DEVICE", "CUDA:1"),
            ("TENBASICS_SEED", "7"),
        ]))
        .unwrap();

        assert_eq!(config.data, "[0.5, 1.5]");
        assert_eq!(config.rand_shape, vec![2, 5]);
        assert_eq!(config.target_device, Device::cuda(1));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_malformed_values_are_errors() {
        for (key, value) in [
            ("TENBASICS_DATA", "[[1, 2], [3]]"),
            ("TENBASICS_DATA", "not json"),
            ("TENBASICS_RAND_SHAPE", "3,four"),
            ("TENBASICS_DEVICE", "tpu"),
            ("TENBASICS_SEED", "-1"),
        ] {
            let err = DemoConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(format!("{:#}", err).contains(key), "{key}={value}: {err:#}");
        }
    }

    #[test]
    fn test_parse_shape_forms() {
        assert_eq!(parse_shape("3,4").unwrap(), vec![3, 4]);
        assert_eq!(parse_shape("[3, 4]").unwrap(), vec![3, 4]);
        assert_eq!(parse_shape("(2, 3, 4)").unwrap(), vec![2, 3, 4]);
        assert_eq!(parse_shape("7").unwrap(), vec![7]);
        assert_eq!(parse_shape("[]").unwrap(), Vec::<usize>::new());
        assert!(parse_shape("3,,4").is_err());
        assert!(parse_shape(&format!("{},{}", usize::MAX, 2)).is_err());
    }

    #[test]
    fn test_builders() {
        let config = DemoConfig::builtin()
            .with_data("[1]")
            .with_rand_shape(&[2])
            .with_target_device(Device::cpu())
            .with_seed(3);
        assert_eq!(config.data, "[1]");
        assert_eq!(config.rand_shape, vec![2]);
        assert_eq!(config.target_device, Device::cpu());
        assert_eq!(config.seed, Some(3));
    }
}
