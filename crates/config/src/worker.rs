//! Worker list and scheduling knobs.

use std::path::Path;

use band_registry::{CpuMask, Device, Identifier, RegistryError};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Default interval between device availability checks.
pub const DEFAULT_AVAILABILITY_CHECK_INTERVAL_MS: u64 = 30_000;

fn default_num_threads() -> u32 {
	1
}

/// One worker: a device, the CPU cores its threads may use, and a thread count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkerSpec {
	pub device: Device,
	#[serde(default)]
	pub cpu_mask: CpuMask,
	#[serde(default = "default_num_threads")]
	pub num_threads: u32,
}

impl WorkerSpec {
	/// Creates a single-threaded worker allowed on every core.
	pub const fn new(device: Device) -> Self {
		Self {
			device,
			cpu_mask: CpuMask::All,
			num_threads: 1,
		}
	}
}

/// Worker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkerConfig {
	/// Whether idle workers may take jobs queued for other workers.
	pub allow_work_steal: bool,
	/// Interval between availability checks of each worker's device.
	pub availability_check_interval_ms: u64,
	/// Workers in scheduling order.
	pub workers: Vec<WorkerSpec>,
}

impl Default for WorkerConfig {
	fn default() -> Self {
		Self {
			allow_work_steal: false,
			availability_check_interval_ms: DEFAULT_AVAILABILITY_CHECK_INTERVAL_MS,
			workers: Device::iter().map(WorkerSpec::new).collect(),
		}
	}
}

impl WorkerConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(
			domain = "config",
			path = %path.display(),
			workers = config.workers.len(),
			"loaded worker config",
		);
		Ok(config)
	}

	/// Builds default workers from raw device codes, e.g. received over FFI.
	///
	/// The first code that names no device aborts the whole list.
	pub fn from_device_codes(codes: &[i32]) -> Result<Self> {
		let workers = codes
			.iter()
			.map(|&code| Device::from_code(code).map(WorkerSpec::new))
			.collect::<std::result::Result<Vec<_>, _>>()
			.map_err(|err| {
				tracing::warn!(domain = "config", code = err.code, "rejected device code");
				RegistryError::from(err)
			})?;

		let config = Self {
			workers,
			..Self::default()
		};
		config.validate()?;
		Ok(config)
	}

	/// Serializes to TOML, writing identifiers by name.
	pub fn to_toml_string(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}

	/// Checks constraints that the types alone do not enforce.
	pub fn validate(&self) -> Result<()> {
		if self.workers.is_empty() {
			return Err(ConfigError::Invalid("at least one worker is required".into()));
		}
		if self.availability_check_interval_ms == 0 {
			return Err(ConfigError::Invalid(
				"availability_check_interval_ms must be positive".into(),
			));
		}
		if let Some(idx) = self.workers.iter().position(|w| w.num_threads == 0) {
			return Err(ConfigError::Invalid(format!(
				"worker {idx} ({}) needs at least one thread",
				self.workers[idx].device
			)));
		}
		Ok(())
	}

	/// Devices in worker order.
	pub fn devices(&self) -> impl Iterator<Item = Device> + '_ {
		self.workers.iter().map(|w| w.device)
	}

	/// Device codes in worker order, as sent across the FFI boundary.
	pub fn device_codes(&self) -> Vec<i32> {
		self.devices().map(Device::code).collect()
	}
}

#[cfg(test)]
mod tests;
