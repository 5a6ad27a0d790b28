use band_registry::{CpuMask, Device, RegistryError};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn default_runs_one_worker_per_device() {
	let config = WorkerConfig::default();
	assert_eq!(config.devices().collect::<Vec<_>>(), Device::all());
	assert!(config.workers.iter().all(|w| w.cpu_mask == CpuMask::All && w.num_threads == 1));
	assert!(!config.allow_work_steal);
	assert_eq!(config.availability_check_interval_ms, 30_000);
	config.validate().unwrap();
}

#[test]
fn empty_document_is_default() {
	assert_eq!(WorkerConfig::from_toml_str("").unwrap(), WorkerConfig::default());
}

#[test]
fn parses_names_and_codes() {
	let config = WorkerConfig::from_toml_str(
		r#"
allow_work_steal = true
availability_check_interval_ms = 15000

[[workers]]
device = "CPU"
cpu_mask = "big"
num_threads = 4

[[workers]]
device = 1

[[workers]]
device = "npu"
cpu_mask = 3
"#,
	)
	.unwrap();

	assert_eq!(
		config,
		WorkerConfig {
			allow_work_steal: true,
			availability_check_interval_ms: 15_000,
			workers: vec![
				WorkerSpec {
					device: Device::Cpu,
					cpu_mask: CpuMask::Big,
					num_threads: 4,
				},
				WorkerSpec::new(Device::Gpu),
				WorkerSpec {
					device: Device::Npu,
					cpu_mask: CpuMask::Primary,
					num_threads: 1,
				},
			],
		}
	);
	assert_eq!(config.device_codes(), vec![0, 1, 3]);
}

#[rstest]
#[case("[[workers]]\ndevice = 9", "invalid device code: 9")]
#[case("[[workers]]\ndevice = -1", "invalid device code: -1")]
#[case("[[workers]]\ndevice = \"TPU\"", r#"unknown device name: "TPU""#)]
#[case("[[workers]]\ndevice = \"CPU\"\ncpu_mask = 4", "invalid cpu_mask code: 4")]
#[case("[[workers]]\ndevice = \"CPU\"\ncpu_mask = \"medium\"", r#"unknown cpu_mask name: "medium""#)]
fn rejects_bad_identifiers(#[case] input: &str, #[case] message: &str) {
	let err = WorkerConfig::from_toml_str(input).unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
	assert!(err.to_string().contains(message), "{err}");
}

#[test]
fn rejects_unknown_fields() {
	let err = WorkerConfig::from_toml_str("[[workers]]\ndevice = \"CPU\"\ncpu_masks = \"BIG\"").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
}

#[test]
fn worker_requires_device() {
	let err = WorkerConfig::from_toml_str("[[workers]]\nnum_threads = 2").unwrap_err();
	assert!(err.to_string().contains("device"), "{err}");
}

#[rstest]
#[case("workers = []", "at least one worker")]
#[case("availability_check_interval_ms = 0", "must be positive")]
#[case("[[workers]]\ndevice = \"DSP\"\nnum_threads = 0", "worker 0 (DSP) needs at least one thread")]
fn rejects_invalid_values(#[case] input: &str, #[case] message: &str) {
	let err = WorkerConfig::from_toml_str(input).unwrap_err();
	assert!(matches!(err, ConfigError::Invalid(_)), "{err:?}");
	assert!(err.to_string().contains(message), "{err}");
}

#[test]
fn from_device_codes_builds_default_workers() {
	let config = WorkerConfig::from_device_codes(&[3, 0, 0]).unwrap();
	assert_eq!(config.devices().collect::<Vec<_>>(), vec![Device::Npu, Device::Cpu, Device::Cpu]);
	assert_eq!(config.device_codes(), vec![3, 0, 0]);
	assert_eq!(config.availability_check_interval_ms, DEFAULT_AVAILABILITY_CHECK_INTERVAL_MS);
}

#[test]
fn from_device_codes_rejects_invalid_code() {
	let err = WorkerConfig::from_device_codes(&[0, 4, 1]).unwrap_err();
	match err {
		ConfigError::Registry(RegistryError::InvalidCode(invalid)) => {
			assert_eq!(invalid.registry, "device");
			assert_eq!(invalid.code, 4);
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn from_device_codes_rejects_empty_list() {
	assert!(matches!(WorkerConfig::from_device_codes(&[]), Err(ConfigError::Invalid(_))));
}

#[test]
fn writes_identifiers_by_name() {
	let config = WorkerConfig {
		allow_work_steal: true,
		availability_check_interval_ms: 100,
		workers: vec![WorkerSpec {
			device: Device::Dsp,
			cpu_mask: CpuMask::Little,
			num_threads: 2,
		}],
	};

	let text = config.to_toml_string().unwrap();
	assert!(text.contains(r#"device = "DSP""#), "{text}");
	assert!(text.contains(r#"cpu_mask = "LITTLE""#), "{text}");
	assert_eq!(WorkerConfig::from_toml_str(&text).unwrap(), config);
}
