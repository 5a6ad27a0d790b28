//! Worker configuration for the band runtime.
//!
//! A worker is one execution lane bound to a [`Device`]. The configuration
//! lists workers and a few scheduling knobs, and is written in TOML:
//!
//! ```toml
//! allow_work_steal = true
//! availability_check_interval_ms = 15000
//!
//! [[workers]]
//! device = "CPU"
//! cpu_mask = "BIG"
//! num_threads = 4
//!
//! [[workers]]
//! device = 1   # GPU, by code
//! ```
//!
//! `device` and `cpu_mask` accept either the symbolic name (any ASCII case)
//! or the integer code. Anything that does not resolve is rejected while
//! parsing. Omitted fields fall back to [`WorkerConfig::default`], which runs
//! one single-threaded worker per device.
//!
//! [`Device`]: band_registry::Device

pub mod error;
pub mod worker;

pub use error::{ConfigError, Result};
pub use worker::{DEFAULT_AVAILABILITY_CHECK_INTERVAL_MS, WorkerConfig, WorkerSpec};
