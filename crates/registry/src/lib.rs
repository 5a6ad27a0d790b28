//! Closed identifier sets shared across the band runtime.
//!
//! Every set is a fieldless `#[repr(i32)]` enum whose members carry a stable
//! integer code. The code is what crosses foreign-function and wire
//! boundaries; the symbolic name is what configuration files use.
//!
//! # Sets
//!
//! - [`BackendType`] - execution backends (`TFLITE`)
//! - [`Device`] - hardware device classes (`CPU`, `GPU`, `DSP`, `NPU`)
//! - [`CpuMask`] - CPU cluster masks (`ALL`, `LITTLE`, `BIG`, `PRIMARY`)
//!
//! # Lookups
//!
//! All sets implement [`Identifier`]:
//!
//! ```
//! use band_registry::{Device, Identifier};
//!
//! assert_eq!(Device::Gpu.code(), 1);
//! assert_eq!(Device::from_code(3), Ok(Device::Npu));
//! assert!(Device::from_code(4).is_err());
//! assert_eq!(Device::all(), &[Device::Cpu, Device::Gpu, Device::Dsp, Device::Npu]);
//! ```
//!
//! # Adding a member
//!
//! Append a variant with the next unused code. Existing codes are never
//! reassigned: peers may have persisted or hard-coded them. Declaring a code
//! out of order or leaving a gap fails to compile.
//!
//! The tables are compile-time constants, so lookups need no initialization
//! and are safe to call from any thread without synchronization.

#[macro_use]
mod macros;

mod backend;
pub mod codec;
mod cpu_mask;
mod device;
mod error;
mod identifier;

pub use backend::BackendType;
pub use cpu_mask::CpuMask;
pub use device::Device;
pub use error::{InvalidCodeError, RegistryError, UnknownNameError};
pub use identifier::Identifier;
