//! Serde support for identifier sets.
//!
//! By default an identifier serializes as its symbolic name and deserializes
//! from either a name or an integer code, which suits hand-written config
//! files. Wire payloads that only carry numbers use [`as_code`]:
//!
//! ```
//! use band_registry::Device;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Placement {
//! 	#[serde(with = "band_registry::codec::as_code")]
//! 	device: Device,
//! }
//! ```

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserializer, Serializer};

use crate::Identifier;

pub(crate) fn serialize_name<T, S>(id: &T, serializer: S) -> Result<S::Ok, S::Error>
where
	T: Identifier,
	S: Serializer,
{
	serializer.serialize_str(id.name())
}

pub(crate) fn deserialize_name_or_code<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
	T: Identifier,
	D: Deserializer<'de>,
{
	deserializer.deserialize_any(NameOrCode(PhantomData))
}

struct NameOrCode<T>(PhantomData<T>);

impl<T: Identifier> NameOrCode<T> {
	fn lookup<E: de::Error>(&self, code: i32) -> Result<T, E> {
		T::from_code(code).map_err(E::custom)
	}
}

impl<'de, T: Identifier> Visitor<'de> for NameOrCode<T> {
	type Value = T;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a {} name or integer code", T::REGISTRY)
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
		T::from_name(v).map_err(E::custom)
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
		match i32::try_from(v) {
			Ok(code) => self.lookup(code),
			Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
		}
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
		match i32::try_from(v) {
			Ok(code) => self.lookup(code),
			Err(_) => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
		}
	}
}

/// Serializes an identifier as its integer code.
///
/// Deserialization accepts integers only; names are rejected so that a
/// numeric wire format cannot silently change shape.
pub mod as_code {
	use serde::de::Error as _;
	use serde::{Deserialize, Deserializer, Serializer};

	use crate::Identifier;

	/// Writes the member's code.
	pub fn serialize<T, S>(id: &T, serializer: S) -> Result<S::Ok, S::Error>
	where
		T: Identifier,
		S: Serializer,
	{
		serializer.serialize_i32(id.code())
	}

	/// Reads a code and validates it against the set.
	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
	where
		T: Identifier,
		D: Deserializer<'de>,
	{
		let code = i32::deserialize(deserializer)?;
		T::from_code(code).map_err(D::Error::custom)
	}
}
