//! The contract every closed identifier set honors.

use core::fmt;
use core::hash::Hash;
use core::iter::Copied;
use core::slice;

use crate::error::{InvalidCodeError, UnknownNameError};

/// A closed, ordered set of symbolic constants with stable integer codes.
///
/// Implementations are generated by `identifier_set!`, which guarantees:
///
/// - codes are unique, non-negative, and dense over `0..count()`;
/// - [`all`](Self::all) lists members in code order;
/// - the set cannot grow at runtime.
///
/// [`code`](Self::code) is total. [`from_code`](Self::from_code) is the
/// boundary check for integers received from outside the process and never
/// panics.
pub trait Identifier:
	Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
	/// Name of the set, used in error messages.
	const REGISTRY: &'static str;

	/// Every member, in declaration order.
	fn all() -> &'static [Self];

	/// Returns the stable integer code of this member.
	fn code(self) -> i32;

	/// Returns the upper-case symbolic name (`"CPU"`, `"TFLITE"`).
	fn name(self) -> &'static str;

	/// Returns the human-readable label used by `Display`.
	fn display_name(self) -> &'static str;

	/// Looks up the member with the given code.
	///
	/// # Errors
	///
	/// Returns [`InvalidCodeError`] if no member has this code.
	fn from_code(code: i32) -> Result<Self, InvalidCodeError>;

	/// Looks up a member by symbolic name, ignoring ASCII case.
	///
	/// # Errors
	///
	/// Returns [`UnknownNameError`] if no member has this name.
	fn from_name(name: &str) -> Result<Self, UnknownNameError> {
		Self::iter()
			.find(|id| id.name().eq_ignore_ascii_case(name))
			.ok_or_else(|| UnknownNameError {
				registry: Self::REGISTRY,
				name: name.to_owned(),
			})
	}

	/// Iterates over every member in declaration order.
	fn iter() -> Copied<slice::Iter<'static, Self>> {
		Self::all().iter().copied()
	}

	/// Number of members in the set.
	fn count() -> usize {
		Self::all().len()
	}
}
