//! Lookup failures for identifier sets.

/// An integer code that names no member of the set.
///
/// Returned by [`Identifier::from_code`](crate::Identifier::from_code) for
/// negative codes, codes past the last member, and any other undeclared
/// value. Callers decide whether that is fatal (reject the peer) or
/// recoverable (fall back to a default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {registry} code: {code}")]
pub struct InvalidCodeError {
	/// Name of the set the lookup ran against.
	pub registry: &'static str,
	/// The rejected code.
	pub code: i32,
}

/// A symbolic name that matches no member of the set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {registry} name: {name:?}")]
pub struct UnknownNameError {
	/// Name of the set the lookup ran against.
	pub registry: &'static str,
	/// The rejected name, as given.
	pub name: String,
}

/// Either lookup failure, for callers accepting names and codes alike.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error(transparent)]
	InvalidCode(#[from] InvalidCodeError),

	#[error(transparent)]
	UnknownName(#[from] UnknownNameError),
}

impl RegistryError {
	/// Returns the name of the set the failed lookup ran against.
	pub fn registry(&self) -> &'static str {
		match self {
			Self::InvalidCode(err) => err.registry,
			Self::UnknownName(err) => err.registry,
		}
	}
}
