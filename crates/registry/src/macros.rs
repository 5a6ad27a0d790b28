//! Declaration macro for identifier sets.

/// Declares a closed identifier set.
///
/// ```ignore
/// identifier_set! {
/// 	pub enum Device: "device" {
/// 		Cpu = 0 => "CPU",
/// 		Gpu = 1 => "GPU" as "Graphics processor",
/// 	}
/// }
/// ```
///
/// Each variant binds an `i32` code and a symbolic name; `as` overrides the
/// display label, which otherwise equals the name. Codes must start at 0 and
/// follow declaration order without gaps, checked at compile time.
macro_rules! identifier_set {
	(@display $name:literal) => {
		$name
	};
	(@display $name:literal, $display:literal) => {
		$display
	};
	(
		$(#[$meta:meta])*
		$vis:vis enum $ty:ident : $registry:literal {
			$(
				$(#[$vmeta:meta])*
				$variant:ident = $code:literal => $name:literal $(as $display:literal)?
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(
			Debug,
			Clone,
			Copy,
			PartialEq,
			Eq,
			PartialOrd,
			Ord,
			Hash,
			::strum::EnumCount,
			::strum::FromRepr,
			::strum::IntoStaticStr,
		)]
		#[repr(i32)]
		$vis enum $ty {
			$(
				$(#[$vmeta])*
				#[strum(serialize = $name)]
				$variant = $code,
			)+
		}

		impl $ty {
			/// Every member, in code order.
			pub const ALL: [$ty; <$ty as ::strum::EnumCount>::COUNT] = [$($ty::$variant),+];

			/// Returns the stable integer code of this member.
			pub const fn code(self) -> i32 {
				self as i32
			}
		}

		const _: () = {
			let mut idx = 0;
			while idx < $ty::ALL.len() {
				assert!(
					$ty::ALL[idx] as i32 == idx as i32,
					concat!($registry, " codes must be dense and in declaration order"),
				);
				idx += 1;
			}
		};

		impl $crate::Identifier for $ty {
			const REGISTRY: &'static str = $registry;

			fn all() -> &'static [Self] {
				&$ty::ALL
			}

			fn code(self) -> i32 {
				self as i32
			}

			fn name(self) -> &'static str {
				self.into()
			}

			fn display_name(self) -> &'static str {
				match self {
					$($ty::$variant => identifier_set!(@display $name $(, $display)?),)+
				}
			}

			fn from_code(code: i32) -> ::core::result::Result<Self, $crate::InvalidCodeError> {
				$ty::from_repr(code).ok_or($crate::InvalidCodeError { registry: $registry, code })
			}
		}

		impl ::core::convert::TryFrom<i32> for $ty {
			type Error = $crate::InvalidCodeError;

			fn try_from(code: i32) -> ::core::result::Result<Self, Self::Error> {
				<$ty as $crate::Identifier>::from_code(code)
			}
		}

		impl ::core::convert::From<$ty> for i32 {
			fn from(id: $ty) -> i32 {
				id.code()
			}
		}

		impl ::core::str::FromStr for $ty {
			type Err = $crate::UnknownNameError;

			fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
				<$ty as $crate::Identifier>::from_name(s)
			}
		}

		impl ::core::fmt::Display for $ty {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str($crate::Identifier::display_name(*self))
			}
		}

		impl ::serde::Serialize for $ty {
			fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
				$crate::codec::serialize_name(self, serializer)
			}
		}

		impl<'de> ::serde::Deserialize<'de> for $ty {
			fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::core::result::Result<Self, D::Error> {
				$crate::codec::deserialize_name_or_code(deserializer)
			}
		}
	};
}
