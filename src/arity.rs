/*!
# Argparse: Arity
*/

use crate::DeclarationError;
use std::{
	fmt,
	str::FromStr,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Arity.
///
/// How many value tokens a single occurrence of an argument may consume.
///
/// Note that `Single` and `Exact(1)` consume the same number of tokens, but
/// the former stores a bare value while the latter stores a one-item list.
/// The same goes for `Zero` and `Exact(0)`, except there is nothing to store.
pub enum Arity {
	/// # Exactly N.
	Exact(usize),

	/// # None.
	Zero,

	#[default]
	/// # One Value, Stored As-Is.
	///
	/// The value is mandatory only when the argument is required.
	Single,

	/// # Zero or One (`?`).
	Optional,

	/// # Zero or More (`*`).
	ZeroOrMore,

	/// # One or More (`+`).
	OneOrMore,
}

impl fmt::Display for Arity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact(n) => write!(f, "{n}"),
			Self::Zero => f.write_str("0"),
			Self::Single => f.write_str("1"),
			Self::Optional => f.write_str("?"),
			Self::ZeroOrMore => f.write_str("*"),
			Self::OneOrMore => f.write_str("+"),
		}
	}
}

impl From<usize> for Arity {
	#[inline]
	fn from(src: usize) -> Self { Self::Exact(src) }
}

impl FromStr for Arity {
	type Err = DeclarationError;

	/// # From String.
	///
	/// The symbolic forms map to their variants; bare numbers are exact
	/// counts.
	fn from_str(src: &str) -> Result<Self, Self::Err> {
		match src {
			"?" => Ok(Self::Optional),
			"*" => Ok(Self::ZeroOrMore),
			"+" => Ok(Self::OneOrMore),
			_ => src.parse::<usize>()
				.map(Self::Exact)
				.map_err(|_| DeclarationError::InvalidArity(src.to_owned())),
		}
	}
}

impl Arity {
	#[must_use]
	/// # Consumption Bounds.
	///
	/// Required arguments always need at least one value.
	pub const fn bounds(self, required: bool) -> Bounds {
		let (min, max) = match self {
			Self::Exact(n) => (n, Some(n)),
			Self::Zero => (0, Some(0)),
			Self::Single => (required as usize, Some(1)),
			Self::Optional => (0, Some(1)),
			Self::ZeroOrMore => (0, None),
			Self::OneOrMore => (1, None),
		};

		Bounds {
			min: if required && min == 0 { 1 } else { min },
			max,
		}
	}

	#[must_use]
	/// # Simplify?
	///
	/// Returns true if values should be stored bare rather than as a list.
	pub const fn simplifies(self) -> bool { matches!(self, Self::Single | Self::Optional) }

	#[must_use]
	/// # Positional Implies Required?
	///
	/// Positional arguments are required unless they can legitimately match
	/// nothing.
	pub const fn requires_positional(self) -> bool {
		! matches!(self, Self::Optional | Self::ZeroOrMore)
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Consumption Bounds.
pub struct Bounds {
	/// # Minimum.
	pub min: usize,

	/// # Maximum.
	///
	/// `None` means there is no upper limit.
	pub max: Option<usize>,
}

impl Bounds {
	#[must_use]
	/// # Room For More?
	///
	/// Returns true if an occurrence holding `len` values may take another.
	pub const fn has_room(self, len: usize) -> bool {
		match self.max {
			Some(max) => len < max,
			None => true,
		}
	}

	#[must_use]
	/// # Multi-Value?
	///
	/// Returns true if the maximum exceeds one.
	pub const fn is_multi(self) -> bool {
		match self.max {
			Some(max) => 1 < max,
			None => true,
		}
	}
}
