/*!
# Argparse: Argument Kind
*/



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Argument Kind.
///
/// Every token on the command line, and every declared argument name, is
/// either positional or optional:
/// * If an entry begins with `--`, it is optional;
/// * If an entry begins with a single `-` followed by anything other than an
///   ASCII digit, it is optional;
/// * Everything else, including a lone `-` and negative numbers like `-5`,
///   is positional.
pub enum ArgKind {
	#[default]
	/// # Positional.
	Positional,

	/// # Optional (dash-prefixed).
	Optional,
}

impl From<&str> for ArgKind {
	#[inline]
	fn from(src: &str) -> Self { Self::from_bytes(src.as_bytes()) }
}

impl ArgKind {
	#[must_use]
	/// # From Bytes.
	pub const fn from_bytes(src: &[u8]) -> Self {
		match src {
			[b'-', b'-', ..] => Self::Optional,
			[b'-', b'0'..=b'9', ..] => Self::Positional,
			[b'-', _, ..] => Self::Optional,
			_ => Self::Positional,
		}
	}

	#[must_use]
	/// # Is Positional?
	pub const fn is_positional(self) -> bool { matches!(self, Self::Positional) }

	#[must_use]
	/// # Is Optional?
	pub const fn is_optional(self) -> bool { matches!(self, Self::Optional) }
}



#[must_use]
#[inline]
/// # Classify Token.
///
/// Shorthand for [`ArgKind::from`].
///
/// ## Examples
///
/// ```
/// use argparse::{ArgKind, classify};
///
/// assert_eq!(classify("--foo"), ArgKind::Optional);
/// assert_eq!(classify("-v"), ArgKind::Optional);
/// assert_eq!(classify("-5"), ArgKind::Positional);
/// assert_eq!(classify("bar"), ArgKind::Positional);
/// ```
pub fn classify(token: &str) -> ArgKind { ArgKind::from(token) }
