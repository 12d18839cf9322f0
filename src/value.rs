/*!
# Argparse: Values
*/

use std::fmt;



#[derive(Debug, Clone, Default, PartialEq)]
/// # Value.
///
/// Consumed tokens, defaults, constants, choices and resolved results are all
/// represented as one of these. Untyped arguments produce [`Value::Str`];
/// multi-value arities and the list-building actions produce [`Value::List`].
pub enum Value {
	#[default]
	/// # Nothing.
	Null,

	/// # Boolean.
	Bool(bool),

	/// # Integer.
	Int(i64),

	/// # Float.
	Float(f64),

	/// # String.
	Str(String),

	/// # List.
	List(Vec<Value>),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Str(v) => f.write_str(v),
			Self::List(v) => {
				for (idx, item) in v.iter().enumerate() {
					if idx != 0 { f.write_str(", ")?; }
					write!(f, "{item}")?;
				}
				Ok(())
			},
		}
	}
}

impl From<bool> for Value {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<i64> for Value {
	#[inline]
	fn from(src: i64) -> Self { Self::Int(src) }
}

impl From<i32> for Value {
	#[inline]
	fn from(src: i32) -> Self { Self::Int(i64::from(src)) }
}

impl From<usize> for Value {
	#[inline]
	fn from(src: usize) -> Self { Self::Int(i64::try_from(src).unwrap_or(i64::MAX)) }
}

impl From<f64> for Value {
	#[inline]
	fn from(src: f64) -> Self { Self::Float(src) }
}

impl From<&str> for Value {
	#[inline]
	fn from(src: &str) -> Self { Self::Str(src.to_owned()) }
}

impl From<String> for Value {
	#[inline]
	fn from(src: String) -> Self { Self::Str(src) }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
	fn from(src: Vec<T>) -> Self {
		Self::List(src.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Self>> From<Option<T>> for Value {
	fn from(src: Option<T>) -> Self { src.map_or(Self::Null, Into::into) }
}

/// ## Getters.
impl Value {
	#[must_use]
	/// # Is Null?
	pub const fn is_null(&self) -> bool { matches!(self, Self::Null) }

	#[must_use]
	/// # As Bool.
	pub const fn as_bool(&self) -> Option<bool> {
		if let Self::Bool(v) = self { Some(*v) }
		else { None }
	}

	#[must_use]
	/// # As Integer.
	pub const fn as_int(&self) -> Option<i64> {
		if let Self::Int(v) = self { Some(*v) }
		else { None }
	}

	#[must_use]
	#[expect(clippy::cast_precision_loss, reason = "Widening is the point.")]
	/// # As Float.
	///
	/// Integers are widened.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			Self::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	#[must_use]
	/// # As String Slice.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::Str(v) = self { Some(v.as_str()) }
		else { None }
	}

	#[must_use]
	/// # As List.
	pub fn as_list(&self) -> Option<&[Self]> {
		if let Self::List(v) = self { Some(v.as_slice()) }
		else { None }
	}

	#[must_use]
	/// # Into List.
	///
	/// Lists are returned as-are, null becomes an empty list, and anything
	/// else becomes a list of one. This is the coercion used when the
	/// appending actions merge into an existing destination.
	pub fn into_list(self) -> Vec<Self> {
		match self {
			Self::Null => Vec::new(),
			Self::List(v) => v,
			v => vec![v],
		}
	}
}
