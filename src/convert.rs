/*!
# Argparse: Type Conversion
*/

use crate::{
	DeclarationError,
	Value,
};
use std::{
	fmt,
	str::FromStr,
	sync::Arc,
};
use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{0}")]
/// # Conversion Error.
pub struct ConversionError(String);

impl ConversionError {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(reason: S) -> Self { Self(reason.into()) }
}



/// # Converter.
///
/// Turns a raw command-line token into a [`Value`]. The built-in
/// [`ValueType`]s implement this, as does any matching closure.
pub trait Converter {
	/// # Convert.
	///
	/// ## Errors
	///
	/// Return an error if the token cannot be represented.
	fn convert(&self, raw: &str) -> Result<Value, ConversionError>;
}

impl<F> Converter for F
where F: Fn(&str) -> Result<Value, ConversionError> {
	#[inline]
	fn convert(&self, raw: &str) -> Result<Value, ConversionError> { self(raw) }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Built-in Types.
pub enum ValueType {
	/// # Integer.
	Int,

	/// # Float.
	Float,

	/// # Boolean.
	///
	/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (any case),
	/// and an empty string as false.
	Bool,

	/// # String.
	Str,
}

impl Converter for ValueType {
	fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
		match self {
			Self::Int => raw.trim().parse::<i64>()
				.map(Value::Int)
				.map_err(|_| ConversionError::new("expected an integer")),
			Self::Float => raw.trim().parse::<f64>()
				.map(Value::Float)
				.map_err(|_| ConversionError::new("expected a number")),
			Self::Bool => {
				let raw = raw.trim();
				if raw.is_empty() || ["0", "false", "no", "off"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
					Ok(Value::Bool(false))
				}
				else if ["1", "true", "yes", "on"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
					Ok(Value::Bool(true))
				}
				else { Err(ConversionError::new("expected a boolean")) }
			},
			Self::Str => Ok(Value::Str(raw.to_owned())),
		}
	}
}

impl fmt::Display for ValueType {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ValueType {
	type Err = DeclarationError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		match src {
			"int" => Ok(Self::Int),
			"float" => Ok(Self::Float),
			"bool" => Ok(Self::Bool),
			"string" => Ok(Self::Str),
			_ => Err(DeclarationError::UnknownType(src.to_owned())),
		}
	}
}

impl ValueType {
	#[must_use]
	/// # As String Slice.
	///
	/// Return the type tag.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::Float => "float",
			Self::Bool => "bool",
			Self::Str => "string",
		}
	}
}



#[derive(Clone)]
/// # Type Specification.
///
/// This is what an [`Argument`](crate::Argument) declares. Tags are only
/// checked when the argument is registered; see [`TypeSpec::resolve`].
pub enum TypeSpec {
	/// # Unchecked Tag (e.g. `"int"`).
	Tag(String),

	/// # Built-in Type.
	Builtin(ValueType),

	/// # Custom Converter.
	Custom(Arc<dyn Converter + Send + Sync>),
}

impl fmt::Debug for TypeSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Tag(s) => f.debug_tuple("Tag").field(s).finish(),
			Self::Builtin(t) => f.debug_tuple("Builtin").field(t).finish(),
			Self::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

impl fmt::Display for TypeSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Tag(s) => f.write_str(s),
			Self::Builtin(t) => f.write_str(t.as_str()),
			Self::Custom(_) => f.write_str("{callable}"),
		}
	}
}

impl From<ValueType> for TypeSpec {
	#[inline]
	fn from(src: ValueType) -> Self { Self::Builtin(src) }
}

impl From<&str> for TypeSpec {
	#[inline]
	fn from(src: &str) -> Self { Self::Tag(src.to_owned()) }
}

impl From<String> for TypeSpec {
	#[inline]
	fn from(src: String) -> Self { Self::Tag(src) }
}

impl TypeSpec {
	/// # Custom.
	///
	/// Wrap a conversion closure. (Other [`Converter`] implementations can be
	/// boxed up directly as [`TypeSpec::Custom`].)
	pub fn custom<F>(cb: F) -> Self
	where F: Fn(&str) -> Result<Value, ConversionError> + Send + Sync + 'static {
		Self::Custom(Arc::new(cb))
	}

	/// # Resolve.
	///
	/// Swap a textual tag for its built-in type.
	///
	/// ## Errors
	///
	/// Returns an error if the tag is not one of `int`, `float`, `bool`, or
	/// `string`.
	pub fn resolve(self) -> Result<Self, DeclarationError> {
		match self {
			Self::Tag(s) => s.parse::<ValueType>().map(Self::Builtin),
			other => Ok(other),
		}
	}
}

impl Converter for TypeSpec {
	fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
		match self {
			Self::Tag(s) => s.parse::<ValueType>()
				.map_err(|e| ConversionError::new(e.to_string()))?
				.convert(raw),
			Self::Builtin(t) => t.convert(raw),
			Self::Custom(c) => c.convert(raw),
		}
	}
}
