/*!
# Argparse: Argument Declaration
*/

mod spec;

pub(crate) use spec::{
	ArgState,
	choice_list,
};
pub use spec::ArgSpec;

use crate::{
	Action,
	Arity,
	ConversionError,
	TypeSpec,
	Value,
};



#[derive(Debug, Clone, Default)]
/// # Default Value.
pub(crate) enum Fallback {
	#[default]
	/// # None Given.
	Unset,

	/// # A Real Default.
	Value(Value),

	/// # Omit the Key Entirely.
	Suppress,
}



#[derive(Debug, Clone, Default)]
/// # Help Text.
pub(crate) enum HelpText {
	#[default]
	/// # None Given.
	Unset,

	/// # Text.
	Text(String),

	/// # Hidden From Help Output.
	Suppress,
}



/// # Argument Names.
///
/// This is implemented for the common single-name and multi-name forms so
/// [`Argument::new`] can take either `"--foo"` or `["-f", "--foo"]`.
pub trait IntoNames {
	/// # Into Names.
	fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
	#[inline]
	fn into_names(self) -> Vec<String> { vec![self.to_owned()] }
}

impl IntoNames for String {
	#[inline]
	fn into_names(self) -> Vec<String> { vec![self] }
}

impl<const N: usize> IntoNames for [&str; N] {
	fn into_names(self) -> Vec<String> { self.iter().map(|&s| s.to_owned()).collect() }
}

impl IntoNames for &[&str] {
	fn into_names(self) -> Vec<String> { self.iter().map(|&s| s.to_owned()).collect() }
}

impl IntoNames for Vec<&str> {
	fn into_names(self) -> Vec<String> { self.into_iter().map(str::to_owned).collect() }
}

impl IntoNames for Vec<String> {
	#[inline]
	fn into_names(self) -> Vec<String> { self }
}



#[derive(Debug, Clone)]
/// # Argument Declaration.
///
/// This is a builder describing a single argument. Nothing is validated
/// until it is handed to [`ArgumentParser::add_argument`](crate::ArgumentParser::add_argument),
/// at which point it is turned into an immutable [`ArgSpec`].
///
/// Names beginning with `--`, or with `-` and a non-digit, declare an
/// optional argument; anything else declares a positional one.
///
/// ## Examples
///
/// ```
/// use argparse::{Action, Argument, Arity, ValueType};
///
/// // A counter with short and long names.
/// let verbose = Argument::new(["-v", "--verbose"])
///     .with_action(Action::Count)
///     .with_default(0);
///
/// // One or more integer positionals.
/// let numbers = Argument::new("numbers")
///     .with_arity(Arity::OneOrMore)
///     .with_type(ValueType::Int)
///     .with_help("the numbers to add up");
/// ```
pub struct Argument {
	/// # Names.
	pub(crate) names: Vec<String>,

	/// # Action.
	pub(crate) action: Action,

	/// # Arity.
	pub(crate) arity: Arity,

	/// # Constant.
	pub(crate) constant: Option<Value>,

	/// # Default.
	pub(crate) default: Fallback,

	/// # Type.
	pub(crate) ty: Option<TypeSpec>,

	/// # Choices.
	pub(crate) choices: Vec<Value>,

	/// # Required.
	pub(crate) required: bool,

	/// # Help.
	pub(crate) help: HelpText,

	/// # Metavar.
	pub(crate) metavar: Option<String>,

	/// # Destination.
	pub(crate) dest: Option<String>,
}

impl Argument {
	#[must_use]
	/// # New.
	///
	/// Start a declaration with one or more names.
	pub fn new<N: IntoNames>(names: N) -> Self {
		Self {
			names: names.into_names(),
			action: Action::default(),
			arity: Arity::default(),
			constant: None,
			default: Fallback::Unset,
			ty: None,
			choices: Vec::new(),
			required: false,
			help: HelpText::Unset,
			metavar: None,
			dest: None,
		}
	}

	#[must_use]
	/// # With Action.
	pub fn with_action(mut self, action: Action) -> Self {
		self.action = action;
		self
	}

	#[must_use]
	/// # With Arity.
	///
	/// Accepts an [`Arity`] or a bare `usize` for exact counts.
	pub fn with_arity<A: Into<Arity>>(mut self, arity: A) -> Self {
		self.arity = arity.into();
		self
	}

	#[must_use]
	/// # With Constant.
	///
	/// This is the value stored by [`Action::StoreConst`] and
	/// [`Action::AppendConst`], and by [`Action::Store`] when an optional is
	/// mentioned without a value.
	pub fn with_const<V: Into<Value>>(mut self, value: V) -> Self {
		self.constant = Some(value.into());
		self
	}

	#[must_use]
	/// # With Default.
	///
	/// String defaults are run through the argument's type converter, if any,
	/// at registration.
	pub fn with_default<V: Into<Value>>(mut self, value: V) -> Self {
		self.default = Fallback::Value(value.into());
		self
	}

	#[must_use]
	/// # With Suppressed Default.
	///
	/// Leave the destination out of the result entirely unless the argument
	/// is actually used.
	pub fn with_default_suppressed(mut self) -> Self {
		self.default = Fallback::Suppress;
		self
	}

	#[must_use]
	/// # With Type.
	///
	/// Accepts a [`ValueType`](crate::ValueType), a tag like `"int"`, or a
	/// [`TypeSpec`].
	pub fn with_type<T: Into<TypeSpec>>(mut self, ty: T) -> Self {
		self.ty = Some(ty.into());
		self
	}

	#[must_use]
	/// # With Converter.
	///
	/// Shorthand for a custom [`TypeSpec`] built from a closure.
	pub fn with_converter<F>(mut self, cb: F) -> Self
	where F: Fn(&str) -> Result<Value, ConversionError> + Send + Sync + 'static {
		self.ty = Some(TypeSpec::custom(cb));
		self
	}

	#[must_use]
	/// # With Choices.
	///
	/// Converted values must equal one of these.
	pub fn with_choices<I, V>(mut self, choices: I) -> Self
	where I: IntoIterator<Item=V>, V: Into<Value> {
		self.choices = choices.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	/// # With Required.
	pub fn with_required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	#[must_use]
	/// # With Help.
	///
	/// The placeholders `%(type)s`, `%(default)s`, `%(choices)s`, and
	/// `%(const)s` are filled in when the help is rendered. Untyped
	/// arguments report their type as `string`, since that is what they
	/// store; custom converters report `{callable}`.
	pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = HelpText::Text(help.into());
		self
	}

	#[must_use]
	/// # With Suppressed Help.
	///
	/// Hide the argument from usage and help output.
	pub fn with_help_suppressed(mut self) -> Self {
		self.help = HelpText::Suppress;
		self
	}

	#[must_use]
	/// # With Metavar.
	pub fn with_metavar<S: Into<String>>(mut self, metavar: S) -> Self {
		self.metavar = Some(metavar.into());
		self
	}

	#[must_use]
	/// # With Destination.
	pub fn with_dest<S: Into<String>>(mut self, dest: S) -> Self {
		self.dest = Some(dest.into());
		self
	}
}
