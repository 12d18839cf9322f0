/*!
# Argparse: Errors

Declaration problems are reported by [`DeclarationError`] the moment an
argument is added; everything that can go wrong while parsing a command line
is a [`ParseError`], including the (non-fatal) request for help.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Declaration Error.
pub enum DeclarationError {
	/// # No Names.
	#[error("Argument must have a name")]
	NoName,

	/// # Empty Name.
	#[error("Argument must have a name")]
	EmptyName,

	/// # Positional and Optional Names Mixed.
	#[error("Argument {0} must be either positional or optional")]
	MixedKinds(String),

	/// # Positional With Aliases.
	#[error("Positional argument {0} can have only one name")]
	MultiNamedPositional(String),

	/// # Unknown Type Tag.
	#[error("Unknown type {0}")]
	UnknownType(String),

	/// # Unknown Action Tag.
	#[error("Unknown action {0}")]
	UnknownAction(String),

	/// # Unparseable Arity.
	#[error("Invalid nargs {0}")]
	InvalidArity(String),

	/// # Scalar Storage With Multi-Value Arity.
	#[error("Argument {0}: simplify and nargs max > 1 can't go together")]
	SimplifyArity(String),

	/// # Default Failed Type Conversion.
	#[error("Argument {name}: invalid default ({reason})")]
	InvalidDefault {
		/// # Argument Name.
		name: String,
		/// # Conversion Error.
		reason: String,
	},

	/// # Name Already Registered.
	///
	/// This is only raised by parsers with strict name checking enabled;
	/// otherwise the later declaration simply takes over the name.
	#[error("Argument name {0} is already in use")]
	DuplicateName(String),
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Parse Error.
pub enum ParseError {
	/// # Unknown Optional.
	#[error("Unknown argument {0}")]
	UnknownArgument(String),

	/// # Positional Without a Slot.
	#[error("Unrecognized argument {0}")]
	UnrecognizedArgument(String),

	/// # Not Enough Values.
	#[error("Argument {name}: at least {min} argument(s) required")]
	TooFewValues {
		/// # Argument Name.
		name: String,
		/// # Minimum Value Count.
		min: usize,
	},

	/// # Required Argument Missing.
	#[error("Argument {0}: value required")]
	ValueRequired(String),

	/// # Value Not Among Choices.
	#[error(
		"Argument {name}: invalid choice '{value}' (choose from '{}')",
		choices.join("', '")
	)]
	InvalidChoice {
		/// # Argument Name.
		name: String,
		/// # Offending Value.
		value: String,
		/// # Allowed Values (Declaration Order).
		choices: Vec<String>,
	},

	/// # Type Conversion Failed.
	#[error("Argument {name}: invalid value '{value}' ({reason})")]
	InvalidValue {
		/// # Argument Name.
		name: String,
		/// # Offending Value.
		value: String,
		/// # Conversion Error.
		reason: String,
	},

	/// # Wants Help.
	///
	/// Not a failure as such; the help action was invoked and parsing stopped
	/// short.
	#[error("help requested")]
	WantsHelp,
}

impl ParseError {
	#[must_use]
	/// # Exit Code.
	///
	/// Help exits cleanly; everything else is a failure.
	pub const fn exit_code(&self) -> i32 {
		if self.is_help() { 0 }
		else { 1 }
	}

	#[must_use]
	/// # Is Help?
	pub const fn is_help(&self) -> bool { matches!(self, Self::WantsHelp) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_exit_code() {
		assert_eq!(ParseError::WantsHelp.exit_code(), 0);
		assert_eq!(ParseError::UnknownArgument("--x".to_owned()).exit_code(), 1);
		assert_eq!(ParseError::ValueRequired("bar".to_owned()).exit_code(), 1);
	}

	#[test]
	fn t_display() {
		assert_eq!(
			ParseError::InvalidChoice {
				name: "move".to_owned(),
				value: "fire".to_owned(),
				choices: vec!["rock".to_owned(), "paper".to_owned(), "scissors".to_owned()],
			}.to_string(),
			"Argument move: invalid choice 'fire' (choose from 'rock', 'paper', 'scissors')",
		);
		assert_eq!(
			ParseError::TooFewValues { name: "--foo".to_owned(), min: 2 }.to_string(),
			"Argument --foo: at least 2 argument(s) required",
		);
		assert_eq!(
			DeclarationError::MixedKinds("-f".to_owned()).to_string(),
			"Argument -f must be either positional or optional",
		);
	}
}
