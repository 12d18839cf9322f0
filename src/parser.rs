/*!
# Argparse: Parser
*/

use crate::{
	argument::ArgState,
	help,
	ArgKind,
	ArgSpec,
	Argument,
	DeclarationError,
	Namespace,
	ParseError,
};
use indexmap::IndexMap;
use std::{
	collections::BTreeSet,
	fmt,
	path::Path,
};
use tracing::{
	debug,
	trace,
	warn,
};



/// # Fallback Program Name.
const DEFAULT_PROG: &str = "SCRIPT";



#[derive(Debug, Clone)]
/// # Registered Argument.
struct Entry {
	/// # Spec.
	spec: ArgSpec,

	/// # Parse State.
	state: ArgState,
}



#[derive(Debug, Clone)]
/// # Argument Parser.
///
/// Declare arguments with [`ArgumentParser::add_argument`] (or the chaining
/// [`ArgumentParser::with_argument`]), then parse a token list into a
/// [`Namespace`].
///
/// A `-h`/`--help` argument is registered automatically.
///
/// By default, parse errors are fatal: the help is printed along with the
/// error message and the process exits with a non-zero status, or zero if
/// help was requested. Use [`ArgumentParser::with_exit_on_error`] to get the
/// errors back instead.
///
/// ## Examples
///
/// ```
/// use argparse::{Action, Argument, ArgumentParser, ParseError, Value};
///
/// let mut parser = ArgumentParser::new()
///     .with_prog("frobble")
///     .with_exit_on_error(false)
///     .with_argument(Argument::new(["-v", "--verbose"]).with_action(Action::Count).with_default(0))
///     .unwrap()
///     .with_argument(Argument::new("bar"))
///     .unwrap();
///
/// let ns = parser.parse_args(["-vv", "BAR"]).unwrap();
/// assert_eq!(ns.get_int("verbose"), Some(2));
/// assert_eq!(ns.get_str("bar"), Some("BAR"));
///
/// // The positional is required.
/// assert_eq!(
///     parser.parse_args(["-v"]),
///     Err(ParseError::ValueRequired("bar".to_owned())),
/// );
/// ```
pub struct ArgumentParser {
	/// # Program Name.
	prog: String,

	/// # Description.
	description: Option<String>,

	/// # Epilog.
	epilog: Option<String>,

	/// # Exit on Error?
	exit_on_error: bool,

	/// # Reject Duplicate Names?
	strict_names: bool,

	/// # Token Source (for `parse_env`).
	token_source: fn() -> Vec<String>,

	/// # Arguments (Declaration Order).
	entries: Vec<Entry>,

	/// # Optional Names.
	optionals: IndexMap<String, usize>,

	/// # Positionals (Declaration Order).
	positionals: Vec<usize>,
}

impl Default for ArgumentParser {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl fmt::Display for ArgumentParser {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format_help())
	}
}

/// ## Construction.
impl ArgumentParser {
	#[must_use]
	/// # New.
	///
	/// The program name defaults to the file name of the running executable.
	pub fn new() -> Self {
		let prog = std::env::args_os()
			.next()
			.and_then(|p| Path::new(&p).file_name().map(|n| n.to_string_lossy().into_owned()))
			.unwrap_or_else(|| DEFAULT_PROG.to_owned());

		let mut optionals = IndexMap::with_capacity(2);
		optionals.insert("-h".to_owned(), 0);
		optionals.insert("--help".to_owned(), 0);

		Self {
			prog,
			description: None,
			epilog: None,
			exit_on_error: true,
			strict_names: false,
			token_source: env_tokens,
			entries: vec![Entry { spec: ArgSpec::builtin_help(), state: ArgState::default() }],
			optionals,
			positionals: Vec::new(),
		}
	}

	#[must_use]
	/// # With Program Name.
	pub fn with_prog<S: Into<String>>(mut self, prog: S) -> Self {
		self.prog = prog.into();
		self
	}

	#[must_use]
	/// # With Description.
	///
	/// This is printed on its own after the usage line, which keeps the
	/// program synopsis either way.
	pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
		self.description = Some(description.into()).filter(|s| ! s.is_empty());
		self
	}

	#[must_use]
	/// # With Epilog.
	///
	/// This is printed at the very end of the help, after the argument
	/// sections.
	pub fn with_epilog<S: Into<String>>(mut self, epilog: S) -> Self {
		self.epilog = Some(epilog.into()).filter(|s| ! s.is_empty());
		self
	}

	#[must_use]
	/// # With Exit on Error.
	///
	/// When `false`, every [`ParseError`], including
	/// [`ParseError::WantsHelp`], is returned to the caller and nothing is
	/// printed.
	pub const fn with_exit_on_error(mut self, exit: bool) -> Self {
		self.exit_on_error = exit;
		self
	}

	#[must_use]
	/// # With Strict Names.
	///
	/// By default, declaring an optional name that is already in use quietly
	/// reassigns it to the new argument. With strict names enabled, it is a
	/// [`DeclarationError::DuplicateName`] instead.
	pub const fn with_strict_names(mut self, strict: bool) -> Self {
		self.strict_names = strict;
		self
	}

	#[must_use]
	/// # With Token Source.
	///
	/// Replace the function [`ArgumentParser::parse_env`] pulls its tokens
	/// from. The default returns the process arguments, minus the program
	/// path.
	pub const fn with_token_source(mut self, src: fn() -> Vec<String>) -> Self {
		self.token_source = src;
		self
	}

	/// # With Argument.
	///
	/// Chainable version of [`ArgumentParser::add_argument`].
	///
	/// ## Errors
	///
	/// Returns an error if the declaration is invalid.
	pub fn with_argument(mut self, arg: Argument) -> Result<Self, DeclarationError> {
		self.add_argument(arg)?;
		Ok(self)
	}
}

/// ## Declaration.
impl ArgumentParser {
	/// # Add Argument.
	///
	/// Validate and register an argument.
	///
	/// The destination, unless set explicitly, is the name of a positional,
	/// or the first long name of an optional with the dashes stripped (or
	/// failing that, the first short name). Hyphens become underscores.
	///
	/// Positionals are implicitly required unless their arity allows for
	/// zero values.
	///
	/// ## Errors
	///
	/// Returns an error if the argument has no (or empty) names, mixes
	/// positional and optional names, gives a positional more than one name,
	/// has an unknown type or an unconvertible default, or, in strict mode,
	/// reuses an optional name.
	pub fn add_argument(&mut self, mut arg: Argument) -> Result<(), DeclarationError> {
		let first = arg.names.first().ok_or(DeclarationError::NoName)?;
		if arg.names.iter().any(String::is_empty) { return Err(DeclarationError::EmptyName); }

		let kind = ArgKind::from(first.as_str());
		if arg.names.iter().any(|n| ArgKind::from(n.as_str()) != kind) {
			return Err(DeclarationError::MixedKinds(first.clone()));
		}
		if kind.is_positional() && 1 < arg.names.len() {
			return Err(DeclarationError::MultiNamedPositional(first.clone()));
		}

		if self.strict_names && kind.is_optional() {
			if let Some(n) = arg.names.iter().find(|n| self.optionals.contains_key(n.as_str())) {
				return Err(DeclarationError::DuplicateName(n.clone()));
			}
		}

		let dest = match arg.dest.take() {
			Some(d) if ! d.is_empty() => d,
			_ => derive_dest(kind, &arg.names),
		};
		if kind.is_positional() && arg.arity.requires_positional() { arg.required = true; }

		let names = arg.names.clone();
		let spec = ArgSpec::new(arg, kind, &dest)?;
		debug!(
			names = ?names,
			dest = spec.dest(),
			action = %spec.action(),
			arity = %spec.arity(),
			"argument registered"
		);

		let idx = self.entries.len();
		self.entries.push(Entry { spec, state: ArgState::default() });
		if kind.is_positional() { self.positionals.push(idx); }
		else {
			for name in names {
				if self.optionals.insert(name.clone(), idx).is_some() {
					warn!(name = %name, "argument name reassigned to a later declaration");
				}
			}
		}

		Ok(())
	}

	/// # Arguments.
	///
	/// Return the registered specs in declaration order, starting with the
	/// built-in help.
	pub fn arguments(&self) -> impl ExactSizeIterator<Item=&ArgSpec> + '_ {
		self.entries.iter().map(|e| &e.spec)
	}
}

/// ## Parsing.
impl ArgumentParser {
	/// # Parse Arguments.
	///
	/// Parse the tokens (excluding the program path) into a fresh
	/// [`Namespace`].
	///
	/// ## Errors
	///
	/// Returns a [`ParseError`] if the tokens don't fit the declared
	/// arguments or help was requested. Unless exit-on-error has been
	/// disabled, the process exits instead.
	pub fn parse_args<I, S>(&mut self, tokens: I) -> Result<Namespace, ParseError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.parse_args_into(tokens, Namespace::new())
	}

	/// # Parse Arguments Into.
	///
	/// Same as [`ArgumentParser::parse_args`], but starting from an existing
	/// namespace. Its values take precedence over defaults.
	///
	/// ## Errors
	///
	/// Same as [`ArgumentParser::parse_args`].
	pub fn parse_args_into<I, S>(&mut self, tokens: I, ns: Namespace)
	-> Result<Namespace, ParseError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
		match self.try_parse(&tokens, ns) {
			Err(e) if self.exit_on_error => self.exit(&e),
			res => res,
		}
	}

	/// # Parse Environment.
	///
	/// Parse the tokens returned by the token source, i.e. the process
	/// arguments unless [`ArgumentParser::with_token_source`] says otherwise.
	///
	/// ## Errors
	///
	/// Same as [`ArgumentParser::parse_args`].
	pub fn parse_env(&mut self) -> Result<Namespace, ParseError> {
		let tokens = (self.token_source)();
		self.parse_args(tokens)
	}

	/// # Parse (Fallible).
	///
	/// Scan the tokens, feeding values to their arguments, then resolve
	/// every argument into the namespace: positionals first, then optionals,
	/// each spec exactly once.
	fn try_parse(&mut self, tokens: &[String], mut ns: Namespace)
	-> Result<Namespace, ParseError> {
		for e in &mut self.entries { e.state.reset(); }

		let mut cursor = 0;
		let mut i = 0;
		while let Some(token) = tokens.get(i) {
			trace!(index = i, token = token.as_str(), "dispatching token");

			// Positional.
			if ArgKind::from(token.as_str()).is_positional() {
				let idx = self.positionals.get(cursor).copied()
					.ok_or_else(|| ParseError::UnrecognizedArgument(token.clone()))?;
				i = self.consume(idx, tokens, i, None)?.max(i + 1);
				cursor += 1;
			}
			// Long.
			else if token.starts_with("--") {
				let idx = self.lookup(token)?;
				i = self.consume(idx, tokens, i, Some(token.as_str()))?;
			}
			// Short cluster; each flag picks up where the last left off.
			else {
				let mut last = i;
				for c in token.chars().skip(1) {
					let name = format!("-{c}");
					let idx = self.lookup(&name)?;
					last = self.consume(idx, tokens, last, Some(name.as_str()))?.saturating_sub(1);
				}
				i = last + 1;
			}
		}

		let mut done = BTreeSet::new();
		for &idx in &self.positionals {
			let Entry { spec, state } = &self.entries[idx];
			spec.resolve(state, &mut ns, positional_label(spec))?;
		}
		for (name, &idx) in &self.optionals {
			if done.insert(idx) {
				let Entry { spec, state } = &self.entries[idx];
				spec.resolve(state, &mut ns, name)?;
			}
		}

		debug!(tokens = tokens.len(), keys = ns.len(), "parse complete");
		Ok(ns)
	}

	/// # Look Up Optional.
	fn lookup(&self, name: &str) -> Result<usize, ParseError> {
		self.optionals.get(name)
			.copied()
			.ok_or_else(|| ParseError::UnknownArgument(name.to_owned()))
	}

	/// # Consume.
	///
	/// Positionals are labeled by their own name.
	fn consume(&mut self, idx: usize, tokens: &[String], pos: usize, name: Option<&str>)
	-> Result<usize, ParseError> {
		let Entry { spec, state } = &mut self.entries[idx];
		let spec: &ArgSpec = spec;
		let name = match name {
			Some(n) => n,
			None => positional_label(spec),
		};
		spec.consume(state, tokens, pos, name)
	}

	/// # Print and Exit.
	fn exit(&self, err: &ParseError) -> ! {
		if err.is_help() { print!("{}", self.format_help()); }
		else {
			eprint!("{}", self.format_help());
			eprintln!("{err}");
		}
		std::process::exit(err.exit_code());
	}
}

/// ## Help.
impl ArgumentParser {
	#[must_use]
	/// # Format Usage.
	///
	/// Return the one-line usage synopsis (with a trailing line break).
	pub fn format_usage(&self) -> String {
		let (optionals, positionals) = self.help_specs();
		help::usage(&self.prog, &optionals, &positionals)
	}

	#[must_use]
	/// # Format Help.
	///
	/// Return the full help screen.
	pub fn format_help(&self) -> String {
		let (optionals, positionals) = self.help_specs();
		help::render(
			&self.prog,
			self.description.as_deref(),
			self.epilog.as_deref(),
			&optionals,
			&positionals,
		)
	}

	/// # Print Help.
	pub fn print_help(&self) { print!("{}", self.format_help()); }

	/// # Specs for Help.
	///
	/// Optionals are listed once each, in the order their first surviving
	/// name was registered.
	fn help_specs(&self) -> (Vec<&ArgSpec>, Vec<&ArgSpec>) {
		let mut done = BTreeSet::new();
		let optionals = self.optionals.values()
			.filter(|&&idx| done.insert(idx))
			.map(|&idx| &self.entries[idx].spec)
			.collect();
		let positionals = self.positionals.iter()
			.map(|&idx| &self.entries[idx].spec)
			.collect();
		(optionals, positionals)
	}
}



/// # Derive Destination.
fn derive_dest(kind: ArgKind, names: &[String]) -> String {
	if kind.is_optional() {
		if let Some(long) = names.iter().find_map(|n| n.strip_prefix("--")) {
			return long.to_owned();
		}
	}
	names.first()
		.map(|n| n.strip_prefix('-').unwrap_or(n).to_owned())
		.unwrap_or_default()
}

/// # Environment Tokens.
///
/// Non-UTF-8 arguments are converted lossily.
fn env_tokens() -> Vec<String> {
	std::env::args_os()
		.skip(1)
		.map(|a| a.to_string_lossy().into_owned())
		.collect()
}

/// # Positional Label.
fn positional_label(spec: &ArgSpec) -> &str {
	spec.names().first().map_or_else(|| spec.dest(), String::as_str)
}
