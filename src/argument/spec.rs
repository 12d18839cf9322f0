/*!
# Argparse: Argument Specs

This module holds the registered form of an argument: the immutable
[`ArgSpec`], its per-parse [`ArgState`], and the logic for consuming tokens
and resolving a final value.
*/

use super::{
	Argument,
	Fallback,
	HelpText,
};
use crate::{
	Action,
	ArgKind,
	Arity,
	Bounds,
	Converter,
	DeclarationError,
	Namespace,
	ParseError,
	TypeSpec,
	Value,
};



#[derive(Debug, Clone)]
/// # Argument Spec.
///
/// This is an [`Argument`] after validation and normalization. It is owned by
/// the [`ArgumentParser`](crate::ArgumentParser) and never changes once
/// registered; the getters are mostly useful for rendering custom help.
pub struct ArgSpec {
	/// # Names.
	names: Vec<String>,

	/// # Kind.
	kind: ArgKind,

	/// # Action.
	action: Action,

	/// # Arity.
	arity: Arity,

	/// # Consumption Bounds.
	bounds: Bounds,

	/// # Constant.
	constant: Option<Value>,

	/// # Default.
	default: Option<Value>,

	/// # Suppress Default?
	suppress: bool,

	/// # Type.
	ty: Option<TypeSpec>,

	/// # Choices.
	choices: Vec<Value>,

	/// # Required.
	required: bool,

	/// # Help Text.
	help: HelpText,

	/// # Metavar.
	metavar: String,

	/// # Destination.
	dest: String,

	/// # Store Bare Values?
	simplify: bool,
}

/// ## Construction.
impl ArgSpec {
	/// # New.
	///
	/// The parser has already validated the names, worked out the kind and
	/// (un-normalized) destination, and flagged implicitly required
	/// positionals.
	pub(crate) fn new(arg: Argument, kind: ArgKind, dest: &str)
	-> Result<Self, DeclarationError> {
		let Argument { names, action, arity, constant, default, ty, choices, required, help, metavar, .. } = arg;

		let bounds = arity.bounds(required);
		let simplify = arity.simplifies();
		if simplify && bounds.is_multi() {
			return Err(DeclarationError::SimplifyArity(dest.to_owned()));
		}

		// The metavar is derived from the destination before normalization.
		let metavar = match metavar {
			Some(m) if ! m.is_empty() => m,
			_ =>
				if ! choices.is_empty() { choice_list(&choices) }
				else if kind.is_positional() { dest.to_owned() }
				else { dest.to_uppercase() },
		};
		let dest = dest.replace('-', "_");

		let ty = ty.map(TypeSpec::resolve).transpose()?;

		let (default, suppress) = match default {
			Fallback::Unset => (None, false),
			Fallback::Suppress => (None, true),
			Fallback::Value(Value::Str(raw)) => match &ty {
				Some(t) => {
					let v = t.convert(&raw).map_err(|e| DeclarationError::InvalidDefault {
						name: dest.clone(),
						reason: e.to_string(),
					})?;
					(Some(v), false)
				},
				None => (Some(Value::Str(raw)), false),
			},
			Fallback::Value(v) => (Some(v), false),
		};

		Ok(Self {
			names,
			kind,
			action,
			arity,
			bounds,
			constant,
			default,
			suppress,
			ty,
			choices,
			required,
			help,
			metavar,
			dest,
			simplify,
		})
	}

	#[must_use]
	/// # Help Action.
	///
	/// Every parser starts out with one of these.
	pub(crate) fn builtin_help() -> Self {
		Self {
			names: vec!["-h".to_owned(), "--help".to_owned()],
			kind: ArgKind::Optional,
			action: Action::Help,
			arity: Arity::Zero,
			bounds: Arity::Zero.bounds(false),
			constant: None,
			default: None,
			suppress: false,
			ty: None,
			choices: Vec::new(),
			required: false,
			help: HelpText::Text("show this help message and exit".to_owned()),
			metavar: "HELP".to_owned(),
			dest: "help".to_owned(),
			simplify: false,
		}
	}
}

/// ## Getters.
impl ArgSpec {
	#[must_use]
	/// # Names.
	pub fn names(&self) -> &[String] { &self.names }

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> ArgKind { self.kind }

	#[must_use]
	/// # Action.
	pub const fn action(&self) -> Action { self.action }

	#[must_use]
	/// # Arity.
	pub const fn arity(&self) -> Arity { self.arity }

	#[must_use]
	/// # Consumption Bounds.
	pub const fn bounds(&self) -> Bounds { self.bounds }

	#[must_use]
	/// # Constant.
	pub const fn constant(&self) -> Option<&Value> { self.constant.as_ref() }

	#[must_use]
	/// # Default.
	///
	/// String defaults will have already been converted.
	pub const fn default(&self) -> Option<&Value> { self.default.as_ref() }

	#[must_use]
	/// # Default Suppressed?
	pub const fn is_default_suppressed(&self) -> bool { self.suppress }

	#[must_use]
	/// # Type.
	pub const fn type_spec(&self) -> Option<&TypeSpec> { self.ty.as_ref() }

	#[must_use]
	/// # Choices.
	pub fn choices(&self) -> &[Value] { &self.choices }

	#[must_use]
	/// # Required?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	/// # Help Text.
	///
	/// Returns `None` if there isn't any, or if it is suppressed.
	pub fn help(&self) -> Option<&str> {
		if let HelpText::Text(s) = &self.help { Some(s.as_str()) }
		else { None }
	}

	#[must_use]
	/// # Hidden From Help?
	pub const fn is_help_suppressed(&self) -> bool { matches!(self.help, HelpText::Suppress) }

	#[must_use]
	/// # Metavar.
	pub fn metavar(&self) -> &str { &self.metavar }

	#[must_use]
	/// # Destination.
	pub fn dest(&self) -> &str { &self.dest }

	#[must_use]
	/// # Stores Bare Values?
	pub const fn is_simplified(&self) -> bool { self.simplify }
}

/// ## Parsing.
impl ArgSpec {
	/// # Consume.
	///
	/// Handle one occurrence of the argument, `pos` being the index of its
	/// name (optionals) or its first value (positionals). Values are taken
	/// greedily until the arity is satisfied, the input runs out, or an
	/// optional-looking token turns up.
	///
	/// Returns the index of the first token left unconsumed.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::WantsHelp`] for the help action, or an error if
	/// there are too few values or a value fails conversion or validation.
	pub(crate) fn consume(
		&self,
		state: &mut ArgState,
		tokens: &[String],
		pos: usize,
		name: &str,
	) -> Result<usize, ParseError> {
		if matches!(self.action, Action::Help) { return Err(ParseError::WantsHelp); }

		state.mentioned += 1;
		if self.action.is_flag() { return Ok(pos + 1); }

		let start = if self.kind.is_optional() { pos + 1 } else { pos };
		let mut end = start;
		while
			end < tokens.len() &&
			self.bounds.has_room(end - start) &&
			ArgKind::from(tokens[end].as_str()).is_positional()
		{
			end += 1;
		}

		let raw = tokens.get(start..end).unwrap_or_default();
		if raw.len() < self.bounds.min {
			return Err(ParseError::TooFewValues {
				name: name.to_owned(),
				min: self.bounds.min,
			});
		}

		if ! raw.is_empty() {
			let mut values = self.convert(raw, name)?;
			state.values.push(
				if self.simplify { values.swap_remove(0) }
				else { Value::List(values) }
			);
		}

		Ok(end)
	}

	/// # Resolve.
	///
	/// Write the final value to the namespace, or leave it out if the default
	/// is suppressed and the argument went unused.
	///
	/// ## Errors
	///
	/// Returns an error if a required argument went unused.
	pub(crate) fn resolve(&self, state: &ArgState, ns: &mut Namespace, name: &str)
	-> Result<(), ParseError> {
		let mentioned = state.mentioned != 0;
		if ! mentioned && state.values.is_empty() {
			if self.required { return Err(ParseError::ValueRequired(name.to_owned())); }
			if self.suppress { return Ok(()); }
		}

		let value = match self.action {
			Action::Store => match state.values.last() {
				Some(v) => v.clone(),
				None => match ns.get(&self.dest) {
					Some(v) if ! v.is_null() => v.clone(),
					_ => {
						let fallback =
							if mentioned { self.constant.as_ref().or(self.default.as_ref()) }
							else { self.default.as_ref() };
						fallback.cloned().unwrap_or_default()
					},
				},
			},
			Action::StoreTrue =>
				if mentioned { Value::Bool(true) }
				else { self.default.clone().unwrap_or(Value::Bool(false)) },
			Action::StoreFalse =>
				if mentioned { Value::Bool(false) }
				else { self.default.clone().unwrap_or(Value::Bool(true)) },
			Action::StoreConst =>
				if mentioned { self.constant.clone() }
				else { self.default.clone() }
				.unwrap_or_default(),
			Action::Append => self.merge(
				ns,
				(! state.values.is_empty()).then(|| state.values.clone()),
			),
			Action::AppendConst => self.merge(
				ns,
				mentioned.then(|| vec![self.constant.clone().unwrap_or_default(); state.mentioned]),
			),
			Action::Count =>
				if mentioned { Value::from(state.mentioned) }
				else { self.default.clone().unwrap_or_default() },
			Action::Extend => self.merge(
				ns,
				(! state.values.is_empty()).then(||
					state.values.iter().cloned().flat_map(Value::into_list).collect()
				),
			),
			Action::Help => return Ok(()),
		};

		ns.set(self.dest.as_str(), value);
		Ok(())
	}

	/// # Convert and Validate.
	fn convert(&self, raw: &[String], name: &str) -> Result<Vec<Value>, ParseError> {
		let values = match &self.ty {
			Some(ty) => raw.iter()
				.map(|r| ty.convert(r).map_err(|e| ParseError::InvalidValue {
					name: name.to_owned(),
					value: r.clone(),
					reason: e.to_string(),
				}))
				.collect::<Result<Vec<_>, _>>()?,
			None => raw.iter().map(|r| Value::Str(r.clone())).collect(),
		};

		if ! self.choices.is_empty() {
			let bad = raw.iter()
				.zip(&values)
				.find(|(_, v)| ! self.choices.contains(v));
			if let Some((r, _)) = bad {
				return Err(ParseError::InvalidChoice {
					name: name.to_owned(),
					value: r.clone(),
					choices: self.choices.iter().map(ToString::to_string).collect(),
				});
			}
		}

		Ok(values)
	}

	/// # Merge Into Existing List.
	///
	/// Fresh values, or the default when there aren't any, are appended to
	/// whatever the destination already holds. With neither, the existing
	/// value is kept as-is (or null).
	fn merge(&self, ns: &Namespace, fresh: Option<Vec<Value>>) -> Value {
		let existing = ns.get(&self.dest).cloned();
		let fresh = match (fresh, &self.default) {
			(Some(v), _) => v,
			(None, Some(d)) => d.clone().into_list(),
			(None, None) => return existing.unwrap_or_default(),
		};

		let mut out = existing.map_or_else(Vec::new, Value::into_list);
		out.extend(fresh);
		Value::List(out)
	}
}



#[derive(Debug, Clone, Default)]
/// # Argument State.
///
/// This is the mutable half of an argument, reset at the start of every
/// parse.
pub(crate) struct ArgState {
	/// # Value Groups (One Per Occurrence).
	values: Vec<Value>,

	/// # Mentions.
	mentioned: usize,
}

impl ArgState {
	/// # Reset.
	pub(crate) fn reset(&mut self) {
		self.values.clear();
		self.mentioned = 0;
	}
}



/// # Choice List.
///
/// E.g. `{rock,paper,scissors}`.
pub(crate) fn choice_list(choices: &[Value]) -> String {
	let inner = choices.iter().map(ToString::to_string).collect::<Vec<_>>();
	format!("{{{}}}", inner.join(","))
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::ValueType;
	use pretty_assertions::assert_eq;

	/// # Build a Spec.
	fn spec(arg: Argument) -> ArgSpec {
		let kind = ArgKind::from(arg.names[0].as_str());
		let dest = arg.names[0].trim_start_matches('-').to_owned();
		ArgSpec::new(arg, kind, &dest).expect("Invalid spec.")
	}

	/// # Owned Tokens.
	fn tokens(raw: &[&str]) -> Vec<String> { raw.iter().map(|&s| s.to_owned()).collect() }

	#[test]
	fn t_new() {
		let s = spec(Argument::new("--foo-bar"));
		assert_eq!(s.dest(), "foo_bar");
		assert_eq!(s.metavar(), "FOO-BAR");
		assert!(s.is_simplified());
		assert_eq!(s.bounds(), Bounds { min: 0, max: Some(1) });

		let s = spec(Argument::new("bar").with_required(true));
		assert_eq!(s.metavar(), "bar");
		assert_eq!(s.bounds(), Bounds { min: 1, max: Some(1) });

		let s = spec(Argument::new("move").with_choices(["rock", "paper", "scissors"]));
		assert_eq!(s.metavar(), "{rock,paper,scissors}");

		let s = spec(
			Argument::new("move")
				.with_choices(["rock", "paper", "scissors"])
				.with_metavar("MOVE")
		);
		assert_eq!(s.metavar(), "MOVE");

		let s = spec(Argument::new("--foo").with_default_suppressed());
		assert!(s.is_default_suppressed());
		assert!(s.default().is_none());
	}

	#[test]
	fn t_new_default_conversion() {
		let s = spec(Argument::new("--length").with_default("10").with_type("int"));
		assert_eq!(s.default(), Some(&Value::Int(10)));

		// Non-string defaults are left alone.
		let s = spec(Argument::new("--width").with_default(10.5).with_type("int"));
		assert_eq!(s.default(), Some(&Value::Float(10.5)));

		let err = ArgSpec::new(
			Argument::new("--length").with_default("ten").with_type(ValueType::Int),
			ArgKind::Optional,
			"length",
		).unwrap_err();
		assert!(matches!(err, DeclarationError::InvalidDefault { .. }));
	}

	#[test]
	fn t_new_bad_type() {
		let err = ArgSpec::new(
			Argument::new("--foo").with_type("complex"),
			ArgKind::Optional,
			"foo",
		).unwrap_err();
		assert_eq!(err, DeclarationError::UnknownType("complex".to_owned()));
	}

	#[test]
	fn t_consume() {
		let s = spec(Argument::new("--foo").with_arity(Arity::Exact(2)));
		let mut state = ArgState::default();

		// Exact arity: two values, stored as a list.
		let t = tokens(&["--foo", "a", "b", "c"]);
		assert_eq!(s.consume(&mut state, &t, 0, "--foo"), Ok(3));
		assert_eq!(state.values, [Value::from(vec!["a", "b"])]);
		assert_eq!(state.mentioned, 1);

		// Too few.
		let t = tokens(&["--foo", "a", "--bar"]);
		assert_eq!(
			s.consume(&mut state, &t, 0, "--foo"),
			Err(ParseError::TooFewValues { name: "--foo".to_owned(), min: 2 }),
		);

		state.reset();
		assert!(state.values.is_empty());
		assert_eq!(state.mentioned, 0);
	}

	#[test]
	fn t_consume_positional() {
		let s = spec(Argument::new("foo").with_arity(Arity::OneOrMore));
		let mut state = ArgState::default();

		// Positionals start on their own token.
		let t = tokens(&["a", "b", "-x", "c"]);
		assert_eq!(s.consume(&mut state, &t, 0, "foo"), Ok(2));
		assert_eq!(state.values, [Value::from(vec!["a", "b"])]);
	}

	#[test]
	fn t_consume_flags() {
		let s = spec(Argument::new("-v").with_action(Action::Count));
		let mut state = ArgState::default();
		let t = tokens(&["-v", "x"]);
		assert_eq!(s.consume(&mut state, &t, 0, "-v"), Ok(1));
		assert_eq!(s.consume(&mut state, &t, 0, "-v"), Ok(1));
		assert!(state.values.is_empty());
		assert_eq!(state.mentioned, 2);

		let s = ArgSpec::builtin_help();
		assert_eq!(s.consume(&mut state, &t, 0, "-h"), Err(ParseError::WantsHelp));
	}

	#[test]
	fn t_consume_choices() {
		let s = spec(
			Argument::new("door")
				.with_type(ValueType::Int)
				.with_choices([1, 2, 3])
		);
		let mut state = ArgState::default();

		assert_eq!(s.consume(&mut state, &tokens(&["3"]), 0, "door"), Ok(1));
		assert_eq!(state.values, [Value::Int(3)]);

		let err = s.consume(&mut state, &tokens(&["4"]), 0, "door").unwrap_err();
		assert_eq!(
			err.to_string(),
			"Argument door: invalid choice '4' (choose from '1', '2', '3')",
		);

		let err = s.consume(&mut state, &tokens(&["four"]), 0, "door").unwrap_err();
		assert!(matches!(err, ParseError::InvalidValue { .. }));
	}

	#[test]
	fn t_resolve_required() {
		let s = spec(Argument::new("bar").with_required(true));
		let mut ns = Namespace::new();
		assert_eq!(
			s.resolve(&ArgState::default(), &mut ns, "bar"),
			Err(ParseError::ValueRequired("bar".to_owned())),
		);
		assert!(ns.is_empty());
	}

	#[test]
	fn t_resolve_suppressed() {
		let s = spec(Argument::new("--foo").with_default_suppressed());
		let mut ns = Namespace::new();
		assert_eq!(s.resolve(&ArgState::default(), &mut ns, "--foo"), Ok(()));
		assert!(! ns.contains("foo"));

		// Flags that were mentioned are still set.
		let s = spec(
			Argument::new("--foo")
				.with_action(Action::StoreTrue)
				.with_default_suppressed()
		);
		let state = ArgState { values: Vec::new(), mentioned: 1 };
		assert_eq!(s.resolve(&state, &mut ns, "--foo"), Ok(()));
		assert_eq!(ns.get_bool("foo"), Some(true));
	}

	#[test]
	fn t_resolve_store() {
		let s = spec(Argument::new("--foo").with_arity(Arity::Optional).with_const("c").with_default("d"));
		let mut ns = Namespace::new();

		// Last value wins.
		let state = ArgState { values: vec![Value::from("1"), Value::from("2")], mentioned: 2 };
		s.resolve(&state, &mut ns, "--foo").unwrap();
		assert_eq!(ns.get_str("foo"), Some("2"));

		// Existing values are preserved when there is nothing new.
		s.resolve(&ArgState::default(), &mut ns, "--foo").unwrap();
		assert_eq!(ns.get_str("foo"), Some("2"));

		// Mentioned without a value.
		let mut ns = Namespace::new();
		let state = ArgState { values: Vec::new(), mentioned: 1 };
		s.resolve(&state, &mut ns, "--foo").unwrap();
		assert_eq!(ns.get_str("foo"), Some("c"));

		// Not mentioned at all.
		let mut ns = Namespace::new();
		s.resolve(&ArgState::default(), &mut ns, "--foo").unwrap();
		assert_eq!(ns.get_str("foo"), Some("d"));
	}

	#[test]
	fn t_resolve_append() {
		let s = spec(Argument::new("--foo").with_action(Action::Append));
		let mut ns = Namespace::new();
		ns.set("foo", vec!["0"]);

		let state = ArgState { values: vec![Value::from("1"), Value::from("2")], mentioned: 2 };
		s.resolve(&state, &mut ns, "--foo").unwrap();
		assert_eq!(ns.get("foo"), Some(&Value::from(vec!["0", "1", "2"])));

		// Nothing new, no default: existing value is kept.
		s.resolve(&ArgState::default(), &mut ns, "--foo").unwrap();
		assert_eq!(ns.get("foo"), Some(&Value::from(vec!["0", "1", "2"])));

		// Nothing at all: null.
		let mut ns = Namespace::new();
		s.resolve(&ArgState::default(), &mut ns, "--foo").unwrap();
		assert_eq!(ns.get("foo"), Some(&Value::Null));
	}

	#[test]
	fn t_resolve_extend() {
		let s = spec(Argument::new("--foo").with_action(Action::Extend).with_arity(Arity::OneOrMore));
		let mut ns = Namespace::new();
		let state = ArgState {
			values: vec![Value::from(vec!["f1"]), Value::from(vec!["f2", "f3"])],
			mentioned: 2,
		};
		s.resolve(&state, &mut ns, "--foo").unwrap();
		assert_eq!(ns.get("foo"), Some(&Value::from(vec!["f1", "f2", "f3"])));
	}

	#[test]
	fn t_resolve_flags() {
		let mut ns = Namespace::new();
		let used = ArgState { values: Vec::new(), mentioned: 3 };
		let unused = ArgState::default();

		let s = spec(Argument::new("--t").with_action(Action::StoreTrue));
		s.resolve(&unused, &mut ns, "--t").unwrap();
		assert_eq!(ns.get_bool("t"), Some(false));
		s.resolve(&used, &mut ns, "--t").unwrap();
		assert_eq!(ns.get_bool("t"), Some(true));

		let s = spec(Argument::new("--f").with_action(Action::StoreFalse));
		s.resolve(&unused, &mut ns, "--f").unwrap();
		assert_eq!(ns.get_bool("f"), Some(true));
		s.resolve(&used, &mut ns, "--f").unwrap();
		assert_eq!(ns.get_bool("f"), Some(false));

		let s = spec(Argument::new("--c").with_action(Action::StoreConst).with_const(42));
		s.resolve(&unused, &mut ns, "--c").unwrap();
		assert_eq!(ns.get("c"), Some(&Value::Null));
		s.resolve(&used, &mut ns, "--c").unwrap();
		assert_eq!(ns.get_int("c"), Some(42));

		let s = spec(Argument::new("--n").with_action(Action::Count).with_default(0));
		s.resolve(&unused, &mut ns, "--n").unwrap();
		assert_eq!(ns.get_int("n"), Some(0));
		s.resolve(&used, &mut ns, "--n").unwrap();
		assert_eq!(ns.get_int("n"), Some(3));

		let s = spec(Argument::new("--a").with_action(Action::AppendConst).with_const("x"));
		s.resolve(&used, &mut ns, "--a").unwrap();
		assert_eq!(ns.get("a"), Some(&Value::from(vec!["x", "x", "x"])));

		// Help never writes anything.
		let s = ArgSpec::builtin_help();
		s.resolve(&unused, &mut ns, "-h").unwrap();
		assert!(! ns.contains("help"));
	}
}
