/*!
# Argparse: Help Rendering
*/

use crate::{
	argument::choice_list,
	ArgSpec,
	Arity,
};



/// # Help Column.
///
/// Help text starts at this column; longer name/metavar combinations push it
/// onto its own line.
const COLUMN: usize = 24;

/// # Metavar Repetition Limit.
///
/// Exact arities above this are abbreviated to `M ... M (n)`.
const MAX_REPEAT: usize = 8;



/// # Usage Line.
///
/// E.g. `usage: prog [-h] [--foo FOO] bar`, with a trailing line break.
pub(crate) fn usage(prog: &str, optionals: &[&ArgSpec], positionals: &[&ArgSpec]) -> String {
	let mut out = format!("usage: {prog}");
	for part in optionals.iter().chain(positionals).filter_map(|s| s.usage_part()) {
		out.push(' ');
		out.push_str(&part);
	}
	out.push('\n');
	out
}

/// # Full Help.
///
/// The usage line, description, one section each for positional and optional
/// arguments, and the epilog.
pub(crate) fn render(
	prog: &str,
	description: Option<&str>,
	epilog: Option<&str>,
	optionals: &[&ArgSpec],
	positionals: &[&ArgSpec],
) -> String {
	let mut out = usage(prog, optionals, positionals);

	if let Some(d) = description {
		out.push('\n');
		out.push_str(d);
		out.push('\n');
	}

	for (title, list) in [("positional arguments", positionals), ("optional arguments", optionals)] {
		if list.is_empty() { continue; }
		out.push('\n');
		out.push_str(title);
		out.push_str(":\n");
		for entry in list.iter().filter_map(|s| s.help_entry()) {
			out.push_str(&entry);
		}
	}

	if let Some(e) = epilog {
		out.push('\n');
		out.push_str(e);
		out.push('\n');
	}

	out
}



/// ## Help Pieces.
impl ArgSpec {
	/// # Metavar, Arity-Adjusted.
	fn metavar_form(&self) -> String {
		let m = self.metavar();
		match self.arity() {
			Arity::Single | Arity::Optional => m.to_owned(),
			Arity::OneOrMore => format!("{m} [{m} ...]"),
			Arity::ZeroOrMore => format!("[{m} [{m} ...]]"),
			Arity::Zero => String::new(),
			Arity::Exact(n) if n <= MAX_REPEAT => vec![m; n].join(" "),
			Arity::Exact(n) => format!("{m} ... {m} ({n})"),
		}
	}

	/// # Usage Part.
	///
	/// Optional things get brackets. Returns `None` if the help is
	/// suppressed.
	fn usage_part(&self) -> Option<String> {
		if self.is_help_suppressed() { return None; }

		let mut out =
			if self.kind().is_positional() { self.metavar_form() }
			else {
				let mut out = self.names().first().cloned().unwrap_or_default();
				if self.action().takes_values() {
					out.push(' ');
					out.push_str(&self.metavar_form());
				}
				out
			};
		out.truncate(out.trim_end().len());

		if self.is_required() { Some(out) }
		else { Some(format!("[{out}]")) }
	}

	/// # Help Entry.
	///
	/// One (or two) indented lines describing the argument. Returns `None`
	/// if the help is suppressed.
	fn help_entry(&self) -> Option<String> {
		if self.is_help_suppressed() { return None; }

		let mut out = String::from("  ");
		if self.kind().is_positional() { out.push_str(self.metavar()); }
		else {
			out.push_str(&self.names().join(", "));
			if self.action().takes_values() {
				out.push(' ');
				out.push_str(&self.metavar_form());
			}
		}
		out.push(' ');

		let len = out.chars().count();
		if len <= COLUMN { out.push_str(&" ".repeat(COLUMN - len)); }
		else {
			out.truncate(out.trim_end().len());
			out.push('\n');
			out.push_str(&" ".repeat(COLUMN));
		}

		if let Some(help) = self.help() { out.push_str(&self.expand(help)); }

		out.truncate(out.trim_end().len());
		out.push('\n');
		Some(out)
	}

	/// # Expand Placeholders.
	fn expand(&self, help: &str) -> String {
		if ! help.contains("%(") { return help.to_owned(); }

		let ty = self.type_spec().map_or_else(|| "string".to_owned(), ToString::to_string);
		let default = self.default().map(ToString::to_string).unwrap_or_default();
		let constant = self.constant().map(ToString::to_string).unwrap_or_default();

		help.replace("%(type)s", &ty)
			.replace("%(default)s", &default)
			.replace("%(choices)s", &choice_list(self.choices()))
			.replace("%(const)s", &constant)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Action,
		ArgKind,
		Argument,
		ValueType,
	};
	use pretty_assertions::assert_eq;

	/// # Build a Spec.
	fn spec(arg: Argument) -> ArgSpec {
		let kind = ArgKind::from(arg.names[0].as_str());
		let dest = arg.names.iter()
			.find(|n| n.starts_with("--"))
			.unwrap_or(&arg.names[0])
			.trim_start_matches('-')
			.to_owned();
		ArgSpec::new(arg, kind, &dest).expect("Invalid spec.")
	}

	#[test]
	fn t_metavar_form() {
		for (arity, expected) in [
			(Arity::Single, "FOO"),
			(Arity::Optional, "FOO"),
			(Arity::OneOrMore, "FOO [FOO ...]"),
			(Arity::ZeroOrMore, "[FOO [FOO ...]]"),
			(Arity::Exact(3), "FOO FOO FOO"),
			(Arity::Exact(MAX_REPEAT), "FOO FOO FOO FOO FOO FOO FOO FOO"),
			(Arity::Exact(9), "FOO ... FOO (9)"),
			(Arity::Zero, ""),
		] {
			assert_eq!(spec(Argument::new("--foo").with_arity(arity)).metavar_form(), expected);
		}

		assert_eq!(
			spec(Argument::new("--foo").with_arity(usize::MAX)).metavar_form(),
			format!("FOO ... FOO ({})", usize::MAX),
		);
	}

	#[test]
	fn t_usage_part() {
		assert_eq!(ArgSpec::builtin_help().usage_part().as_deref(), Some("[-h]"));
		assert_eq!(
			spec(Argument::new(["-f", "--foo"])).usage_part().as_deref(),
			Some("[-f FOO]"),
		);
		assert_eq!(
			spec(Argument::new("--foo").with_action(Action::StoreTrue)).usage_part().as_deref(),
			Some("[--foo]"),
		);
		assert_eq!(
			spec(Argument::new("--foo").with_required(true)).usage_part().as_deref(),
			Some("--foo FOO"),
		);
		assert_eq!(
			spec(Argument::new("bar").with_required(true).with_arity(Arity::OneOrMore)).usage_part().as_deref(),
			Some("bar [bar ...]"),
		);
		assert_eq!(
			spec(Argument::new("bar").with_arity(Arity::Optional)).usage_part().as_deref(),
			Some("[bar]"),
		);
		assert!(spec(Argument::new("--foo").with_help_suppressed()).usage_part().is_none());
	}

	#[test]
	fn t_help_entry() {
		assert_eq!(
			ArgSpec::builtin_help().help_entry().as_deref(),
			Some("  -h, --help            show this help message and exit\n"),
		);

		// No help text.
		assert_eq!(
			spec(Argument::new("--foo")).help_entry().as_deref(),
			Some("  --foo FOO\n"),
		);

		// Too long to share a line.
		assert_eq!(
			spec(Argument::new(["-l", "--a-rather-long-name"]).with_help("hi")).help_entry().as_deref(),
			Some("  -l, --a-rather-long-name A-RATHER-LONG-NAME\n                        hi\n"),
		);

		// Huge exact arities are abbreviated rather than spelled out.
		assert_eq!(
			spec(Argument::new("--foo").with_arity(usize::MAX).with_help("hi")).help_entry().as_deref(),
			Some(format!("  --foo FOO ... FOO ({})\n                        hi\n", usize::MAX).as_str()),
		);
	}

	#[test]
	fn t_expand() {
		let s = spec(
			Argument::new("--size")
				.with_type(ValueType::Int)
				.with_default("3")
				.with_choices([1, 2, 3])
				.with_help("a %(type)s from %(choices)s (default: %(default)s)")
		);
		assert_eq!(
			s.help_entry().as_deref(),
			Some("  --size {1,2,3}        a int from {1,2,3} (default: 3)\n"),
		);

		let s = spec(
			Argument::new("--foo")
				.with_converter(|raw| Ok(raw.into()))
				.with_action(Action::StoreConst)
				.with_const(42)
				.with_help("%(type)s %(const)s")
		);
		assert_eq!(
			s.help_entry().as_deref(),
			Some("  --foo                 {callable} 42\n"),
		);

		// Untyped arguments take strings.
		let s = spec(Argument::new("--bar").with_help("a %(type)s"));
		assert_eq!(
			s.help_entry().as_deref(),
			Some("  --bar BAR             a string\n"),
		);
	}

	#[test]
	fn t_render() {
		let foo = spec(Argument::new("--foo").with_help("the foo"));
		let bar = spec(Argument::new("bar").with_required(true));
		let help = ArgSpec::builtin_help();

		assert_eq!(
			render("prog", Some("Does things."), Some("Bye."), &[&help, &foo], &[&bar]),
			"usage: prog [-h] [--foo FOO] bar

Does things.

positional arguments:
  bar

optional arguments:
  -h, --help            show this help message and exit
  --foo FOO             the foo

Bye.
",
		);

		assert_eq!(render("prog", None, None, &[&help], &[]), "usage: prog [-h]

optional arguments:
  -h, --help            show this help message and exit
");
	}
}
