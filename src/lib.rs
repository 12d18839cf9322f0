/*!
# Argparse

This crate provides a declarative command-line argument parser modeled on
Python's `argparse`: declare your positional and optional arguments up front,
with their types, defaults, arities, and help text, then hand the parser a
token list and get back a [`Namespace`] of resolved values.

Optional arguments start with `--`, or `-` and a non-digit; short flags can be
clustered (`-vvv`), and negative numbers are treated as values. Everything
else is positional, matched in declaration order.

Parse failures are fatal by default: the help screen and error are printed
and the process exits. Call [`ArgumentParser::with_exit_on_error`] with
`false` to handle the [`ParseError`]s yourself.



## Example

```
use argparse::{Action, Argument, ArgumentParser, Arity, ValueType};

let mut parser = ArgumentParser::new()
    .with_prog("frobble")
    .with_description("Frobble the bars.")
    .with_exit_on_error(false);

parser.add_argument(
    Argument::new(["-v", "--verbose"])
        .with_action(Action::Count)
        .with_default(0)
        .with_help("say more")
).unwrap();

parser.add_argument(
    Argument::new("--threads")
        .with_type(ValueType::Int)
        .with_default("4")
        .with_help("worker count (default: %(default)s)")
).unwrap();

parser.add_argument(
    Argument::new("bars")
        .with_arity(Arity::OneOrMore)
        .with_help("the bars to frobble")
).unwrap();

let ns = parser.parse_args(["-vv", "--threads", "8", "a", "b"]).unwrap();
assert_eq!(ns.get_int("verbose"), Some(2));
assert_eq!(ns.get_int("threads"), Some(8));
assert_eq!(ns.get_list("bars").map(<[_]>::len), Some(2));

// Defaults fill in the gaps.
let ns = parser.parse_args(["a"]).unwrap();
assert_eq!(ns.get_int("verbose"), Some(0));
assert_eq!(ns.get_int("threads"), Some(4));

// The help screen is generated from the declarations.
assert!(parser.format_usage().starts_with("usage: frobble [-h] [-v] [--threads THREADS] bars [bars ...]"));
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod action;
mod argument;
mod arity;
mod convert;
mod error;
mod help;
mod kind;
mod namespace;
mod parser;
mod value;

pub use action::Action;
pub use argument::{
	ArgSpec,
	Argument,
	IntoNames,
};
pub use arity::{
	Arity,
	Bounds,
};
pub use convert::{
	ConversionError,
	Converter,
	TypeSpec,
	ValueType,
};
pub use error::{
	DeclarationError,
	ParseError,
};
pub use kind::{
	ArgKind,
	classify,
};
pub use namespace::Namespace;
pub use parser::ArgumentParser;
pub use value::Value;

