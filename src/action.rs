/*!
# Argparse: Actions
*/

use crate::DeclarationError;
use std::{
	fmt,
	str::FromStr,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Action.
///
/// This governs how an argument's occurrences on the command line become its
/// final stored value.
pub enum Action {
	#[default]
	/// # Store the (last) value(s).
	Store,

	/// # Store `true` when mentioned.
	StoreTrue,

	/// # Store `false` when mentioned.
	StoreFalse,

	/// # Store the constant when mentioned.
	StoreConst,

	/// # Collect each occurrence's value(s).
	Append,

	/// # Collect the constant once per mention.
	AppendConst,

	/// # Count the mentions.
	Count,

	/// # Collect every value, flattened.
	Extend,

	/// # Stop and show help.
	Help,
}

impl fmt::Display for Action {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Action {
	type Err = DeclarationError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		match src {
			"store" => Ok(Self::Store),
			"store_true" => Ok(Self::StoreTrue),
			"store_false" => Ok(Self::StoreFalse),
			"store_const" => Ok(Self::StoreConst),
			"append" => Ok(Self::Append),
			"append_const" => Ok(Self::AppendConst),
			"count" => Ok(Self::Count),
			"extend" => Ok(Self::Extend),
			"help" => Ok(Self::Help),
			_ => Err(DeclarationError::UnknownAction(src.to_owned())),
		}
	}
}

impl Action {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Store => "store",
			Self::StoreTrue => "store_true",
			Self::StoreFalse => "store_false",
			Self::StoreConst => "store_const",
			Self::Append => "append",
			Self::AppendConst => "append_const",
			Self::Count => "count",
			Self::Extend => "extend",
			Self::Help => "help",
		}
	}

	#[must_use]
	/// # Is Flag?
	///
	/// Flag actions never consume values.
	pub const fn is_flag(self) -> bool {
		matches!(
			self,
			Self::StoreTrue | Self::StoreFalse | Self::StoreConst | Self::AppendConst | Self::Count
		)
	}

	#[must_use]
	/// # Takes Values?
	///
	/// True for the actions that print a metavar in help output.
	pub const fn takes_values(self) -> bool {
		! self.is_flag() && ! matches!(self, Self::Help)
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_from_str() {
		for a in [
			Action::Store, Action::StoreTrue, Action::StoreFalse,
			Action::StoreConst, Action::Append, Action::AppendConst,
			Action::Count, Action::Extend, Action::Help,
		] {
			assert_eq!(a.as_str().parse::<Action>(), Ok(a));
		}
		assert!("store_maybe".parse::<Action>().is_err());
	}

	#[test]
	fn t_is_flag() {
		assert!(Action::Count.is_flag());
		assert!(Action::AppendConst.is_flag());
		assert!(! Action::Append.is_flag());
		assert!(! Action::Help.is_flag());
		assert!(! Action::Help.takes_values());
		assert!(Action::Extend.takes_values());
	}
}
