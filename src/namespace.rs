/*!
# Argparse: Namespace
*/

use crate::Value;
use indexmap::IndexMap;



#[derive(Debug, Clone, Default, PartialEq)]
/// # Namespace.
///
/// This is the result of a parse: destination keys mapped to their resolved
/// [`Value`]s, in the order they were first written.
///
/// Equality ignores order.
///
/// ## Examples
///
/// ```
/// use argparse::{Namespace, Value};
///
/// let ns: Namespace = [("bar", Value::from("BAR")), ("foo", Value::Null)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(ns.get_str("bar"), Some("BAR"));
/// assert!(ns.contains("foo"));
/// assert!(ns.get("baz").is_none());
/// ```
pub struct Namespace {
	/// # Values by Destination.
	inner: IndexMap<String, Value>,
}

impl<K: Into<String>> FromIterator<(K, Value)> for Namespace {
	fn from_iter<I: IntoIterator<Item=(K, Value)>>(src: I) -> Self {
		Self {
			inner: src.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}

impl IntoIterator for Namespace {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.inner.into_iter() }
}

impl<'a> IntoIterator for &'a Namespace {
	type Item = (&'a String, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, String, Value>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl Namespace {
	#[must_use]
	/// # New (Empty).
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.inner.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.inner.is_empty() }

	#[must_use]
	/// # Contains Key?
	pub fn contains(&self, key: &str) -> bool { self.inner.contains_key(key) }

	#[must_use]
	/// # Get.
	pub fn get(&self, key: &str) -> Option<&Value> { self.inner.get(key) }

	#[must_use]
	/// # Get String.
	pub fn get_str(&self, key: &str) -> Option<&str> { self.get(key).and_then(Value::as_str) }

	#[must_use]
	/// # Get Integer.
	pub fn get_int(&self, key: &str) -> Option<i64> { self.get(key).and_then(Value::as_int) }

	#[must_use]
	/// # Get Float.
	pub fn get_float(&self, key: &str) -> Option<f64> { self.get(key).and_then(Value::as_float) }

	#[must_use]
	/// # Get Bool.
	pub fn get_bool(&self, key: &str) -> Option<bool> { self.get(key).and_then(Value::as_bool) }

	#[must_use]
	/// # Get List.
	pub fn get_list(&self, key: &str) -> Option<&[Value]> { self.get(key).and_then(Value::as_list) }

	/// # Set.
	///
	/// Insert or replace a value, returning the previous one, if any.
	pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
		self.inner.insert(key.into(), value.into())
	}

	/// # Remove.
	pub fn remove(&mut self, key: &str) -> Option<Value> { self.inner.shift_remove(key) }

	/// # Iterate.
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> { self.inner.iter() }

	/// # Keys.
	pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> { self.inner.keys() }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_set_get() {
		let mut ns = Namespace::new();
		assert!(ns.is_empty());

		assert!(ns.set("foo", 42_i64).is_none());
		assert_eq!(ns.set("foo", 43_i64), Some(Value::Int(42)));
		ns.set("bar", vec!["a", "b"]);
		ns.set("baz", true);

		assert_eq!(ns.len(), 3);
		assert_eq!(ns.get_int("foo"), Some(43));
		assert_eq!(ns.get_bool("baz"), Some(true));
		assert_eq!(
			ns.get_list("bar"),
			Some(&[Value::from("a"), Value::from("b")][..]),
		);
		assert_eq!(ns.keys().map(String::as_str).collect::<Vec<_>>(), ["foo", "bar", "baz"]);

		assert_eq!(ns.remove("bar"), Some(Value::from(vec!["a", "b"])));
		assert!(! ns.contains("bar"));
	}

	#[test]
	fn t_eq_ignores_order() {
		let a: Namespace = [("x", Value::Int(1)), ("y", Value::Int(2))].into_iter().collect();
		let b: Namespace = [("y", Value::Int(2)), ("x", Value::Int(1))].into_iter().collect();
		assert_eq!(a, b);
	}
}
