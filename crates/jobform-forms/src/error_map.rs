//! Validation errors keyed by field

use crate::fields::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field validation errors of one submit attempt.
///
/// A field without an entry is valid. Entries iterate in form order and the
/// map serializes as a JSON object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Records the message for a field, replacing any previous one.
	pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	/// # Examples
	///
	/// ```
	/// use jobform_forms::{ErrorMap, FieldName};
	///
	/// let mut errors = ErrorMap::new();
	/// errors.insert(FieldName::Email, "Valid Email is required");
	///
	/// assert_eq!(errors.get(FieldName::Email), Some("Valid Email is required"));
	/// assert_eq!(errors.get(FieldName::FullName), None);
	/// ```
	pub fn get(&self, field: FieldName) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: FieldName) -> bool {
		self.0.contains_key(&field)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Invalid fields with their messages, in form order.
	pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
		self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
	}

	pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
		self.0.keys().copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_iterates_in_form_order() {
		// Arrange
		let mut errors = ErrorMap::new();
		errors.insert(FieldName::PreferredInterviewTime, "c");
		errors.insert(FieldName::FullName, "a");
		errors.insert(FieldName::AdditionalSkills, "b");

		// Act
		let fields: Vec<FieldName> = errors.fields().collect();

		// Assert
		assert_eq!(
			fields,
			vec![
				FieldName::FullName,
				FieldName::AdditionalSkills,
				FieldName::PreferredInterviewTime,
			]
		);
	}

	#[rstest]
	fn test_serializes_with_wire_names() {
		// Arrange
		let mut errors = ErrorMap::new();
		errors.insert(FieldName::PortfolioUrl, "Valid Portfolio URL is required");

		// Act
		let json = serde_json::to_string(&errors).unwrap();

		// Assert
		assert_eq!(json, r#"{"portfolioURL":"Valid Portfolio URL is required"}"#);
	}
}
