//! Position being applied for

use crate::form::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position selected in the form.
///
/// `Unset` corresponds to the empty placeholder option and serializes as `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
	#[default]
	#[serde(rename = "")]
	Unset,
	Developer,
	Designer,
	Manager,
}

impl Position {
	/// Options of the position select, in display order.
	pub const ALL: [Position; 4] = [
		Position::Unset,
		Position::Developer,
		Position::Designer,
		Position::Manager,
	];

	/// Value of the select option.
	pub fn as_str(self) -> &'static str {
		match self {
			Position::Unset => "",
			Position::Developer => "Developer",
			Position::Designer => "Designer",
			Position::Manager => "Manager",
		}
	}

	/// Text of the select option.
	pub fn label(self) -> &'static str {
		match self {
			Position::Unset => "Select a position",
			other => other.as_str(),
		}
	}

	/// Whether relevant experience is shown and required.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::Position;
	///
	/// assert!(Position::Developer.requires_relevant_experience());
	/// assert!(Position::Designer.requires_relevant_experience());
	/// assert!(!Position::Manager.requires_relevant_experience());
	/// ```
	pub fn requires_relevant_experience(self) -> bool {
		matches!(self, Position::Developer | Position::Designer)
	}

	/// Whether the portfolio URL is shown and required.
	pub fn requires_portfolio(self) -> bool {
		matches!(self, Position::Designer)
	}

	/// Whether management experience is shown and required.
	pub fn requires_management_experience(self) -> bool {
		matches!(self, Position::Manager)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Position {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Position::ALL
			.into_iter()
			.find(|position| position.as_str() == s)
			.ok_or_else(|| FormError::InvalidPosition(s.to_string()))
	}
}
