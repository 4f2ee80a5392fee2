//! Field identifiers

use crate::form::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of a field of the application form.
///
/// Variants are declared in form order, so ordered collections keyed by
/// `FieldName` iterate in the order fields appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
	#[serde(rename = "fullName")]
	FullName,
	#[serde(rename = "email")]
	Email,
	#[serde(rename = "phoneNumber")]
	PhoneNumber,
	#[serde(rename = "position")]
	Position,
	#[serde(rename = "relevantExperience")]
	RelevantExperience,
	#[serde(rename = "portfolioURL")]
	PortfolioUrl,
	#[serde(rename = "managementExperience")]
	ManagementExperience,
	#[serde(rename = "additionalSkills")]
	AdditionalSkills,
	#[serde(rename = "preferredInterviewTime")]
	PreferredInterviewTime,
}

impl FieldName {
	/// Every field, in form order.
	pub const ALL: [FieldName; 9] = [
		FieldName::FullName,
		FieldName::Email,
		FieldName::PhoneNumber,
		FieldName::Position,
		FieldName::RelevantExperience,
		FieldName::PortfolioUrl,
		FieldName::ManagementExperience,
		FieldName::AdditionalSkills,
		FieldName::PreferredInterviewTime,
	];

	/// The name used for the input element and in serialized output.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::FieldName;
	///
	/// assert_eq!(FieldName::PortfolioUrl.as_str(), "portfolioURL");
	/// assert_eq!(FieldName::FullName.as_str(), "fullName");
	/// ```
	pub fn as_str(self) -> &'static str {
		match self {
			FieldName::FullName => "fullName",
			FieldName::Email => "email",
			FieldName::PhoneNumber => "phoneNumber",
			FieldName::Position => "position",
			FieldName::RelevantExperience => "relevantExperience",
			FieldName::PortfolioUrl => "portfolioURL",
			FieldName::ManagementExperience => "managementExperience",
			FieldName::AdditionalSkills => "additionalSkills",
			FieldName::PreferredInterviewTime => "preferredInterviewTime",
		}
	}

	/// Label displayed next to the field.
	pub fn label(self) -> &'static str {
		match self {
			FieldName::FullName => "Full Name",
			FieldName::Email => "Email",
			FieldName::PhoneNumber => "Phone Number",
			FieldName::Position => "Applying for Position",
			FieldName::RelevantExperience => "Relevant Experience (years)",
			FieldName::PortfolioUrl => "Portfolio URL",
			FieldName::ManagementExperience => "Management Experience",
			FieldName::AdditionalSkills => "Additional Skills",
			FieldName::PreferredInterviewTime => "Preferred Interview Time",
		}
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldName::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}
