//! Update messages for single form fields

use crate::fields::{FieldName, Position, Skill};
use crate::form::{FormError, FormResult};

/// A change to exactly one leaf of [`FormState`](crate::FormState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
	FullName(String),
	Email(String),
	PhoneNumber(String),
	Position(Position),
	RelevantExperience(String),
	PortfolioUrl(String),
	ManagementExperience(String),
	Skill(Skill, bool),
	PreferredInterviewTime(String),
}

impl FieldUpdate {
	/// Translates an input event into an update message.
	///
	/// `name` is the input's name attribute: a field name, or a skill name for
	/// the skill checkboxes (which use `checked` and ignore `value`).
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::{FieldUpdate, Position, Skill};
	///
	/// let update = FieldUpdate::from_input("position", "Designer", false).unwrap();
	/// assert_eq!(update, FieldUpdate::Position(Position::Designer));
	///
	/// let update = FieldUpdate::from_input("Python", "on", true).unwrap();
	/// assert_eq!(update, FieldUpdate::Skill(Skill::Python, true));
	///
	/// assert!(FieldUpdate::from_input("salary", "1", false).is_err());
	/// ```
	pub fn from_input(name: &str, value: &str, checked: bool) -> FormResult<Self> {
		if let Some(skill) = Skill::from_name(name) {
			return Ok(FieldUpdate::Skill(skill, checked));
		}

		let value = value.to_string();
		let update = match name.parse::<FieldName>()? {
			FieldName::FullName => FieldUpdate::FullName(value),
			FieldName::Email => FieldUpdate::Email(value),
			FieldName::PhoneNumber => FieldUpdate::PhoneNumber(value),
			FieldName::Position => FieldUpdate::Position(value.parse()?),
			FieldName::RelevantExperience => FieldUpdate::RelevantExperience(value),
			FieldName::PortfolioUrl => FieldUpdate::PortfolioUrl(value),
			FieldName::ManagementExperience => FieldUpdate::ManagementExperience(value),
			FieldName::PreferredInterviewTime => FieldUpdate::PreferredInterviewTime(value),
			FieldName::AdditionalSkills => {
				return Err(FormError::UnknownField(name.to_string()));
			}
		};
		Ok(update)
	}

	/// The field this message changes.
	pub fn field(&self) -> FieldName {
		match self {
			FieldUpdate::FullName(_) => FieldName::FullName,
			FieldUpdate::Email(_) => FieldName::Email,
			FieldUpdate::PhoneNumber(_) => FieldName::PhoneNumber,
			FieldUpdate::Position(_) => FieldName::Position,
			FieldUpdate::RelevantExperience(_) => FieldName::RelevantExperience,
			FieldUpdate::PortfolioUrl(_) => FieldName::PortfolioUrl,
			FieldUpdate::ManagementExperience(_) => FieldName::ManagementExperience,
			FieldUpdate::Skill(..) => FieldName::AdditionalSkills,
			FieldUpdate::PreferredInterviewTime(_) => FieldName::PreferredInterviewTime,
		}
	}
}
