use crate::error_map::ErrorMap;
use crate::field::FieldResult;
use crate::fields::{AdditionalSkills, FieldName, Position};
use crate::messages;
use crate::update::FieldUpdate;
use crate::validators::{DateTimeValidator, EmailValidator, UrlValidator, coerce_number};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),
	#[error("Invalid position: {0:?}")]
	InvalidPosition(String),
	#[error("The form has already been submitted")]
	AlreadySubmitted,
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;

/// Current value of every field of the application form.
///
/// Fields are declared in form order; serialization keeps that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
	pub full_name: String,
	pub email: String,
	pub phone_number: String,
	pub position: Position,
	pub relevant_experience: String,
	#[serde(rename = "portfolioURL")]
	pub portfolio_url: String,
	pub management_experience: String,
	pub additional_skills: AdditionalSkills,
	pub preferred_interview_time: String,
}

impl FormState {
	/// Merges one update into the state, leaving every other field untouched.
	///
	/// Changing the position never clears the conditional fields.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::{FieldUpdate, FormState, Position};
	///
	/// let mut state = FormState::default();
	/// state.apply(FieldUpdate::PortfolioUrl("https://jane.design".to_string()));
	/// state.apply(FieldUpdate::Position(Position::Manager));
	///
	/// assert_eq!(state.portfolio_url, "https://jane.design");
	/// assert_eq!(state.position, Position::Manager);
	/// ```
	pub fn apply(&mut self, update: FieldUpdate) {
		match update {
			FieldUpdate::FullName(v) => self.full_name = v,
			FieldUpdate::Email(v) => self.email = v,
			FieldUpdate::PhoneNumber(v) => self.phone_number = v,
			FieldUpdate::Position(v) => self.position = v,
			FieldUpdate::RelevantExperience(v) => self.relevant_experience = v,
			FieldUpdate::PortfolioUrl(v) => self.portfolio_url = v,
			FieldUpdate::ManagementExperience(v) => self.management_experience = v,
			FieldUpdate::Skill(skill, selected) => self.additional_skills.set(skill, selected),
			FieldUpdate::PreferredInterviewTime(v) => self.preferred_interview_time = v,
		}
	}

	/// Text value of a field, `None` for the skill group.
	pub fn value(&self, field: FieldName) -> Option<&str> {
		let value = match field {
			FieldName::FullName => &self.full_name,
			FieldName::Email => &self.email,
			FieldName::PhoneNumber => &self.phone_number,
			FieldName::Position => return Some(self.position.as_str()),
			FieldName::RelevantExperience => &self.relevant_experience,
			FieldName::PortfolioUrl => &self.portfolio_url,
			FieldName::ManagementExperience => &self.management_experience,
			FieldName::AdditionalSkills => return None,
			FieldName::PreferredInterviewTime => &self.preferred_interview_time,
		};
		Some(value.as_str())
	}

	/// Fields shown for the current position, in form order.
	pub fn visible_fields(&self) -> Vec<FieldName> {
		FieldName::ALL
			.into_iter()
			.filter(|field| match field {
				FieldName::RelevantExperience => self.position.requires_relevant_experience(),
				FieldName::PortfolioUrl => self.position.requires_portfolio(),
				FieldName::ManagementExperience => self.position.requires_management_experience(),
				_ => true,
			})
			.collect()
	}

	/// Pretty-printed JSON dump with two-space indentation.
	pub fn to_pretty_json(&self) -> FormResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// Runs every rule over the state and builds a fresh [`ErrorMap`].
///
/// Rules are independent: each one is evaluated on every call and a failing
/// rule never hides another. Conditional fields are checked only while the
/// current position requires them.
///
/// # Examples
///
/// ```
/// use jobform_forms::{FieldName, FormState, validate};
///
/// let errors = validate(&FormState::default());
/// assert!(errors.contains(FieldName::FullName));
/// assert!(errors.contains(FieldName::AdditionalSkills));
/// assert!(!errors.contains(FieldName::RelevantExperience));
/// ```
pub fn validate(state: &FormState) -> ErrorMap {
	let mut errors = ErrorMap::new();

	if state.full_name.is_empty() {
		errors.insert(FieldName::FullName, messages::FULL_NAME_REQUIRED);
	}

	let email = EmailValidator::new().with_message(messages::EMAIL_REQUIRED);
	record(&mut errors, FieldName::Email, email.validate(&state.email));

	if state.phone_number.is_empty() || coerce_number(&state.phone_number).is_none() {
		errors.insert(FieldName::PhoneNumber, messages::PHONE_NUMBER_REQUIRED);
	}

	if state.position.requires_relevant_experience() {
		let experience = &state.relevant_experience;
		let positive = coerce_number(experience).is_some_and(|years| years > 0.0);
		if experience.is_empty() || !positive {
			errors.insert(
				FieldName::RelevantExperience,
				messages::RELEVANT_EXPERIENCE_INVALID,
			);
		}
	}

	if state.position.requires_portfolio() {
		let url = UrlValidator::new().with_message(messages::PORTFOLIO_URL_REQUIRED);
		record(
			&mut errors,
			FieldName::PortfolioUrl,
			url.validate(&state.portfolio_url),
		);
	}

	if state.position.requires_management_experience() && state.management_experience.is_empty()
	{
		errors.insert(
			FieldName::ManagementExperience,
			messages::MANAGEMENT_EXPERIENCE_REQUIRED,
		);
	}

	if !state.additional_skills.any_selected() {
		errors.insert(FieldName::AdditionalSkills, messages::SKILL_REQUIRED);
	}

	let interview_time = DateTimeValidator::new().with_message(messages::INTERVIEW_TIME_REQUIRED);
	record(
		&mut errors,
		FieldName::PreferredInterviewTime,
		interview_time.validate(&state.preferred_interview_time),
	);

	tracing::debug!(
		position = %state.position,
		invalid_fields = errors.len(),
		"validated application form"
	);

	errors
}

fn record(errors: &mut ErrorMap, field: FieldName, result: FieldResult<()>) {
	if let Err(error) = result {
		errors.insert(field, error.message());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::Skill;
	use rstest::{fixture, rstest};

	#[fixture]
	fn designer() -> FormState {
		FormState {
			full_name: "Jane Doe".to_string(),
			email: "jane@x.com".to_string(),
			phone_number: "5551234567".to_string(),
			position: Position::Designer,
			relevant_experience: "3".to_string(),
			portfolio_url: "https://jane.design".to_string(),
			management_experience: String::new(),
			additional_skills: AdditionalSkills::default().with(Skill::JavaScript, true),
			preferred_interview_time: "2024-05-01T10:00".to_string(),
		}
	}

	#[rstest]
	fn test_valid_designer_has_no_errors(designer: FormState) {
		// Act
		let errors = validate(&designer);

		// Assert
		assert!(errors.is_empty(), "unexpected errors: {errors:?}");
	}

	#[rstest]
	fn test_empty_state_reports_every_unconditional_field() {
		// Act
		let errors = validate(&FormState::default());

		// Assert
		let fields: Vec<FieldName> = errors.fields().collect();
		assert_eq!(
			fields,
			vec![
				FieldName::FullName,
				FieldName::Email,
				FieldName::PhoneNumber,
				FieldName::AdditionalSkills,
				FieldName::PreferredInterviewTime,
			]
		);
	}

	#[rstest]
	fn test_messages_match_fields() {
		// Act
		let errors = validate(&FormState {
			position: Position::Manager,
			..FormState::default()
		});

		// Assert
		assert_eq!(errors.get(FieldName::FullName), Some("Full Name is required"));
		assert_eq!(errors.get(FieldName::Email), Some("Valid Email is required"));
		assert_eq!(
			errors.get(FieldName::PhoneNumber),
			Some("Valid Phone Number is required")
		);
		assert_eq!(
			errors.get(FieldName::ManagementExperience),
			Some("Management Experience is required")
		);
		assert_eq!(
			errors.get(FieldName::AdditionalSkills),
			Some("At least one skill must be selected")
		);
		assert_eq!(
			errors.get(FieldName::PreferredInterviewTime),
			Some("Valid Date and Time is required")
		);
	}

	#[rstest]
	fn test_malformed_values_carry_validator_messages(mut designer: FormState) {
		// Arrange
		designer.email = "jane@x".to_string();
		designer.portfolio_url = "jane.design".to_string();
		designer.preferred_interview_time = "not-a-date".to_string();

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(errors.get(FieldName::Email), Some(messages::EMAIL_REQUIRED));
		assert_eq!(
			errors.get(FieldName::PortfolioUrl),
			Some(messages::PORTFOLIO_URL_REQUIRED)
		);
		assert_eq!(
			errors.get(FieldName::PreferredInterviewTime),
			Some(messages::INTERVIEW_TIME_REQUIRED)
		);
		assert_eq!(errors.len(), 3);
	}

	#[rstest]
	#[case("", true)]
	#[case("jane", true)]
	#[case("jane@x", true)]
	#[case("jane@x.com", false)]
	fn test_email_rule(mut designer: FormState, #[case] email: &str, #[case] invalid: bool) {
		// Arrange
		designer.email = email.to_string();

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(errors.contains(FieldName::Email), invalid);
	}

	#[rstest]
	#[case("", true)]
	#[case("   ", true)]
	#[case("555-1234", true)]
	#[case("0", false)]
	#[case("-42", false)]
	#[case("5551234567", false)]
	fn test_phone_number_rule(mut designer: FormState, #[case] phone: &str, #[case] invalid: bool) {
		// Arrange
		designer.phone_number = phone.to_string();

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(errors.contains(FieldName::PhoneNumber), invalid);
	}

	#[rstest]
	#[case("", true)]
	#[case("abc", true)]
	#[case("0", true)]
	#[case("-1", true)]
	#[case("-0", true)]
	#[case("   ", true)]
	#[case("0.5", false)]
	#[case("3", false)]
	fn test_relevant_experience_rule(
		mut designer: FormState,
		#[case] experience: &str,
		#[case] invalid: bool,
	) {
		// Arrange
		designer.relevant_experience = experience.to_string();

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(errors.contains(FieldName::RelevantExperience), invalid);
	}

	#[rstest]
	#[case(Position::Unset, false)]
	#[case(Position::Developer, true)]
	#[case(Position::Designer, true)]
	#[case(Position::Manager, false)]
	fn test_relevant_experience_only_for_developer_and_designer(
		mut designer: FormState,
		#[case] position: Position,
		#[case] checked: bool,
	) {
		// Arrange
		designer.position = position;
		designer.relevant_experience = String::new();

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(errors.contains(FieldName::RelevantExperience), checked);
	}

	#[rstest]
	fn test_stale_portfolio_does_not_block_other_positions(mut designer: FormState) {
		// Arrange
		designer.portfolio_url = "not a url".to_string();
		assert!(validate(&designer).contains(FieldName::PortfolioUrl));

		// Act
		designer.apply(FieldUpdate::Position(Position::Developer));
		let errors = validate(&designer);

		// Assert
		assert_eq!(designer.portfolio_url, "not a url");
		assert!(errors.is_empty(), "unexpected errors: {errors:?}");
	}

	#[rstest]
	fn test_management_experience_required_for_manager(mut designer: FormState) {
		// Arrange
		designer.apply(FieldUpdate::Position(Position::Manager));

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(
			errors.fields().collect::<Vec<_>>(),
			vec![FieldName::ManagementExperience]
		);
	}

	#[rstest]
	#[case("", true)]
	#[case("not-a-date", true)]
	#[case("2024-05-01T10:00", false)]
	fn test_interview_time_rule(
		mut designer: FormState,
		#[case] time: &str,
		#[case] invalid: bool,
	) {
		// Arrange
		designer.preferred_interview_time = time.to_string();

		// Act
		let errors = validate(&designer);

		// Assert
		assert_eq!(errors.contains(FieldName::PreferredInterviewTime), invalid);
	}

	#[rstest]
	fn test_apply_merges_single_leaf(designer: FormState) {
		// Arrange
		let mut state = designer.clone();

		// Act
		state.apply(FieldUpdate::Skill(Skill::Python, true));

		// Assert
		assert!(state.additional_skills.get(Skill::Python));
		assert!(state.additional_skills.get(Skill::JavaScript));
		assert_eq!(
			FormState {
				additional_skills: designer.additional_skills,
				..state.clone()
			},
			designer
		);
	}

	#[rstest]
	#[case(Position::Unset, vec![])]
	#[case(Position::Developer, vec![FieldName::RelevantExperience])]
	#[case(Position::Designer, vec![FieldName::RelevantExperience, FieldName::PortfolioUrl])]
	#[case(Position::Manager, vec![FieldName::ManagementExperience])]
	fn test_visible_conditional_fields(#[case] position: Position, #[case] expected: Vec<FieldName>) {
		// Arrange
		let state = FormState {
			position,
			..FormState::default()
		};
		let conditional = [
			FieldName::RelevantExperience,
			FieldName::PortfolioUrl,
			FieldName::ManagementExperience,
		];

		// Act
		let visible: Vec<FieldName> = state
			.visible_fields()
			.into_iter()
			.filter(|field| conditional.contains(field))
			.collect();

		// Assert
		assert_eq!(visible, expected);
	}

	#[rstest]
	fn test_pretty_json_dump(designer: FormState) {
		// Act
		let json = designer.to_pretty_json().unwrap();

		// Assert
		insta::assert_snapshot!(json, @r#"
{
  "fullName": "Jane Doe",
  "email": "jane@x.com",
  "phoneNumber": "5551234567",
  "position": "Designer",
  "relevantExperience": "3",
  "portfolioURL": "https://jane.design",
  "managementExperience": "",
  "additionalSkills": {
    "JavaScript": true,
    "CSS": false,
    "Python": false
  },
  "preferredInterviewTime": "2024-05-01T10:00"
}
"#);
	}

	#[rstest]
	fn test_value_of_text_fields(designer: FormState) {
		// Act + Assert
		assert_eq!(designer.value(FieldName::Position), Some("Designer"));
		assert_eq!(designer.value(FieldName::ManagementExperience), Some(""));
		assert_eq!(designer.value(FieldName::AdditionalSkills), None);
	}
}
