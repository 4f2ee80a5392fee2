//! The application form component
//!
//! `ApplicationForm` is a small state machine:
//!
//! ```text
//! Editing ──submit (valid)────▶ Submitted
//!    ▲ │
//!    └─┘ submit (invalid): errors replaced
//! ```
//!
//! Submitted is terminal; the state is read-only from then on.

use jobform_forms::{ErrorMap, FieldName, FieldUpdate, FormError, FormResult, FormState, validate};

/// Phase of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
	/// Accepting input; errors of the last failed submit are displayed
	Editing,
	/// Submitted successfully; the state is frozen
	Submitted,
}

/// Application form component
///
/// ## Fields
///
/// - `state`: Current field values
/// - `errors`: Errors of the last rejected submit attempt
/// - `submitted`: Whether a submit attempt has succeeded
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
	state: FormState,
	errors: ErrorMap,
	submitted: bool,
}

impl ApplicationForm {
	/// Create a form with every field empty and no errors.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	/// Errors of the last rejected submit attempt.
	pub fn errors(&self) -> &ErrorMap {
		&self.errors
	}

	pub fn is_submitted(&self) -> bool {
		self.submitted
	}

	pub fn phase(&self) -> FormPhase {
		if self.submitted {
			FormPhase::Submitted
		} else {
			FormPhase::Editing
		}
	}

	/// Fields rendered for the current position.
	pub fn visible_fields(&self) -> Vec<FieldName> {
		self.state.visible_fields()
	}

	/// Apply a single field update.
	///
	/// Only the targeted field changes. Errors are left alone until the next
	/// submit attempt.
	///
	/// # Errors
	///
	/// Returns [`FormError::AlreadySubmitted`] once the form has been
	/// submitted; the state is not modified.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::{FieldUpdate, Position};
	/// use jobform_pages::ApplicationForm;
	///
	/// let mut form = ApplicationForm::new();
	/// form.update(FieldUpdate::Position(Position::Designer)).unwrap();
	///
	/// assert_eq!(form.state().position, Position::Designer);
	/// ```
	pub fn update(&mut self, update: FieldUpdate) -> FormResult<()> {
		if self.submitted {
			tracing::warn!(field = %update.field(), "ignoring update to submitted form");
			return Err(FormError::AlreadySubmitted);
		}

		tracing::debug!(field = %update.field(), "applying field update");
		self.state.apply(update);
		Ok(())
	}

	/// Apply an input event by element name.
	///
	/// `checked` is only read for the skill checkboxes.
	pub fn handle_input(&mut self, name: &str, value: &str, checked: bool) -> FormResult<()> {
		let update = FieldUpdate::from_input(name, value, checked)?;
		self.update(update)
	}

	/// Handle a submit event.
	///
	/// Validates the whole state from scratch. When no rule fails the form
	/// becomes submitted and the stored errors are kept as they were;
	/// otherwise the stored errors are replaced by the new ones.
	///
	/// Returns whether the form is submitted afterwards. Submitting an
	/// already submitted form does nothing.
	pub fn submit(&mut self) -> bool {
		if self.submitted {
			return true;
		}

		let errors = validate(&self.state);
		if errors.is_empty() {
			tracing::info!(position = %self.state.position, "application form submitted");
			self.submitted = true;
		} else {
			tracing::warn!(
				invalid_fields = errors.len(),
				fields = ?errors.fields().map(FieldName::as_str).collect::<Vec<_>>(),
				"application form rejected"
			);
			self.errors = errors;
		}
		self.submitted
	}

	/// Pretty-printed dump of the final state, once submitted.
	pub fn submitted_output(&self) -> FormResult<Option<String>> {
		if !self.submitted {
			return Ok(None);
		}
		self.state.to_pretty_json().map(Some)
	}
}
