//! Field-level validation result types

/// Error produced by a single field validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// Returns the human-readable message carried by the error.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::FieldError;
	///
	/// let error = FieldError::Validation("Enter a valid URL".to_string());
	/// assert_eq!(error.message(), "Enter a valid URL");
	/// ```
	pub fn message(&self) -> &str {
		match self {
			FieldError::Validation(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;
