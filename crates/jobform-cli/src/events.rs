//! Recorded input events
//!
//! An events file is a JSON array of the change events a browser would emit:
//!
//! ```json
//! [
//!   { "name": "fullName", "value": "Jane Doe" },
//!   { "name": "position", "value": "Designer" },
//!   { "name": "JavaScript", "checked": true }
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use jobform_pages::ApplicationForm;
use serde::Deserialize;

/// A single input event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputEvent {
	/// Element name
	pub name: String,

	/// Element value; ignored for checkboxes
	#[serde(default)]
	pub value: String,

	/// Checkbox state; ignored for every other element
	#[serde(default)]
	pub checked: bool,
}

/// Parse an events document.
pub fn parse_events(content: &str) -> anyhow::Result<Vec<InputEvent>> {
	serde_json::from_str(content).context("events must be a JSON array of input events")
}

/// Read and parse an events file.
pub fn load_events(path: &Path) -> anyhow::Result<Vec<InputEvent>> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read events file {}", path.display()))?;
	parse_events(&content).with_context(|| format!("invalid events file {}", path.display()))
}

/// Replay events into a fresh form, stopping at the first rejected event.
pub fn replay(events: &[InputEvent]) -> anyhow::Result<ApplicationForm> {
	let mut form = ApplicationForm::new();

	for (index, event) in events.iter().enumerate() {
		form.handle_input(&event.name, &event.value, event.checked)
			.with_context(|| format!("event #{index} ({}) was rejected", event.name))?;
	}

	tracing::debug!(events = events.len(), "replayed input events");
	Ok(form)
}

#[cfg(test)]
mod tests {
	use super::*;
	use jobform_forms::{Position, Skill};
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_parse_events_defaults() {
		// Act
		let events =
			parse_events(r#"[{"name": "fullName", "value": "Jane"}, {"name": "CSS", "checked": true}]"#)
				.unwrap();

		// Assert
		assert_eq!(
			events,
			vec![
				InputEvent {
					name: "fullName".to_string(),
					value: "Jane".to_string(),
					checked: false,
				},
				InputEvent {
					name: "CSS".to_string(),
					value: String::new(),
					checked: true,
				},
			]
		);
	}

	#[rstest]
	#[case(r#"{"name": "fullName"}"#)]
	#[case(r#"[{"value": "x"}]"#)]
	#[case("not json")]
	fn test_parse_events_rejects_malformed(#[case] content: &str) {
		assert!(parse_events(content).is_err());
	}

	#[rstest]
	fn test_replay_applies_events_in_order() {
		// Arrange
		let events = parse_events(
			r#"[
				{"name": "position", "value": "Designer"},
				{"name": "Python", "checked": true},
				{"name": "position", "value": "Manager"}
			]"#,
		)
		.unwrap();

		// Act
		let form = replay(&events).unwrap();

		// Assert
		assert_eq!(form.state().position, Position::Manager);
		assert!(form.state().additional_skills.get(Skill::Python));
	}

	#[rstest]
	#[case(r#"[{"name": "salary", "value": "1"}]"#, "salary")]
	#[case(r#"[{"name": "position", "value": "Intern"}]"#, "position")]
	fn test_replay_reports_rejected_event(#[case] content: &str, #[case] name: &str) {
		// Arrange
		let events = parse_events(content).unwrap();

		// Act
		let error = replay(&events).unwrap_err();

		// Assert
		assert!(error.to_string().contains(name));
	}

	#[rstest]
	fn test_load_events_from_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"[{{"name": "email", "value": "a@b.co"}}]"#).unwrap();

		// Act
		let events = load_events(file.path()).unwrap();

		// Assert
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].value, "a@b.co");
	}

	#[rstest]
	fn test_load_events_missing_file() {
		// Arrange
		let dir = tempfile::tempdir().unwrap();

		// Act
		let error = load_events(&dir.path().join("absent.json")).unwrap_err();

		// Assert
		assert!(error.to_string().contains("failed to read events file"));
	}
}
