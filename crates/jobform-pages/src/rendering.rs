//! Form Widgets and HTML Rendering
//!
//! This module provides HTML rendering for the inputs used by the
//! application form. Widgets emit attributes in insertion order and escape
//! every value.

/// Base widget trait
pub trait Widget: Send + Sync {
	/// Render the widget as HTML
	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

	/// Render the widget with choices (for select widgets)
	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &WidgetAttrs,
		_choices: &[(&str, &str)],
	) -> String {
		self.render(name, value, attrs)
	}
}

/// Single-line input widget
#[derive(Debug, Clone)]
pub struct TextInput {
	input_type: &'static str,
}

impl TextInput {
	/// Create a new text input widget
	pub fn new() -> Self {
		Self { input_type: "text" }
	}

	/// Create an email input widget
	pub fn email() -> Self {
		Self { input_type: "email" }
	}

	/// Create a number input widget
	pub fn number() -> Self {
		Self { input_type: "number" }
	}

	/// Create a local date and time input widget
	pub fn datetime_local() -> Self {
		Self { input_type: "datetime-local" }
	}
}

impl Default for TextInput {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for TextInput {
	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut html = format!(
			r#"<input type="{}" name="{}""#,
			self.input_type,
			html_escape(name)
		);

		if let Some(v) = value {
			html.push_str(&format!(r#" value="{}""#, html_escape(v)));
		}

		attrs.write_to(&mut html);
		html.push_str(" />");
		html
	}
}

/// Textarea widget
#[derive(Debug, Clone, Default)]
pub struct Textarea;

impl Textarea {
	/// Create a new textarea widget
	pub fn new() -> Self {
		Self
	}
}

impl Widget for Textarea {
	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut html = format!(r#"<textarea name="{}""#, html_escape(name));
		attrs.write_to(&mut html);
		html.push('>');
		html.push_str(&html_escape(value.unwrap_or_default()));
		html.push_str("</textarea>");
		html
	}
}

/// Checkbox input widget
///
/// The box is checked when `value` is `"true"`.
#[derive(Debug, Clone, Default)]
pub struct CheckboxInput;

impl CheckboxInput {
	/// Create a new checkbox input widget
	pub fn new() -> Self {
		Self
	}
}

impl Widget for CheckboxInput {
	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut html = format!(r#"<input type="checkbox" name="{}""#, html_escape(name));

		if value == Some("true") {
			html.push_str(" checked");
		}

		attrs.write_to(&mut html);
		html.push_str(" />");
		html
	}
}

/// Select widget
#[derive(Debug, Clone, Default)]
pub struct Select;

impl Select {
	/// Create a new select widget
	pub fn new() -> Self {
		Self
	}
}

impl Widget for Select {
	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		self.render_with_choices(name, value, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &WidgetAttrs,
		choices: &[(&str, &str)],
	) -> String {
		let mut html = format!(r#"<select name="{}""#, html_escape(name));
		attrs.write_to(&mut html);
		html.push('>');

		for (choice_value, choice_label) in choices {
			html.push_str(&format!(r#"<option value="{}""#, html_escape(choice_value)));

			if Some(*choice_value) == value {
				html.push_str(" selected");
			}

			html.push('>');
			html.push_str(&html_escape(choice_label));
			html.push_str("</option>");
		}

		html.push_str("</select>");
		html
	}
}

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Widget attribute builder
///
/// Attributes render in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
	attrs: Vec<(String, String)>,
}

impl WidgetAttrs {
	/// Create a new empty attribute builder
	pub fn new() -> Self {
		Self { attrs: Vec::new() }
	}

	/// Add a custom attribute, replacing an existing one with the same key
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let key = key.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.attrs.push((key, value)),
		}
		self
	}

	/// Add a CSS class
	pub fn class(mut self, value: impl Into<String>) -> Self {
		let class_value = value.into();
		if class_value.is_empty() {
			return self;
		}
		if let Some((_, existing)) = self.attrs.iter_mut().find(|(k, _)| k == "class") {
			existing.push(' ');
			existing.push_str(&class_value);
			self
		} else {
			self.attr("class", class_value)
		}
	}

	/// Add an ID attribute
	pub fn id(self, value: impl Into<String>) -> Self {
		self.attr("id", value)
	}

	fn write_to(&self, html: &mut String) {
		for (key, val) in &self.attrs {
			html.push_str(&format!(r#" {}="{}""#, key, html_escape(val)));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_text_input_render() {
		// Arrange
		let widget = TextInput::new();

		// Act
		let html = widget.render("fullName", Some("Jane"), &WidgetAttrs::new().id("fullName"));

		// Assert
		assert_eq!(
			html,
			r#"<input type="text" name="fullName" value="Jane" id="fullName" />"#
		);
	}

	#[rstest]
	#[case(TextInput::email(), "email")]
	#[case(TextInput::number(), "number")]
	#[case(TextInput::datetime_local(), "datetime-local")]
	fn test_input_variants(#[case] widget: TextInput, #[case] input_type: &str) {
		// Act
		let html = widget.render("f", None, &WidgetAttrs::new());

		// Assert
		assert!(html.contains(&format!(r#"type="{input_type}""#)));
		assert!(!html.contains("value="));
	}

	#[rstest]
	fn test_textarea_escapes_content() {
		// Act
		let html = Textarea::new().render("notes", Some("<b>5</b> years"), &WidgetAttrs::new());

		// Assert
		assert_eq!(
			html,
			r#"<textarea name="notes">&lt;b&gt;5&lt;/b&gt; years</textarea>"#
		);
	}

	#[rstest]
	#[case(Some("true"), true)]
	#[case(Some("false"), false)]
	#[case(None, false)]
	fn test_checkbox_checked(#[case] value: Option<&str>, #[case] checked: bool) {
		// Act
		let html = CheckboxInput::new().render("CSS", value, &WidgetAttrs::new());

		// Assert
		assert_eq!(html.contains(" checked"), checked);
	}

	#[rstest]
	fn test_select_render() {
		// Arrange
		let choices = [("", "Select a position"), ("Developer", "Developer")];

		// Act
		let html =
			Select::new().render_with_choices("position", Some("Developer"), &WidgetAttrs::new(), &choices);

		// Assert
		assert_eq!(
			html,
			concat!(
				r#"<select name="position">"#,
				r#"<option value="">Select a position</option>"#,
				r#"<option value="Developer" selected>Developer</option>"#,
				"</select>"
			)
		);
	}

	#[rstest]
	fn test_html_escape() {
		assert_eq!(html_escape("<script>"), "&lt;script&gt;");
		assert_eq!(html_escape("A & B"), "A &amp; B");
		assert_eq!(html_escape(r#"He said "hi""#), "He said &quot;hi&quot;");
		assert_eq!(html_escape("it's"), "it&#x27;s");
	}

	#[rstest]
	fn test_widget_attrs_builder() {
		// Arrange
		let attrs = WidgetAttrs::new()
			.class("form-control")
			.id("email")
			.class("is-invalid")
			.class("")
			.attr("id", "email2")
			.attr("placeholder", "jane@x.com");

		// Act
		let html = TextInput::email().render("email", None, &attrs);

		// Assert
		assert_eq!(
			html,
			r#"<input type="email" name="email" class="form-control is-invalid" id="email2" placeholder="jane@x.com" />"#
		);
	}
}
