//! Server-side rendering of the application form
//!
//! `render_form` produces the form fragment for the current phase and
//! `render_page` wraps it in a complete HTML document.

use jobform_conf::Settings;
use jobform_forms::{FieldName, Position};

use crate::component::{ApplicationForm, FormPhase};
use crate::rendering::{
	CheckboxInput, Select, TextInput, Textarea, Widget, WidgetAttrs, html_escape,
};

const SUBMITTED_HEADING: &str = "Form Submitted Successfully!";

/// Render the form fragment.
///
/// In the editing phase only the fields visible for the current position are
/// rendered, each followed by its error message from the last rejected
/// submit. Once submitted the fragment shows the pretty-printed state dump.
///
/// # Examples
///
/// ```
/// use jobform_pages::{ApplicationForm, render_form};
///
/// let html = render_form(&ApplicationForm::new());
///
/// assert!(html.starts_with(r#"<div class="container mt-5"><form>"#));
/// assert!(!html.contains(r#"id="portfolioURL""#));
/// ```
pub fn render_form(form: &ApplicationForm) -> String {
	let mut html = String::from(r#"<div class="container mt-5">"#);

	match form.phase() {
		FormPhase::Editing => render_editing(form, &mut html),
		FormPhase::Submitted => render_submitted(form, &mut html),
	}

	html.push_str("</div>");
	html
}

/// Render a complete HTML document around [`render_form`].
pub fn render_page(form: &ApplicationForm, settings: &Settings) -> String {
	let title = html_escape(&settings.page.title);
	tracing::debug!(phase = ?form.phase(), "rendering application page");

	let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
	html.push_str("<meta charset=\"utf-8\" />\n");
	html.push_str(&format!("<title>{title}</title>\n"));
	if !settings.page.stylesheet.is_empty() {
		html.push_str(&format!(
			"<link rel=\"stylesheet\" href=\"{}\" />\n",
			html_escape(&settings.page.stylesheet)
		));
	}
	html.push_str("</head>\n<body>\n<div class=\"App\">\n");
	html.push_str(&format!(
		"<header class=\"App-header\"><h1>{title}</h1></header>\n"
	));
	html.push_str("<main class=\"container mt-5\">");
	html.push_str(&render_form(form));
	html.push_str("</main>\n</div>\n</body>\n</html>\n");
	html
}

fn render_editing(form: &ApplicationForm, html: &mut String) {
	html.push_str("<form>");

	for field in form.visible_fields() {
		match field {
			FieldName::Position => render_position(form, html),
			FieldName::AdditionalSkills => render_skills(form, html),
			_ => render_text_field(form, field, html),
		}
	}

	html.push_str(r#"<button type="submit" class="btn btn-primary">Submit</button>"#);
	html.push_str("</form>");
}

fn render_submitted(form: &ApplicationForm, html: &mut String) {
	let dump = match form.submitted_output() {
		Ok(dump) => dump.unwrap_or_default(),
		Err(error) => {
			tracing::error!(%error, "failed to serialize submitted form");
			String::new()
		}
	};

	html.push_str(r#"<div class="mt-5">"#);
	html.push_str(&format!("<h2>{SUBMITTED_HEADING}</h2>"));
	html.push_str(&format!("<pre>{}</pre>", html_escape(&dump)));
	html.push_str("</div>");
}

fn text_widget(field: FieldName) -> Box<dyn Widget> {
	match field {
		FieldName::Email => Box::new(TextInput::email()),
		FieldName::RelevantExperience => Box::new(TextInput::number()),
		FieldName::ManagementExperience => Box::new(Textarea::new()),
		FieldName::PreferredInterviewTime => Box::new(TextInput::datetime_local()),
		_ => Box::new(TextInput::new()),
	}
}

fn render_text_field(form: &ApplicationForm, field: FieldName, html: &mut String) {
	let name = field.as_str();
	let error = form.errors().get(field);

	let mut attrs = WidgetAttrs::new().class("form-control");
	if error.is_some() {
		attrs = attrs.class("is-invalid");
	}
	let attrs = attrs.id(name);

	html.push_str(r#"<div class="form-group">"#);
	push_label(html, name, field.label());
	html.push_str(&text_widget(field).render(name, form.state().value(field), &attrs));
	if let Some(message) = error {
		html.push_str(&format!(
			r#"<div class="invalid-feedback">{}</div>"#,
			html_escape(message)
		));
	}
	html.push_str("</div>");
}

fn render_position(form: &ApplicationForm, html: &mut String) {
	let field = FieldName::Position;
	let name = field.as_str();
	let choices: Vec<(&str, &str)> = Position::ALL
		.iter()
		.map(|position| (position.as_str(), position.label()))
		.collect();
	let attrs = WidgetAttrs::new().class("form-control").id(name);

	html.push_str(r#"<div class="form-group">"#);
	push_label(html, name, field.label());
	html.push_str(&Select::new().render_with_choices(
		name,
		Some(form.state().position.as_str()),
		&attrs,
		&choices,
	));
	html.push_str("</div>");
}

fn render_skills(form: &ApplicationForm, html: &mut String) {
	let checkbox = CheckboxInput::new();

	html.push_str(r#"<div class="form-group">"#);
	html.push_str(&format!(
		"<label>{}</label>",
		html_escape(FieldName::AdditionalSkills.label())
	));

	for (skill, selected) in form.state().additional_skills.iter() {
		let name = skill.as_str();
		let attrs = WidgetAttrs::new().class("form-check-input").id(name);
		let value = if selected { "true" } else { "false" };

		html.push_str(r#"<div class="form-check">"#);
		html.push_str(&checkbox.render(name, Some(value), &attrs));
		html.push_str(&format!(
			r#"<label class="form-check-label" for="{}">{}</label>"#,
			html_escape(name),
			html_escape(name)
		));
		html.push_str("</div>");
	}

	if let Some(message) = form.errors().get(FieldName::AdditionalSkills) {
		html.push_str(&format!(
			r#"<div class="text-danger">{}</div>"#,
			html_escape(message)
		));
	}
	html.push_str("</div>");
}

fn push_label(html: &mut String, target: &str, text: &str) {
	html.push_str(&format!(
		r#"<label for="{}">{}</label>"#,
		html_escape(target),
		html_escape(text)
	));
}
