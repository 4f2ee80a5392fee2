//! Subcommand handlers
//!
//! Each handler writes its report to `out` and returns the process exit code.

use std::io::Write;

use colored::Colorize;
use jobform_conf::Settings;
use jobform_forms::{ErrorMap, validate};
use jobform_pages::render_page;

use crate::events::{InputEvent, replay};

/// Replay, submit and print the outcome.
pub fn run_submit(events: &[InputEvent], out: &mut impl Write) -> anyhow::Result<u8> {
	let mut form = replay(events)?;

	if form.submit() {
		let dump = form.submitted_output()?.unwrap_or_default();
		writeln!(out, "{}", "Form Submitted Successfully!".green().bold())?;
		writeln!(out, "{dump}")?;
		return Ok(0);
	}

	write_errors(form.errors(), out)?;
	Ok(1)
}

/// Replay and print the error map as JSON without submitting.
pub fn run_validate(events: &[InputEvent], out: &mut impl Write) -> anyhow::Result<u8> {
	let form = replay(events)?;
	let errors = validate(form.state());

	writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
	Ok(if errors.is_empty() { 0 } else { 1 })
}

/// Replay, optionally submit, and print the full HTML page.
pub fn run_render(
	events: &[InputEvent],
	submit: bool,
	settings: &Settings,
	out: &mut impl Write,
) -> anyhow::Result<u8> {
	let mut form = replay(events)?;
	if submit {
		form.submit();
	}

	write!(out, "{}", render_page(&form, settings))?;
	Ok(0)
}

fn write_errors(errors: &ErrorMap, out: &mut impl Write) -> anyhow::Result<()> {
	writeln!(
		out,
		"{} {} field(s) need attention",
		"Error:".red().bold(),
		errors.len()
	)?;
	for (field, message) in errors.iter() {
		writeln!(out, "  {}: {}", field.as_str().yellow(), message)?;
	}
	Ok(())
}
