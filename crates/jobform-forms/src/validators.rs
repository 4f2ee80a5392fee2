//! Field validators
//!
//! Shape checks used by the application form rules. An empty value never
//! passes a validator.
//!
//! Whitespace follows the browser's definition (`\s` in page scripts), not
//! Unicode `White_Space`: U+FEFF counts as whitespace and U+0085 does not.

use crate::field::{FieldError, FieldResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

// Contents of a character class matching browser whitespace and line
// terminators.
const WHITESPACE_CLASS: &str =
	r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Loose e-mail shape: something, an `@`, something, a dot, something.
// Unanchored, so surrounding text is accepted as long as the shape occurs.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	let ws = WHITESPACE_CLASS;
	Regex::new(&format!(r"[^{ws}]+@[^{ws}]+\.[^{ws}]+"))
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// Loose HTTP/HTTPS URL shape.
//
// The character after the first host character may be anything except a line
// terminator; the rest must be non-whitespace.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	let ws = WHITESPACE_CLASS;
	Regex::new(&format!(
		r"^https?://[^{ws}$.?#][^\n\r\x{{2028}}\x{{2029}}][^{ws}]*$"
	))
	.expect("URL_REGEX: invalid regex pattern")
});

// `24:00` is the end of the given day, which is midnight of the next one.
static END_OF_DAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\d{4}-\d{2}-\d{2})T24:00(:00(\.0+)?)?$")
		.expect("END_OF_DAY_REGEX: invalid regex pattern")
});

// Decimal literal accepted by number coercion: sign, digits, optional
// fraction, optional exponent. `1.`, `.5` and `1e3` are all numbers.
static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$")
		.expect("DECIMAL_REGEX: invalid regex pattern")
});

static YEAR_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\d{4})$").expect("YEAR_REGEX: invalid regex pattern"));

static YEAR_MONTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\d{4})-(\d{2})$").expect("YEAR_MONTH_REGEX: invalid regex pattern")
});

const NAIVE_DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M:%S%.f",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M%:z",
	"%Y-%m-%dT%H:%M:%S%:z",
	"%Y-%m-%dT%H:%M:%S%.f%:z",
];

/// Validates the loose `name@domain.tld` shape of an e-mail address.
///
/// # Examples
///
/// ```
/// use jobform_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("jane@x.com").is_ok());
/// assert!(validator.validate("jane@localhost").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Validates that a string looks like an HTTP or HTTPS URL.
///
/// The check is deliberately loose: a scheme, `://`, a first host character
/// that is not one of `$.?#` or whitespace, and no whitespace afterwards.
///
/// # Examples
///
/// ```
/// use jobform_forms::validators::UrlValidator;
///
/// let validator = UrlValidator::new();
/// assert!(validator.validate("https://jane.design").is_ok());
/// assert!(validator.validate("ftp://jane.design").is_err());
/// assert!(validator.validate("https://.design").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlValidator {
	message: Option<String>,
}

impl UrlValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if URL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid URL");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Validates that a string can be read as a date and time.
///
/// Accepted forms:
/// - `datetime-local` values (`2024-05-01T10:00`, with optional seconds and fraction),
///   including the end-of-day time `24:00`
/// - the same with a `Z` or `±HH:MM` offset, and RFC 3339
/// - calendar dates `YYYY-MM-DD`, `YYYY-MM` and `YYYY`
/// - RFC 2822 (`Wed, 01 May 2024 10:00:00 +0000`)
#[derive(Debug, Clone, Default)]
pub struct DateTimeValidator {
	message: Option<String>,
}

impl DateTimeValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// # Examples
	///
	/// ```
	/// use jobform_forms::validators::DateTimeValidator;
	///
	/// let validator = DateTimeValidator::new();
	/// assert!(validator.validate("2024-05-01T10:00").is_ok());
	/// assert!(validator.validate("2024-02-30T10:00").is_err());
	/// assert!(validator.validate("not-a-date").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if parse_datetime(value).is_some() {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid date/time");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Parses a date/time value in any of the forms accepted by
/// [`DateTimeValidator`]. Offsets are discarded; only validity matters.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
	let value = trim_whitespace(value);
	if value.is_empty() {
		return None;
	}

	if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
		return Some(parsed.naive_local());
	}

	let naive = value.strip_suffix(['Z', 'z']).unwrap_or(value);
	if let Some(caps) = END_OF_DAY_REGEX.captures(naive) {
		let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
		return date.succ_opt()?.and_hms_opt(0, 0, 0);
	}

	for format in NAIVE_DATETIME_FORMATS {
		if let Ok(parsed) = NaiveDateTime::parse_from_str(naive, format) {
			return Some(parsed);
		}
	}

	for format in OFFSET_DATETIME_FORMATS {
		if let Ok(parsed) = DateTime::parse_from_str(value, format) {
			return Some(parsed.naive_local());
		}
	}

	if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
		return date.and_hms_opt(0, 0, 0);
	}

	if let Some(caps) = YEAR_MONTH_REGEX.captures(value) {
		let year = caps[1].parse().ok()?;
		let month = caps[2].parse().ok()?;
		return NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0);
	}

	if let Some(caps) = YEAR_REGEX.captures(value) {
		let year = caps[1].parse().ok()?;
		return NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0);
	}

	DateTime::parse_from_rfc2822(value)
		.ok()
		.map(|parsed| parsed.naive_local())
}

/// Reads a string as a number the way loosely typed form input is coerced.
///
/// Surrounding whitespace is ignored. Accepted are decimal literals (with
/// optional sign, fraction and exponent), `Infinity` with optional sign, and
/// unsigned `0x`, `0o` and `0b` integer literals. A blank string is not a
/// number.
///
/// # Examples
///
/// ```
/// use jobform_forms::validators::coerce_number;
///
/// assert_eq!(coerce_number(" 42 "), Some(42.0));
/// assert_eq!(coerce_number("-1.5e1"), Some(-15.0));
/// assert_eq!(coerce_number("0x1f"), Some(31.0));
/// assert_eq!(coerce_number("12ab"), None);
/// assert_eq!(coerce_number("   "), None);
/// ```
pub fn coerce_number(value: &str) -> Option<f64> {
	let trimmed = trim_whitespace(value);
	if trimmed.is_empty() {
		return None;
	}

	if let Some(number) = parse_radix_literal(trimmed) {
		return Some(number);
	}

	match trimmed {
		"Infinity" | "+Infinity" => return Some(f64::INFINITY),
		"-Infinity" => return Some(f64::NEG_INFINITY),
		_ => {}
	}

	if !DECIMAL_REGEX.is_match(trimmed) {
		return None;
	}
	trimmed.parse::<f64>().ok()
}

/// Whether [`coerce_number`] accepts the value.
pub fn is_numeric(value: &str) -> bool {
	coerce_number(value).is_some()
}

fn is_whitespace(c: char) -> bool {
	matches!(
		c,
		'\t' | '\n'
			| '\u{B}' | '\u{C}'
			| '\r' | ' '
			| '\u{A0}' | '\u{1680}'
			| '\u{2000}'..='\u{200A}'
			| '\u{2028}' | '\u{2029}'
			| '\u{202F}' | '\u{205F}'
			| '\u{3000}' | '\u{FEFF}'
	)
}

fn trim_whitespace(value: &str) -> &str {
	value.trim_matches(is_whitespace)
}

fn parse_radix_literal(value: &str) -> Option<f64> {
	let mut chars = value.chars();
	if chars.next() != Some('0') {
		return None;
	}
	let radix = match chars.next()? {
		'x' | 'X' => 16,
		'o' | 'O' => 8,
		'b' | 'B' => 2,
		_ => return None,
	};
	let digits = chars.as_str();
	if digits.is_empty() {
		return None;
	}
	digits.chars().try_fold(0f64, |acc, c| {
		c.to_digit(radix)
			.map(|digit| acc * f64::from(radix) + f64::from(digit))
	})
}
