//! Settings structures and TOML loading

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Job Application Form";
pub const DEFAULT_STYLESHEET: &str =
	"https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level settings.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Page shell configuration
	pub page: PageSettings,

	/// Logging configuration
	pub logging: LoggingSettings,
}

/// Page shell configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
	/// Document title and page header
	pub title: String,

	/// Stylesheet linked from the document head
	pub stylesheet: String,
}

impl Default for PageSettings {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			stylesheet: DEFAULT_STYLESHEET.to_string(),
		}
	}
}

/// Logging configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// Default filter directive, e.g. `info` or `jobform_pages=debug`
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: DEFAULT_LOG_LEVEL.to_string(),
		}
	}
}

impl Settings {
	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse settings from a TOML string.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_conf::Settings;
	///
	/// let settings = Settings::from_toml("[page]\ntitle = \"Careers\"").unwrap();
	/// assert_eq!(settings.page.title, "Careers");
	/// assert_eq!(settings.logging.level, "info");
	/// ```
	pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
		toml::from_str(content).map_err(|e| ConfigError::Parse {
			message: e.to_string(),
		})
	}

	/// Replace the page title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.page.title = title.into();
		self
	}

	/// Replace the logging filter.
	pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
		self.logging.level = level.into();
		self
	}
}

/// Settings loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse configuration: {message}")]
	Parse { message: String },
}
