//! Settings file loading tests

use jobform_conf::{ConfigError, Settings};
use rstest::rstest;
use std::io::Write;

#[rstest]
fn test_load_settings_from_file() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[page]\ntitle = \"Careers at Example\"").unwrap();

	// Act
	let settings = Settings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.page.title, "Careers at Example");
	assert_eq!(settings.logging.level, "info");
}

#[rstest]
fn test_missing_file_reports_path() {
	// Arrange
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	// Act
	let result = Settings::from_file(&path);

	// Assert
	match result {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("Expected Io error, got {other:?}"),
	}
}
