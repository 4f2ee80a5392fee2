//! # Settings
//!
//! Configuration for rendering the application form page and for the CLI.
//! Settings are read from a TOML file; every key is optional and falls back
//! to its default.
//!
//! ```toml
//! [page]
//! title = "Job Application Form"
//! stylesheet = "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css"
//!
//! [logging]
//! level = "info"
//! ```

pub mod settings;

pub use settings::{ConfigError, LoggingSettings, PageSettings, Settings};
