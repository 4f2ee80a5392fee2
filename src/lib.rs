//! # jobform
//!
//! A job application form whose required fields depend on the position being
//! applied for.
//!
//! ## Crates
//!
//! - [`forms`] (`jobform-forms`): form state, field updates and validation
//! - [`pages`] (`jobform-pages`): the form component and HTML rendering
//! - [`conf`] (`jobform-conf`): page and logging settings
//!
//! The `jobform` binary lives in `jobform-cli`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `forms` - Validation only
//! - `pages` - Component and rendering (implies `forms` and `conf`)
//! - `conf` - TOML settings
//!
//! ## Quick Example
//!
//! ```
//! use jobform::prelude::*;
//!
//! let mut form = ApplicationForm::new();
//! form.update(FieldUpdate::Position(Position::Manager)).unwrap();
//! form.submit();
//!
//! assert_eq!(
//!     form.errors().get(FieldName::ManagementExperience),
//!     Some("Management Experience is required")
//! );
//! ```

#[cfg(feature = "conf")]
pub use jobform_conf as conf;
#[cfg(feature = "forms")]
pub use jobform_forms as forms;
#[cfg(feature = "pages")]
pub use jobform_pages as pages;

// Re-export forms (forms feature)
#[cfg(feature = "forms")]
pub use jobform_forms::{
	AdditionalSkills, ErrorMap, FieldName, FieldUpdate, FormError, FormResult, FormState,
	Position, Skill, validate,
};

// Re-export pages (pages feature)
#[cfg(feature = "pages")]
pub use jobform_pages::{ApplicationForm, FormPhase, render_form, render_page};

// Re-export settings (conf feature)
#[cfg(feature = "conf")]
pub use jobform_conf::{ConfigError, Settings};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		ErrorMap, FieldName, FieldUpdate, FormError, FormResult, FormState, Position, Skill,
		validate,
	};

	#[cfg(feature = "pages")]
	pub use crate::{ApplicationForm, FormPhase, render_form, render_page};

	#[cfg(feature = "conf")]
	pub use crate::Settings;
}
