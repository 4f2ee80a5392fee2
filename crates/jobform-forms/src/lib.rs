//! Form processing and validation for the job application form
//!
//! This crate holds everything about the form that does not depend on how it
//! is displayed:
//! - `FormState`: the current value of every field
//! - `FieldUpdate`: one message per editable leaf, applied as a pure merge
//! - `validate`: the conditional rule set producing an `ErrorMap`
//! - Validators for e-mail, portfolio URL, numeric text and date/time values
//!
//! ## Example
//!
//! ```
//! use jobform_forms::{FieldName, FieldUpdate, FormState, Position, validate};
//!
//! let mut state = FormState::default();
//! state.apply(FieldUpdate::Position(Position::Manager));
//!
//! let errors = validate(&state);
//! assert!(errors.contains(FieldName::ManagementExperience));
//! assert!(!errors.contains(FieldName::PortfolioUrl));
//! ```

pub mod error_map;
pub mod field;
pub mod fields;
pub mod form;
pub mod messages;
pub mod update;
pub mod validators;

pub use error_map::ErrorMap;
pub use field::{FieldError, FieldResult};
pub use fields::{AdditionalSkills, FieldName, Position, Skill};
pub use form::{FormError, FormResult, FormState, validate};
pub use update::FieldUpdate;
