//! Application form component and server-side rendering
//!
//! ## Architecture
//!
//! ```text
//! input event ──▶ FieldUpdate ──▶ ApplicationForm::update ──▶ FormState
//!                                                              │
//! submit ───────▶ ApplicationForm::submit ──▶ validate() ──▶ ErrorMap
//!                                                              │
//!                 render_form / render_page ◀──────────────────┘
//! ```
//!
//! ## Components
//!
//! - **ApplicationForm**: owns the form state, the errors of the last submit
//!   attempt and the submitted flag
//! - **Widgets**: escaped HTML for inputs, selects, textareas and checkboxes
//! - **render_form / render_page**: the editing or submitted view, optionally
//!   wrapped in the page shell
//!
//! ## Example
//!
//! ```
//! use jobform_pages::{ApplicationForm, FormPhase};
//!
//! let mut form = ApplicationForm::new();
//! form.handle_input("fullName", "Jane Doe", false).unwrap();
//!
//! assert!(!form.submit());
//! assert_eq!(form.phase(), FormPhase::Editing);
//! assert!(!form.errors().is_empty());
//! ```

pub mod component;
pub mod page;
pub mod rendering;

pub use component::{ApplicationForm, FormPhase};
pub use page::{render_form, render_page};
pub use rendering::{CheckboxInput, Select, TextInput, Textarea, Widget, WidgetAttrs, html_escape};
