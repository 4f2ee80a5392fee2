//! Closed vocabularies of the application form
//!
//! Field names, positions and skills are enumerations rather than free text so
//! that every conditional rule over them is checked for exhaustiveness.

pub mod name;
pub mod position;
pub mod skills;

pub use name::FieldName;
pub use position::Position;
pub use skills::{AdditionalSkills, Skill};
