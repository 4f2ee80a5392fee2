//! Additional skill checkboxes

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed additional skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
	JavaScript,
	Css,
	Python,
}

impl Skill {
	/// Every skill, in display order.
	pub const ALL: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

	/// Name of the checkbox and key in serialized output.
	pub fn as_str(self) -> &'static str {
		match self {
			Skill::JavaScript => "JavaScript",
			Skill::Css => "CSS",
			Skill::Python => "Python",
		}
	}

	/// Looks up a skill by checkbox name.
	///
	/// # Examples
	///
	/// ```
	/// use jobform_forms::Skill;
	///
	/// assert_eq!(Skill::from_name("CSS"), Some(Skill::Css));
	/// assert_eq!(Skill::from_name("Rust"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Skill> {
		Skill::ALL.into_iter().find(|skill| skill.as_str() == name)
	}
}

impl fmt::Display for Skill {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Selection state of the three skill checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSkills {
	#[serde(rename = "JavaScript")]
	javascript: bool,
	#[serde(rename = "CSS")]
	css: bool,
	#[serde(rename = "Python")]
	python: bool,
}

impl AdditionalSkills {
	pub fn get(&self, skill: Skill) -> bool {
		match skill {
			Skill::JavaScript => self.javascript,
			Skill::Css => self.css,
			Skill::Python => self.python,
		}
	}

	pub fn set(&mut self, skill: Skill, selected: bool) {
		let slot = match skill {
			Skill::JavaScript => &mut self.javascript,
			Skill::Css => &mut self.css,
			Skill::Python => &mut self.python,
		};
		*slot = selected;
	}

	/// Builder form of [`AdditionalSkills::set`].
	pub fn with(mut self, skill: Skill, selected: bool) -> Self {
		self.set(skill, selected);
		self
	}

	pub fn any_selected(&self) -> bool {
		Skill::ALL.into_iter().any(|skill| self.get(skill))
	}

	/// Skills with their selection state, in display order.
	pub fn iter(&self) -> impl Iterator<Item = (Skill, bool)> + '_ {
		Skill::ALL.into_iter().map(|skill| (skill, self.get(skill)))
	}
}
