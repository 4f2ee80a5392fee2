//! Messages shown beneath invalid fields

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const EMAIL_REQUIRED: &str = "Valid Email is required";
pub const PHONE_NUMBER_REQUIRED: &str = "Valid Phone Number is required";
pub const RELEVANT_EXPERIENCE_INVALID: &str =
	"Relevant Experience must be a number greater than 0";
pub const PORTFOLIO_URL_REQUIRED: &str = "Valid Portfolio URL is required";
pub const MANAGEMENT_EXPERIENCE_REQUIRED: &str = "Management Experience is required";
pub const SKILL_REQUIRED: &str = "At least one skill must be selected";
pub const INTERVIEW_TIME_REQUIRED: &str = "Valid Date and Time is required";
