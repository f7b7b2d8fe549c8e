use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::common::{field_errors, matches_person, FieldError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub skills: String,
    pub interests: String,
    pub availability: String,
    pub submitted_at: DateTime<Utc>,
}

impl VolunteerApplication {
    pub fn matches(&self, term: &str) -> bool {
        matches_person(&self.first_name, &self.last_name, &self.email, term)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, Deserialize)]
#[serde(default)]
pub struct VolunteerForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub address: String,
    pub skills: String,
    pub interests: String,
    pub availability: String,
}

impl VolunteerForm {
    /// Validates the form and turns it into a new application, leaving the form
    /// empty. A rejected form keeps its input for correction.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<VolunteerApplication, Vec<FieldError>> {
        self.validate().map_err(|e| field_errors(&e))?;

        let form = std::mem::take(self);
        Ok(VolunteerApplication {
            id: Uuid::new_v4().to_string(),
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone,
            address: form.address,
            skills: form.skills,
            interests: form.interests,
            availability: form.availability,
            submitted_at: now,
        })
    }
}
