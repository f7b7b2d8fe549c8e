use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::common::{field_errors, matches_person, FieldError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn matches(&self, term: &str) -> bool {
        matches_person(&self.first_name, &self.last_name, &self.email, term)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<ContactMessage, Vec<FieldError>> {
        self.validate().map_err(|e| field_errors(&e))?;

        let form = std::mem::take(self);
        Ok(ContactMessage {
            id: Uuid::new_v4().to_string(),
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            submitted_at: now,
        })
    }
}

/// Newest first. Messages with the same timestamp keep the latest arrival on top.
pub fn sort_newest_first(messages: &mut [ContactMessage]) {
    messages.reverse();
    messages.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
}
