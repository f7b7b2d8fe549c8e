use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::common::{field_errors, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatusKind {
    Ongoing,
    Completed,
}

/// Status-specific details. Only the fields of the current status exist, so a
/// project moved to `completed` cannot keep a stale progress figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        funds: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        goal: Option<String>,
    },
    Completed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        impact: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<String>,
    },
}

impl ProjectStatus {
    pub fn kind(&self) -> ProjectStatusKind {
        match self {
            ProjectStatus::Ongoing { .. } => ProjectStatusKind::Ongoing,
            ProjectStatus::Completed { .. } => ProjectStatusKind::Completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn is(&self, kind: ProjectStatusKind) -> bool {
        self.status.kind() == kind
    }
}

/// Admin project form as the dashboard posts it. Every status field may be
/// sent; only the ones belonging to `status` and carrying a value survive.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct ProjectForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub status: ProjectStatusKind,
    #[validate(range(min = 0, max = 100, message = "Progress must be between 0 and 100"))]
    pub progress: Option<u32>,
    pub funds: Option<String>,
    pub goal: Option<String>,
    pub impact: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ProjectForm {
    pub fn validated(self) -> Result<ValidProject, Vec<FieldError>> {
        self.validate().map_err(|e| field_errors(&e))?;

        let status = match self.status {
            ProjectStatusKind::Ongoing => ProjectStatus::Ongoing {
                progress: self.progress,
                funds: non_empty(self.funds),
                goal: non_empty(self.goal),
            },
            ProjectStatusKind::Completed => ProjectStatus::Completed {
                impact: non_empty(self.impact),
                year: non_empty(self.year),
            },
        };

        Ok(ValidProject {
            title: self.title,
            description: self.description,
            status,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatusKind>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub data_uri: String,
    pub content_type: String,
    pub size: usize,
}
