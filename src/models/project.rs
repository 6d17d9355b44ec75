use super::project_status::ProjectStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub discord: Option<String>,
    pub directory: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub discord: Option<String>,
    pub directory: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

impl CreateProjectRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Sparse update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub discord: Option<String>,
    pub directory: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: Option<ProjectStatus>,
}
