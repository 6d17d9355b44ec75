use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A block with no end time is a running timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: i64, // seconds
    pub is_manual: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeBlock {
    pub fn state(&self) -> TimerState {
        if self.end_time.is_some() {
            TimerState::Stopped
        } else {
            TimerState::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimeBlockRequest {
    pub project_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// When absent the duration is derived from start/end (0 while running).
    pub duration: Option<i64>,
    #[serde(default)]
    pub is_manual: bool,
    pub description: Option<String>,
}

impl CreateTimeBlockRequest {
    /// A block that starts a running timer.
    pub fn running(project_id: i64, start_time: DateTime<Utc>) -> Self {
        Self {
            project_id,
            start_time,
            end_time: None,
            duration: None,
            is_manual: false,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTimeBlockRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<i64>,
    pub description: Option<String>,
}
