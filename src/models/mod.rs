pub mod project;
pub mod project_status;
pub mod settings;
pub mod time_block;

pub use project::{CreateProjectRequest, Project, UpdateProjectRequest};
pub use project_status::ProjectStatus;
pub use settings::{Settings, Theme, TimeFormat, UpdateSettingsRequest};
pub use time_block::{CreateTimeBlockRequest, TimeBlock, TimerState, UpdateTimeBlockRequest};
