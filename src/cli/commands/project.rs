use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{CreateProjectRequest, UpdateProjectRequest};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_timestamp_lenient;

use super::{open_app, print_json, record};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };

    let mut app = open_app(cfg)?;

    match action {
        ProjectAction::Add {
            name,
            description,
            url,
            discord,
            directory,
            deadline,
        } => {
            let req = CreateProjectRequest {
                name: name.clone(),
                description: description.clone(),
                url: url.clone(),
                discord: discord.clone(),
                directory: directory.clone(),
                deadline: deadline.as_deref().map(parse_timestamp_lenient).transpose()?,
            };

            let project = app.create_project(&req)?;
            record(
                &app,
                cfg,
                "add",
                &format!("project {}", project.id),
                &format!("Created project '{}'", project.name),
            );
            print_json(&project)?;
        }

        ProjectAction::List => {
            print_json(&app.get_all_projects()?)?;
        }

        ProjectAction::Show { id } => {
            let project = app.get_project(*id)?;
            print_json(&project)?;
        }

        ProjectAction::Edit {
            id,
            name,
            description,
            url,
            discord,
            directory,
            deadline,
            status,
        } => {
            let req = UpdateProjectRequest {
                name: name.clone(),
                description: description.clone(),
                url: url.clone(),
                discord: discord.clone(),
                directory: directory.clone(),
                deadline: deadline.as_deref().map(parse_timestamp_lenient).transpose()?,
                status: *status,
            };

            let project = app.update_project(*id, &req)?;
            record(
                &app,
                cfg,
                "edit",
                &format!("project {}", id),
                &format!("Updated project '{}'", project.name),
            );
            print_json(&project)?;
        }

        ProjectAction::Del { id } => {
            let removed = app.delete_project(*id)?;
            if removed {
                record(
                    &app,
                    cfg,
                    "del",
                    &format!("project {}", id),
                    "Deleted project and its time blocks",
                );
                success(format!("Project {} deleted.", id));
            } else {
                info(format!("Project {} does not exist, nothing to delete.", id));
            }
            print_json(&serde_json::json!({ "id": id, "deleted": removed }))?;
        }
    }

    Ok(())
}
