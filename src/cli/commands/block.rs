use crate::cli::parser::{BlockAction, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{CreateTimeBlockRequest, UpdateTimeBlockRequest};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_timestamp_lenient;
use crate::utils::format_duration;

use super::{open_app, print_json, record};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Block { action } = cmd else {
        return Ok(());
    };

    let mut app = open_app(cfg)?;

    match action {
        BlockAction::Add {
            project_id,
            start,
            end,
            duration,
            manual,
            description,
        } => {
            let req = CreateTimeBlockRequest {
                project_id: *project_id,
                start_time: parse_timestamp_lenient(start)?,
                end_time: end.as_deref().map(parse_timestamp_lenient).transpose()?,
                duration: *duration,
                is_manual: *manual,
                description: description.clone(),
            };

            let block = app.create_time_block(&req)?;
            record(
                &app,
                cfg,
                "add",
                &format!("block {}", block.id),
                &format!("Time block for project '{}'", block.project_name),
            );
            if block.is_running() {
                info(format!("Timer {} running for '{}'", block.id, block.project_name));
            }
            print_json(&block)?;
        }

        BlockAction::Show { id } => {
            print_json(&app.get_time_block(*id)?)?;
        }

        BlockAction::Day { date } => {
            print_json(&app.get_time_blocks_by_date_str(date)?)?;
        }

        BlockAction::Range { start, end } => {
            print_json(&app.get_time_blocks_by_date_range_str(start, end)?)?;
        }

        BlockAction::Edit {
            id,
            start,
            end,
            duration,
            description,
        } => {
            let req = UpdateTimeBlockRequest {
                start_time: start.as_deref().map(parse_timestamp_lenient).transpose()?,
                end_time: end.as_deref().map(parse_timestamp_lenient).transpose()?,
                duration: *duration,
                description: description.clone(),
            };

            let block = app.update_time_block(*id, &req)?;
            record(&app, cfg, "edit", &format!("block {}", id), "Updated time block");
            print_json(&block)?;
        }

        BlockAction::Stop { id, duration } => {
            let block = match duration {
                Some(d) => app.stop_time_block_with_duration(*id, *d)?,
                None => app.stop_running_time_block(*id)?,
            };

            record(
                &app,
                cfg,
                "stop",
                &format!("block {}", id),
                &format!("Stopped after {} seconds", block.duration),
            );
            success(format!(
                "Stopped block {} after {}",
                block.id,
                format_duration(block.duration)
            ));
            print_json(&block)?;
        }

        BlockAction::Del { id } => {
            let removed = app.delete_time_block(*id)?;
            if removed {
                record(&app, cfg, "del", &format!("block {}", id), "Deleted time block");
                success(format!("Time block {} deleted.", id));
            } else {
                info(format!("Time block {} does not exist, nothing to delete.", id));
            }
            print_json(&serde_json::json!({ "id": id, "deleted": removed }))?;
        }

        BlockAction::Total { project_id } => {
            let total = app.get_total_duration_by_project(*project_id)?;
            info(format!(
                "Project {} total: {}",
                project_id,
                format_duration(total)
            ));
            print_json(&serde_json::json!({ "project_id": project_id, "total_seconds": total }))?;
        }
    }

    Ok(())
}
