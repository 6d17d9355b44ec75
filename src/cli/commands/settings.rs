use crate::cli::parser::{Commands, SettingsAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::UpdateSettingsRequest;

use super::{open_app, print_json, record};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Settings { action } = cmd else {
        return Ok(());
    };

    let mut app = open_app(cfg)?;

    match action {
        SettingsAction::Show => {
            print_json(&app.get_settings()?)?;
        }

        SettingsAction::Set {
            theme,
            language,
            time_format,
            custom_url,
        } => {
            let req = UpdateSettingsRequest {
                theme: *theme,
                language: language.clone(),
                time_format: *time_format,
                custom_url: custom_url.clone(),
            };

            let settings = app.update_settings(&req)?;
            if !req.is_empty() {
                record(&app, cfg, "settings", "settings", "Updated settings");
            }
            print_json(&settings)?;
        }
    }

    Ok(())
}
