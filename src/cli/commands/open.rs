use crate::cli::parser::{Commands, OpenTarget};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::open;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Open { target } = cmd {
        match target {
            OpenTarget::Dir { path } => {
                let path = crate::utils::path::expand_tilde(path);
                let path = path.to_string_lossy();
                open::open_directory(&path)?;
                info(format!("Opening {}", path));
            }
            OpenTarget::Url { url } => {
                open::open_url(url)?;
                info(format!("Opening {}", url));
            }
        }
    }

    Ok(())
}
