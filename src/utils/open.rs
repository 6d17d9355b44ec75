//! Hand a path or URL to the platform's default handler.
//! Both calls spawn the handler and return without waiting for it.

use crate::errors::{AppError, AppResult};
use std::process::Command;

#[cfg(target_os = "windows")]
fn hide_console(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

/// Command that opens a directory in the file explorer.
pub fn directory_command(path: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("explorer");
        cmd.arg(path);
        #[cfg(target_os = "windows")]
        hide_console(&mut cmd);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Command that opens a URL. `cmd /c start` on Windows so custom
/// protocols (discord://, vscode://) resolve too.
pub fn url_command(url: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "start", "", url]);
        #[cfg(target_os = "windows")]
        hide_console(&mut cmd);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

fn spawn(mut cmd: Command, target: &str) -> AppResult<()> {
    cmd.spawn()
        .map(|_| ())
        .map_err(|e| AppError::Open(format!("{target}: {e}")))
}

pub fn open_directory(path: &str) -> AppResult<()> {
    if path.is_empty() {
        return Ok(());
    }
    spawn(directory_command(path), path)
}

pub fn open_url(url: &str) -> AppResult<()> {
    if url.is_empty() {
        return Ok(());
    }
    spawn(url_command(url), url)
}
