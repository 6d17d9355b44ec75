use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

const OP_WIDTH_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "settings" => Colour::Yellow,
        "stop" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One printable line: `id: date | op (target) => message`.
pub fn format_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let color = color_for_operation(&entry.operation);

    let mut colored = color.paint(entry.operation.as_str()).to_string();
    if !entry.target.is_empty() {
        colored.push_str(&format!(" ({})", entry.target));
    }

    let visible = strip_ansi(&colored);
    let shown = if visible.chars().count() > OP_WIDTH_MAX {
        let mut s: String = visible.chars().take(OP_WIDTH_MAX - 3).collect();
        s.push_str("...");
        // only the operation word keeps its colour
        match s.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(s.as_str()).to_string(),
        }
    } else {
        colored
    };

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        entry.date,
        shown,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                let target = if e.target.is_empty() {
                    0
                } else {
                    e.target.chars().count() + 3
                };
                e.operation.chars().count() + target
            })
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for entry in &entries {
            println!("{}", format_entry(entry, id_w, date_w, op_w));
        }

        Ok(())
    }
}
