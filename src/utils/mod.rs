pub mod colors;
pub mod date;
pub mod open;
pub mod path;
pub mod time;

pub use time::format_duration;
