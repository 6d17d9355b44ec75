pub mod db_utils;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod projects;
pub mod settings;
pub mod stats;
pub mod time_blocks;
pub mod update;
