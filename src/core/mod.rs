pub mod app;
pub mod log;
pub mod timer;

pub use app::App;
pub use timer::TimerLogic;
