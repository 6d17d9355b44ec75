//! ThinkTimer main entrypoint.

use thinktimer::run;
use thinktimer::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
