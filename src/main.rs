//! rWrapped main entrypoint.

use rwrapped::run;
use rwrapped::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
