//! mealswipe entrypoint.

use mealswipe::run;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            mealswipe::ui::messages::error(format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
