use std::process::ExitCode;

use mandelbrot_viewer::{RunGuiCommand, ViewerSettings};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let command = RunGuiCommand::new(ViewerSettings::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "viewer failed");
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}
