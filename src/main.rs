//! Main entry point for the zipspan CLI app

use zipspan::buffer::BufferSelector;
use zipspan::{cli, split};

fn main() -> std::process::ExitCode {
    // Parse failures never reach here: `Args::parse` prints usage and exits
    // on its own.
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::run()?;

    if !config.input.is_dir() {
        return Err(format!(
            "input directory '{}' does not exist",
            config.input.display()
        )
        .into());
    }

    let selector = BufferSelector::new();
    split::run(&config, &selector)?;
    Ok(())
}
