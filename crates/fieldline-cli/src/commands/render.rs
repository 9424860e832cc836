//! Render command
//!
//! Usage: fieldline render [--operation <NAME>] [--field <KEY=VALUE>]... [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

use super::event::EventArgs;

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub event: EventArgs,

    /// Output file path (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let event = args.event.to_event()?;
    let line = fieldline_core::render_line(&event);

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, format!("{}\n", line))?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        println!("{}", line);
    }

    Ok(())
}
