//! fieldline CLI
//!
//! Command-line interface for rendering and emitting fieldline log lines

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fieldline")]
#[command(about = "fieldline - Structured Key=Value log lines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render an event to a line on stdout
    Render(commands::render::RenderArgs),
    /// Log an event through the tracing backend
    Emit(commands::emit::EmitArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Emit(args) => commands::emit::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
